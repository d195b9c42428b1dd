use crate::config::{MAX_ROUND_MINUTES, MIN_ROUND_MINUTES};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for duration parsing
static TIME_MIN_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m\s*(\d+)s$").unwrap());
static TIME_MIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m$").unwrap());
static TIME_COLON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)$").unwrap());
static TIME_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)s$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidMinutes,
    InvalidSeconds(u32),
}

impl std::fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationParseError::EmptyInput => write!(f, "Round length cannot be empty"),
            DurationParseError::InvalidFormat(hint) => {
                write!(f, "Invalid round length. {}", hint)
            }
            DurationParseError::InvalidMinutes => write!(f, "Invalid minutes value"),
            DurationParseError::InvalidSeconds(s) => {
                write!(f, "Invalid seconds: {} (must be 0-59)", s)
            }
        }
    }
}

impl std::error::Error for DurationParseError {}

fn minutes_to_secs(minutes: &str) -> Result<u32, DurationParseError> {
    minutes
        .parse::<u32>()
        .ok()
        .and_then(|m| m.checked_mul(60))
        .ok_or(DurationParseError::InvalidMinutes)
}

fn seconds_part(seconds: &str) -> Result<u32, DurationParseError> {
    let secs: u32 = seconds
        .parse()
        .map_err(|_| DurationParseError::InvalidSeconds(0))?;
    if secs > 59 {
        return Err(DurationParseError::InvalidSeconds(secs));
    }
    Ok(secs)
}

/// Parse a round length to seconds.
///
/// Supported formats:
/// - Pure number: "10" (interpreted as minutes)
/// - Colon format: "10:30" (minutes:seconds)
/// - Minutes, optionally with seconds: "10m", "10m 30s", "10m30s"
/// - Seconds only: "90s"
///
/// # Examples
/// ```
/// use blind_timer::utils::parse_duration_secs;
/// assert_eq!(parse_duration_secs("10"), Ok(600));
/// assert_eq!(parse_duration_secs("2:30"), Ok(150));
/// assert_eq!(parse_duration_secs("2m30s"), Ok(150));
/// assert_eq!(parse_duration_secs("90s"), Ok(90));
/// ```
pub fn parse_duration_secs(input: &str) -> Result<u32, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return minutes_to_secs(trimmed);
    }

    if let Some(captures) = TIME_COLON_REGEX.captures(trimmed) {
        let secs = seconds_part(&captures[2])?;
        return minutes_to_secs(&captures[1])?
            .checked_add(secs)
            .ok_or(DurationParseError::InvalidMinutes);
    }

    if let Some(captures) = TIME_MIN_SEC_REGEX.captures(trimmed) {
        let secs = seconds_part(&captures[2])?;
        return minutes_to_secs(&captures[1])?
            .checked_add(secs)
            .ok_or(DurationParseError::InvalidMinutes);
    }

    if let Some(captures) = TIME_MIN_REGEX.captures(trimmed) {
        return minutes_to_secs(&captures[1]);
    }

    if let Some(captures) = TIME_SEC_REGEX.captures(trimmed) {
        return captures[1]
            .parse::<u32>()
            .map_err(|_| DurationParseError::InvalidSeconds(0));
    }

    Err(DurationParseError::InvalidFormat(
        "Use: 10, 10:00, 10m, 10m30s, or 90s".to_string(),
    ))
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate a round length and return it in seconds.
pub fn validate_round_length(input: &str) -> Result<u32, String> {
    let secs = parse_duration_secs(input).map_err(|e| e.to_string())?;
    if (MIN_ROUND_MINUTES * 60..=MAX_ROUND_MINUTES * 60).contains(&secs) {
        Ok(secs)
    } else {
        Err(format!(
            "Round length must be between {} and {} minutes",
            MIN_ROUND_MINUTES, MAX_ROUND_MINUTES
        ))
    }
}

use log::debug;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod countdown;
pub mod utils;

use config::TimerConfig;

/// Chip amount for a single blind.
pub type Chips = u64;

/// Blind curve parameters
pub mod curve {
    /// Increment multipliers (times the first blind) for the opening rounds.
    pub const STEP_MULTIPLIERS: [u64; 12] = [1, 1, 1, 2, 2, 4, 8, 12, 8, 20, 20, 40];
    /// Used once the step table runs out and no earlier level is large enough.
    pub const FALLBACK_MULTIPLIER: u64 = 40;
    /// Later rounds grow by at least `1 / MIN_GROWTH_DIVISOR` of the current blind.
    pub const MIN_GROWTH_DIVISOR: u64 = 4;
}

/// One level of the blind structure as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledLevel {
    /// 1-based level number
    pub level: u32,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub duration_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlindLevelError {
    InvalidArgument {
        field: &'static str,
        value: u64,
        reason: &'static str,
    },
}

impl fmt::Display for BlindLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlindLevelError::InvalidArgument {
                field,
                value,
                reason,
            } => write!(f, "Invalid {}: {} ({})", field, value, reason),
        }
    }
}

impl std::error::Error for BlindLevelError {}

/// Big blind paired with a small blind.
#[inline]
pub fn big_blind(small_blind: Chips) -> Chips {
    small_blind * 2
}

/// Smallest level already emitted that is at least `min_increase`.
fn smallest_denomination_at_least(levels: &[Chips], min_increase: Chips) -> Option<Chips> {
    levels.iter().copied().filter(|&v| v >= min_increase).min()
}

/// Generate the small blind for every round of a tournament.
///
/// The first twelve increments follow a fixed table of multiples of `first`.
/// After that each increment is the smallest blind already played that still
/// raises the current blind by at least 25%, so every step can be paid in
/// chips that are already on the table.
///
/// # Errors
/// Returns [`BlindLevelError::InvalidArgument`] when `first` or `rounds` is zero,
/// or when the curve would not fit in a `u64` for the requested round count.
///
/// # Examples
/// ```
/// use blind_timer::blind_levels;
/// assert_eq!(blind_levels(25, 4).unwrap(), vec![25, 50, 75, 100]);
/// ```
pub fn blind_levels(first: Chips, rounds: usize) -> Result<Vec<Chips>, BlindLevelError> {
    if first == 0 {
        return Err(BlindLevelError::InvalidArgument {
            field: "first blind",
            value: first,
            reason: "must be at least 1",
        });
    }
    if rounds == 0 {
        return Err(BlindLevelError::InvalidArgument {
            field: "rounds",
            value: 0,
            reason: "must be at least 1",
        });
    }

    let overflow = BlindLevelError::InvalidArgument {
        field: "rounds",
        value: rounds as u64,
        reason: "blind values would overflow",
    };

    let mut levels = Vec::with_capacity(rounds);
    let mut current = first;

    for i in 0..rounds {
        levels.push(current);

        if i == rounds - 1 {
            break;
        }

        let increase = match curve::STEP_MULTIPLIERS.get(i) {
            Some(&m) => first.checked_mul(m).ok_or_else(|| overflow.clone())?,
            None => {
                let min_increase = current.div_ceil(curve::MIN_GROWTH_DIVISOR);
                match smallest_denomination_at_least(&levels, min_increase) {
                    Some(v) => v,
                    None => first
                        .checked_mul(curve::FALLBACK_MULTIPLIER)
                        .ok_or_else(|| overflow.clone())?,
                }
            }
        };

        current = current.checked_add(increase).ok_or_else(|| overflow.clone())?;
    }

    debug!(
        "Generated {} blind levels from {} (last: {:?})",
        levels.len(),
        first,
        levels.last()
    );

    Ok(levels)
}

/// Expand a timer configuration into the full structure shown in the preview.
pub fn build_schedule(config: &TimerConfig) -> Result<Vec<ScheduledLevel>, BlindLevelError> {
    let levels = blind_levels(config.first_blind, config.rounds)?;
    Ok(levels
        .into_iter()
        .enumerate()
        .map(|(i, small_blind)| ScheduledLevel {
            level: i as u32 + 1,
            small_blind,
            big_blind: big_blind(small_blind),
            duration_secs: config.round_secs,
        })
        .collect())
}

/// Format a number of seconds as `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// JavaScript entry point for the blind curve.
///
/// Returns an array of small blinds, or an error message string when the
/// arguments are rejected.
#[wasm_bindgen(js_name = getBlindLevels)]
pub fn get_blind_levels(first: u32, rounds: u32) -> JsValue {
    match blind_levels(first as Chips, rounds as usize) {
        Ok(levels) => serde_wasm_bindgen::to_value(&levels).unwrap_or(JsValue::NULL),
        Err(e) => serde_wasm_bindgen::to_value(&e.to_string()).unwrap_or(JsValue::NULL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_is_the_starting_blind() {
        assert_eq!(blind_levels(5, 1).unwrap(), vec![5]);
        assert_eq!(blind_levels(10, 1).unwrap(), vec![10]);
        assert_eq!(blind_levels(25, 1).unwrap(), vec![25]);
    }

    #[test]
    fn second_round_doubles() {
        assert_eq!(blind_levels(5, 2).unwrap(), vec![5, 10]);
        assert_eq!(blind_levels(10, 2).unwrap(), vec![10, 20]);
        assert_eq!(blind_levels(25, 2).unwrap(), vec![25, 50]);
    }

    #[test]
    fn opening_rounds_follow_step_table() {
        assert_eq!(blind_levels(25, 3).unwrap(), vec![25, 50, 75]);
        assert_eq!(blind_levels(25, 4).unwrap(), vec![25, 50, 75, 100]);
        assert_eq!(blind_levels(25, 5).unwrap(), vec![25, 50, 75, 100, 150]);
        assert_eq!(
            blind_levels(25, 6).unwrap(),
            vec![25, 50, 75, 100, 150, 200]
        );
        assert_eq!(
            blind_levels(25, 10).unwrap(),
            vec![25, 50, 75, 100, 150, 200, 300, 500, 800, 1000]
        );
    }

    #[test]
    fn thirteen_rounds_enter_denomination_phase() {
        assert_eq!(
            blind_levels(25, 13).unwrap(),
            vec![25, 50, 75, 100, 150, 200, 300, 500, 800, 1000, 1500, 2000, 3000]
        );
        // ceil(3000 / 4) = 750, smallest level at or above that is 800
        assert_eq!(blind_levels(25, 14).unwrap()[13], 3800);
    }

    #[test]
    fn shorter_sequences_are_prefixes() {
        let long = blind_levels(10, 30).unwrap();
        for rounds in 1..30 {
            assert_eq!(blind_levels(10, rounds).unwrap(), long[..rounds]);
        }
    }

    #[test]
    fn zero_arguments_are_rejected() {
        assert!(matches!(
            blind_levels(0, 10),
            Err(BlindLevelError::InvalidArgument {
                field: "first blind",
                ..
            })
        ));
        assert!(matches!(
            blind_levels(10, 0),
            Err(BlindLevelError::InvalidArgument {
                field: "rounds",
                ..
            })
        ));
    }

    #[test]
    fn overflow_is_rejected_instead_of_wrapping() {
        let err = blind_levels(1_000, 1_000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rounds: 1000 (blind values would overflow)"
        );
    }

    #[test]
    fn schedule_derives_big_blind_and_duration() {
        let config = TimerConfig {
            first_blind: 25,
            rounds: 3,
            round_secs: 900,
        };
        let schedule = build_schedule(&config).unwrap();
        assert_eq!(
            schedule,
            vec![
                ScheduledLevel {
                    level: 1,
                    small_blind: 25,
                    big_blind: 50,
                    duration_secs: 900
                },
                ScheduledLevel {
                    level: 2,
                    small_blind: 50,
                    big_blind: 100,
                    duration_secs: 900
                },
                ScheduledLevel {
                    level: 3,
                    small_blind: 75,
                    big_blind: 150,
                    duration_secs: 900
                },
            ]
        );
    }

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(7_200), "120:00");
    }
}

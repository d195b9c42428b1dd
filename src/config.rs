//! Application-level configuration constants.

use crate::Chips;

// Timer behaviour
pub const TICK_MS: u32 = 1_000;
pub const FINAL_MINUTE_SECS: u32 = 60;

// Default values for setup fields
pub const DEFAULT_FIRST_BLIND: Chips = 10;
pub const DEFAULT_ROUNDS: usize = 12;
pub const DEFAULT_ROUND_SECS: u32 = 600;

// Min/Max limits for setup fields
pub const MIN_FIRST_BLIND: Chips = 1;
pub const MAX_FIRST_BLIND: Chips = 1_000;
pub const MIN_ROUNDS: usize = 1;
pub const MAX_ROUNDS: usize = 50;
pub const MIN_ROUND_MINUTES: u32 = 1;
pub const MAX_ROUND_MINUTES: u32 = 120;

// Level change beep
pub const BEEP_FREQUENCY_HZ: f32 = 800.0;
pub const BEEP_GAIN: f32 = 0.3;
pub const BEEP_FADE_GAIN: f32 = 0.01;
pub const BEEP_DURATION_SECS: f64 = 0.5;

/// Session values collected by the setup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub first_blind: Chips,
    pub rounds: usize,
    pub round_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            first_blind: DEFAULT_FIRST_BLIND,
            rounds: DEFAULT_ROUNDS,
            round_secs: DEFAULT_ROUND_SECS,
        }
    }
}

impl TimerConfig {
    /// Copy of this config with every field pulled into its allowed range.
    pub fn clamped(self) -> Self {
        Self {
            first_blind: self.first_blind.clamp(MIN_FIRST_BLIND, MAX_FIRST_BLIND),
            rounds: self.rounds.clamp(MIN_ROUNDS, MAX_ROUNDS),
            round_secs: self
                .round_secs
                .clamp(MIN_ROUND_MINUTES * 60, MAX_ROUND_MINUTES * 60),
        }
    }

    pub fn round_minutes(&self) -> u32 {
        self.round_secs / 60
    }
}

/// Step `value` by `delta` without leaving `[min, max]`.
///
/// Used by the +/- steppers, which disable themselves at either bound.
pub fn step_clamped(value: i64, delta: i64, min: i64, max: i64) -> i64 {
    value.saturating_add(delta).clamp(min, max)
}

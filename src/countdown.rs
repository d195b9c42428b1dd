//! Countdown model behind the active timer page.
//!
//! The model is driven purely by explicit calls: the browser interval only
//! feeds it `Tick` actions. A tick that arrives while paused is ignored, so
//! once `pause` has been applied no later tick can move the clock or the level.

use crate::{big_blind, Chips};
use log::info;
use std::rc::Rc;
use yew::Reducible;

use crate::config::FINAL_MINUTE_SECS;

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    /// One second elapsed within the current level
    Counted,
    /// Moved on to the given 1-based level
    LevelUp { level: usize },
    /// Last level expired
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    levels: Rc<Vec<Chips>>,
    round_secs: u32,
    remaining_secs: u32,
    current: usize,
    running: bool,
    finished: bool,
    /// Bumped on every level change, so observers can react to transitions.
    level_changes: u32,
}

impl Countdown {
    pub fn new(levels: Rc<Vec<Chips>>, round_secs: u32) -> Self {
        Self {
            levels,
            round_secs,
            remaining_secs: round_secs,
            current: 0,
            running: false,
            finished: false,
            level_changes: 0,
        }
    }

    /// Start counting. Returns `false` if already running, finished, or empty.
    pub fn start(&mut self) -> bool {
        if self.running || self.finished || self.levels.is_empty() {
            return false;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return TickOutcome::Counted;
        }
        self.advance()
    }

    /// Jump to the next level immediately, as if the current one had expired.
    pub fn skip_level(&mut self) -> TickOutcome {
        if self.finished || self.levels.is_empty() {
            return TickOutcome::Idle;
        }
        self.advance()
    }

    /// Stop and restore the full round time, staying on the current level.
    pub fn reset(&mut self) {
        self.running = false;
        self.finished = false;
        self.remaining_secs = self.round_secs;
    }

    fn advance(&mut self) -> TickOutcome {
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            self.remaining_secs = self.round_secs;
            self.level_changes = self.level_changes.wrapping_add(1);
            TickOutcome::LevelUp {
                level: self.level_number(),
            }
        } else {
            self.running = false;
            self.finished = true;
            self.remaining_secs = 0;
            TickOutcome::Completed
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn round_secs(&self) -> u32 {
        self.round_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn level_changes(&self) -> u32 {
        self.level_changes
    }

    /// 1-based number of the level being played.
    pub fn level_number(&self) -> usize {
        self.current + 1
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn small_blind(&self) -> Chips {
        self.levels.get(self.current).copied().unwrap_or(0)
    }

    pub fn big_blind(&self) -> Chips {
        big_blind(self.small_blind())
    }

    pub fn is_final_minute(&self) -> bool {
        self.running && self.remaining_secs <= FINAL_MINUTE_SECS
    }
}

pub enum CountdownAction {
    Start,
    Pause,
    Tick,
    Reset,
    SkipLevel,
    /// Replace the schedule and start over from level 1
    Configure {
        levels: Rc<Vec<Chips>>,
        round_secs: u32,
    },
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CountdownAction::Start => {
                if next.start() {
                    info!("Timer started at level {}", next.level_number());
                }
            }
            CountdownAction::Pause => {
                if next.running {
                    info!("Timer paused with {}s left", next.remaining_secs);
                }
                next.pause();
            }
            CountdownAction::Tick => match next.tick() {
                TickOutcome::LevelUp { level } => {
                    info!("Blinds up: level {} ({}/{})", level, next.small_blind(), next.big_blind());
                }
                TickOutcome::Completed => info!("All {} levels completed", next.level_count()),
                TickOutcome::Idle | TickOutcome::Counted => {}
            },
            CountdownAction::Reset => next.reset(),
            CountdownAction::SkipLevel => {
                if let TickOutcome::LevelUp { level } = next.skip_level() {
                    info!("Skipped to level {}", level);
                }
            }
            CountdownAction::Configure { levels, round_secs } => {
                next = Countdown::new(levels, round_secs);
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

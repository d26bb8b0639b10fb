use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Result, TimerError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Complete,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimerState::Idle => "Idle",
            TimerState::Running => "Running",
            TimerState::Paused => "Paused",
            TimerState::Complete => "Complete",
        };

        write!(f, "{}", name)
    }
}

/// Countdown against a fixed deadline.
///
/// `current_time` is the exact time left as of the last sample; the deadline
/// only exists while running and is recomputed on every resume, so a pause
/// neither loses nor gains time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    initial_time: Duration,
    current_time: Duration,
    deadline: Option<Instant>,
    state: TimerState,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            initial_time: Duration::ZERO,
            current_time: Duration::ZERO,
            deadline: None,
            state: TimerState::Idle,
        }
    }
}

impl Countdown {
    pub fn from_secs(total_secs: u64) -> Result<Self> {
        let mut countdown = Self::default();
        countdown.reset(total_secs)?;
        Ok(countdown)
    }

    pub fn start(&mut self, now: Instant) -> Result<()> {
        match self.state {
            TimerState::Running => Ok(()),
            _ if self.current_time.is_zero() => Err(TimerError::invalid_duration(
                "Timer duration must be greater than zero seconds.",
            )),
            previous => {
                let deadline = now
                    .checked_add(self.current_time)
                    .ok_or_else(|| TimerError::invalid_duration("Duration is too large."))?;
                self.deadline = Some(deadline);
                self.state = TimerState::Running;
                debug!(%previous, remaining = self.remaining_secs(), "countdown running");
                Ok(())
            }
        }
    }

    /// Freezes the remaining time. Returns `false` when not running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.sample(now);
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            self.deadline = None;
            debug!(remaining = self.remaining_secs(), "countdown paused");
        }
        true
    }

    /// Samples the clock and returns the whole seconds left.
    pub fn tick(&mut self, now: Instant) -> u64 {
        if self.state == TimerState::Running {
            self.sample(now);
        }
        self.remaining_secs()
    }

    /// Loads a fresh duration and returns to idle. An invalid duration
    /// leaves the countdown empty.
    pub fn reset(&mut self, total_secs: u64) -> Result<()> {
        *self = Self::default();

        if total_secs == 0 {
            return Err(TimerError::invalid_duration(
                "Timer duration must be greater than zero seconds.",
            ));
        }

        self.initial_time = Duration::from_secs(total_secs);
        self.current_time = self.initial_time;
        debug!(total = total_secs, "countdown loaded");
        Ok(())
    }

    fn sample(&mut self, now: Instant) {
        let Some(deadline) = self.deadline else {
            return;
        };

        self.current_time = deadline.saturating_duration_since(now);
        if round_secs(self.current_time) == 0 {
            self.current_time = Duration::ZERO;
            self.deadline = None;
            self.state = TimerState::Complete;
            debug!("countdown complete");
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_complete(&self) -> bool {
        self.state == TimerState::Complete
    }

    pub fn total_secs(&self) -> u64 {
        self.initial_time.as_secs()
    }

    pub fn remaining_secs(&self) -> u64 {
        round_secs(self.current_time)
    }

    /// Elapsed fraction in `[0, 1]`; zero when nothing is loaded.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }

        let remaining = self.remaining_secs().min(total);
        1.0 - remaining as f64 / total as f64
    }
}

/// Nearest whole second, ties to even.
fn round_secs(duration: Duration) -> u64 {
    const HALF: u32 = 500_000_000;

    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if nanos > HALF || (nanos == HALF && secs % 2 == 1) {
        secs + 1
    } else {
        secs
    }
}

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::backend::{format_time, parse_duration, Countdown};

pub const READY_STATUS: &str = "Ready for launch 🚀";
const DEFAULT_DURATION: &str = "01:00";
const DEFAULT_LABEL: &str = "Mission";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Duration,
    Label,
    Start,
    Pause,
    Reset,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Duration,
        Focus::Label,
        Focus::Start,
        Focus::Pause,
        Focus::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
    Abort,
}

/// Inputs, controls and status of the interactive timer.
pub struct ControlPanel {
    countdown: Countdown,
    duration_input: String,
    label_input: String,
    status: String,
    focus: Focus,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            countdown: Countdown::default(),
            duration_input: DEFAULT_DURATION.to_string(),
            label_input: DEFAULT_LABEL.to_string(),
            status: READY_STATUS.to_string(),
            focus: Focus::Duration,
        }
    }

    #[cfg(test)]
    fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn duration_input(&self) -> &str {
        &self.duration_input
    }

    pub fn label_input(&self) -> &str {
        &self.label_input
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn time_string(&self) -> String {
        format_time(self.countdown.remaining_secs())
    }

    pub fn percent(&self) -> u16 {
        (self.countdown.progress() * 100.0) as u16
    }

    fn load_from_input(&mut self) -> bool {
        let loaded = parse_duration(&self.duration_input)
            .and_then(|seconds| self.countdown.reset(seconds));

        match loaded {
            Ok(()) => true,
            Err(err) => {
                debug!(input = %self.duration_input, %err, "rejected duration");
                self.countdown = Countdown::default();
                self.status = format!("⚠️ {err}");
                false
            }
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.countdown.is_running() {
            return;
        }

        if self.countdown.remaining_secs() == 0 && !self.load_from_input() {
            return;
        }

        if let Err(err) = self.countdown.start(now) {
            self.status = format!("⚠️ {err}");
            return;
        }

        let label = match self.label_input.trim() {
            "" => DEFAULT_LABEL,
            label => label,
        };
        info!(label, remaining = self.countdown.remaining_secs(), "countdown started");
        self.status = format!("🛰️ {label} in progress");
    }

    pub fn pause(&mut self, now: Instant) {
        if !self.countdown.pause(now) {
            return;
        }

        if self.countdown.is_complete() {
            self.status = "✨ Liftoff! Timer complete.".to_string();
        } else {
            self.status = "⏸️ Paused".to_string();
        }
    }

    pub fn reset(&mut self) {
        if self.load_from_input() {
            self.status = READY_STATUS.to_string();
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if !self.countdown.is_running() {
            return;
        }

        self.countdown.tick(now);
        if self.countdown.is_complete() {
            info!("countdown complete");
            self.status = "✨ Liftoff! Timer complete.".to_string();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Abort;
        }

        match key.code {
            KeyCode::Esc => return Flow::Close,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => match self.focus {
                Focus::Duration | Focus::Label | Focus::Start => self.start(now),
                Focus::Pause => self.pause(now),
                Focus::Reset => self.reset(),
            },
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }

        Flow::Continue
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Duration => Some(&mut self.duration_input),
            Focus::Label => Some(&mut self.label_input),
            _ => None,
        }
    }
}

use std::time::Duration;

use clap::Parser;

use crate::backend::{parse_duration, Countdown};
use crate::error::{Result, TimerError};

#[derive(Debug, Clone, Parser)]
#[command(name = "space-timer")]
#[command(about = "Simple, dynamic, space-themed countdown timer.")]
pub struct CliConfig {
    #[arg(help = "Duration in seconds or mm:ss format (e.g., 90 or 01:30).")]
    pub duration: Option<String>,

    #[arg(
        long,
        default_value = "Mission",
        help = "Optional mission label shown on startup (CLI mode)."
    )]
    pub label: String,

    #[arg(long, help = "Launch the interactive space timer UI.")]
    pub ui: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Countdown(Countdown),
}

impl CliConfig {
    /// The duration argument, or `MissingDuration` when absent or blank.
    pub fn duration_input(&self) -> Result<&str> {
        self.duration
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or(TimerError::MissingDuration)
    }

    /// Resolves the run mode. `--ui` wins over any duration given.
    pub fn mode(&self) -> Result<Mode> {
        if self.ui {
            return Ok(Mode::Interactive);
        }

        let seconds = parse_duration(self.duration_input()?)?;
        Ok(Mode::Countdown(Countdown::from_secs(seconds)?))
    }
}

/// Timing and presentation constants shared by both displays.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub cli_tick: Duration,
    pub ui_tick: Duration,
    pub twinkle_tick: Duration,
    pub bar_width: usize,
    pub star_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cli_tick: Duration::from_millis(200),
            ui_tick: Duration::from_millis(150),
            twinkle_tick: Duration::from_millis(240),
            bar_width: 24,
            star_count: 65,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    mod cli_config {
        use super::*;

        #[test]
        fn should_default_label_to_mission() {
            let config = CliConfig::parse_from(["space-timer", "90"]);

            assert_eq!(config.duration.as_deref(), Some("90"));
            assert_eq!(config.label, "Mission");
            assert!(!config.ui);
            assert!(!config.verbose);
        }

        #[test]
        fn should_allow_ui_without_duration() {
            let config = CliConfig::parse_from(["space-timer", "--ui", "--label", "Apollo"]);

            assert!(config.ui);
            assert!(config.duration.is_none());
            assert_eq!(config.label, "Apollo");
        }
    }

    mod duration_input {
        use super::*;

        #[test]
        fn should_treat_empty_and_blank_durations_as_missing() {
            for args in [
                vec!["space-timer"],
                vec!["space-timer", ""],
                vec!["space-timer", "  "],
            ] {
                let config = CliConfig::parse_from(args);

                let err = config.duration_input().unwrap_err();
                assert!(matches!(err, TimerError::MissingDuration));
                assert_eq!(err.exit_code(), 2);
            }
        }

        #[test]
        fn should_return_given_duration() {
            let config = CliConfig::parse_from(["space-timer", "01:30"]);

            assert_eq!(config.duration_input().unwrap(), "01:30");
        }
    }

    mod mode {
        use super::*;

        #[test]
        fn should_ignore_duration_when_ui_is_requested() {
            let config = CliConfig::parse_from(["space-timer", "1:aa", "--ui"]);

            assert_eq!(config.mode().unwrap(), Mode::Interactive);
        }

        #[test]
        fn should_load_countdown_from_duration() {
            let config = CliConfig::parse_from(["space-timer", "01:30"]);

            assert_eq!(
                config.mode().unwrap(),
                Mode::Countdown(Countdown::from_secs(90).unwrap())
            );
        }

        #[test]
        fn should_fail_with_exit_one_on_invalid_duration() {
            for input in ["0", "1:aa", "soon"] {
                let config = CliConfig::parse_from(["space-timer", input]);

                let err = config.mode().unwrap_err();
                assert!(matches!(err, TimerError::InvalidDuration { .. }));
                assert_eq!(err.exit_code(), 1);
            }
        }

        #[test]
        fn should_report_missing_duration_without_ui() {
            let config = CliConfig::parse_from(["space-timer", "--label", "Apollo"]);

            assert!(matches!(config.mode(), Err(TimerError::MissingDuration)));
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("{reason}")]
    InvalidDuration { reason: String },

    #[error("duration is required in CLI mode unless --ui is used.")]
    MissingDuration,

    #[error("Mission aborted by user.")]
    Interrupted,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl TimerError {
    pub fn invalid_duration(reason: impl Into<String>) -> Self {
        TimerError::InvalidDuration {
            reason: reason.into(),
        }
    }

    /// Process exit status for this error at the binary boundary.
    pub fn exit_code(&self) -> u8 {
        match self {
            TimerError::InvalidDuration { .. } => 1,
            TimerError::MissingDuration => 2,
            TimerError::Interrupted => 130,
            TimerError::Io(_) | TimerError::Signal(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimerError>;

#[cfg(test)]
mod test {
    use super::*;

    mod exit_code {
        use super::*;

        #[test]
        fn should_map_each_error_to_its_exit_status() {
            assert_eq!(TimerError::invalid_duration("bad").exit_code(), 1);
            assert_eq!(TimerError::MissingDuration.exit_code(), 2);
            assert_eq!(TimerError::Interrupted.exit_code(), 130);

            let io = std::io::Error::new(std::io::ErrorKind::Other, "closed");
            assert_eq!(TimerError::from(io).exit_code(), 1);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn should_show_only_the_reason_for_invalid_durations() {
            let err = TimerError::invalid_duration("Duration must be greater than zero.");

            assert_eq!(err.to_string(), "Duration must be greater than zero.");
        }
    }
}

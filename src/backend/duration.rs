use crate::error::{Result, TimerError};

const SEPARATOR: char = ':';

/// Parses plain seconds (`"90"`) or `mm:ss` (`"01:30"`) into a positive
/// second count.
pub fn parse_duration(input: &str) -> Result<u64> {
    let input = input.trim();

    let total = if input.contains(SEPARATOR) {
        let parts: Vec<&str> = input.split(SEPARATOR).collect();
        if parts.len() != 2 || !parts.iter().all(|p| is_digits(p)) {
            return Err(TimerError::invalid_duration(
                "Use mm:ss format with numeric values.",
            ));
        }

        let minutes = parse_digits(parts[0])?;
        let seconds = parse_digits(parts[1])?;
        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(too_large)?
    } else {
        if !is_digits(input) {
            return Err(TimerError::invalid_duration(
                "Duration must be an integer number of seconds.",
            ));
        }
        parse_digits(input)?
    };

    if total == 0 {
        return Err(TimerError::invalid_duration(
            "Duration must be greater than zero.",
        ));
    }

    Ok(total)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn parse_digits(s: &str) -> Result<u64> {
    s.parse::<u64>().map_err(|_| too_large())
}

fn too_large() -> TimerError {
    TimerError::invalid_duration("Duration is too large.")
}

#[cfg(test)]
mod test {
    use super::*;

    mod parse_duration {
        use super::*;

        #[test]
        fn should_read_plain_seconds() {
            assert_eq!(parse_duration("90").unwrap(), 90);
        }

        #[test]
        fn should_read_minutes_and_seconds() {
            assert_eq!(parse_duration("01:30").unwrap(), 90);
            assert_eq!(parse_duration("1:75").unwrap(), 135);
            assert_eq!(parse_duration("0:05").unwrap(), 5);
        }

        #[test]
        fn should_ignore_surrounding_whitespace() {
            assert_eq!(parse_duration("  02:00 \n").unwrap(), 120);
        }

        #[test]
        fn should_reject_zero() {
            assert!(parse_duration("0").is_err());
            assert!(parse_duration("00:00").is_err());
        }

        #[test]
        fn should_reject_non_numeric_parts() {
            let err = parse_duration("1:aa").unwrap_err();

            assert_eq!(err.to_string(), "Use mm:ss format with numeric values.");
        }

        #[test]
        fn should_reject_wrong_part_count() {
            assert!(parse_duration("1:2:3").is_err());
            assert!(parse_duration("1:").is_err());
            assert!(parse_duration(":30").is_err());
        }

        #[test]
        fn should_reject_signed_or_empty_seconds() {
            let err = parse_duration("-5").unwrap_err();
            assert_eq!(
                err.to_string(),
                "Duration must be an integer number of seconds."
            );

            assert!(parse_duration("").is_err());
            assert!(parse_duration("+5").is_err());
            assert!(parse_duration("1.5").is_err());
        }

        #[test]
        fn should_reject_overflowing_values() {
            let err = parse_duration("99999999999999999999999").unwrap_err();
            assert_eq!(err.to_string(), "Duration is too large.");

            let minutes = format!("{}:00", u64::MAX);
            assert!(parse_duration(&minutes).is_err());
        }

        #[test]
        fn should_report_invalid_duration_kind() {
            assert!(matches!(
                parse_duration("soon"),
                Err(TimerError::InvalidDuration { .. })
            ));
        }
    }
}

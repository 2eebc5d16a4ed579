//! Error types for schedule construction and configuration.
//!
//! The engine is deliberately total once a schedule exists: class lookups
//! that find nothing are no-ops and progress queries always produce a
//! value. The only fallible surface is ingestion (malformed raw input)
//! and configuration loading, covered by [`ScheduleError`].

use std::path::PathBuf;

/// Result type for schedule construction operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors raised while ingesting raw schedule data or loading config.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Slot interval with `lower >= upper`.
    #[error("invalid slot range: lower bound {lower} must be below upper bound {upper}")]
    InvalidSlotRange { lower: u8, upper: u8 },

    /// Slot interval extending past the end of the school day.
    #[error("slot range {lower}..{upper} exceeds the school day of {max} slots")]
    SlotRangeOutOfDay { lower: u8, upper: u8, max: u8 },

    /// A schedule must repeat its two-week cycle at least once.
    #[error("schedule repetitions must be at least 1")]
    ZeroRepetitions,

    /// The raw document carried no `entries` key.
    #[error("missing required 'entries' field")]
    MissingEntries,

    /// Configuration file could not be read.
    #[error("failed to read config file {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML.
    #[error("invalid config file")]
    ConfigParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::ScheduleError;

    #[test]
    fn test_invalid_slot_range_message() {
        let err = ScheduleError::InvalidSlotRange { lower: 5, upper: 3 };
        assert_eq!(
            err.to_string(),
            "invalid slot range: lower bound 5 must be below upper bound 3"
        );
    }

    #[test]
    fn test_out_of_day_message() {
        let err = ScheduleError::SlotRangeOutOfDay {
            lower: 38,
            upper: 44,
            max: 40,
        };
        assert!(err.to_string().contains("exceeds the school day"));
    }

    #[test]
    fn test_zero_repetitions_message() {
        let err = ScheduleError::ZeroRepetitions;
        assert_eq!(err.to_string(), "schedule repetitions must be at least 1");
    }
}

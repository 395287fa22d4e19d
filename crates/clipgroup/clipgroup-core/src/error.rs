//! Error types for animation group persistence

use serde::{Deserialize, Serialize};

/// Errors raised while reading or writing animation groups to the property store.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GroupError {
    /// Property key could not be parsed as a group identifier
    #[error("Invalid ID '{key}', can't deserialize")]
    InvalidIdentifier { key: String },

    /// Stored value has fewer fields than a group record needs
    #[error("Invalid number of properties in '{key}': found {field_count}, expected at least 4")]
    TruncatedData { key: String, field_count: usize },

    /// One of the time bounds is not an integer
    #[error("Failed to parse {field} of '{key}' from '{value}'")]
    FieldParseError {
        key: String,
        field: String,
        value: String,
    },

    /// Some node handles could not be parsed; the parsable ones were kept
    #[error("Failed to parse {failed} node ids of '{key}'")]
    PartialParseError { key: String, failed: usize },

    /// Name holds a character the host or the record format reserves
    #[error(
        "Invalid character(s) in animation name '{name}'. Spaces, equal signs and the separator ';' are not allowed"
    )]
    FormatError { name: String },

    /// Host time context cannot convert between frames and ticks
    #[error("Invalid ticks per frame: {ticks_per_frame}")]
    InvalidTimeContext { ticks_per_frame: i32 },
}

impl GroupError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier { .. } => "identity",
            Self::TruncatedData { .. }
            | Self::FieldParseError { .. }
            | Self::PartialParseError { .. } => "data",
            Self::FormatError { .. } => "format",
            Self::InvalidTimeContext { .. } => "config",
        }
    }

    /// True when the failing entry still holds a usable, partially decoded group.
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PartialParseError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = GroupError::InvalidIdentifier {
            key: "nope".to_string(),
        };
        assert_eq!(err.category(), "identity");

        let err = GroupError::TruncatedData {
            key: "k".to_string(),
            field_count: 3,
        };
        assert_eq!(err.category(), "data");

        let err = GroupError::FormatError {
            name: "a b".to_string(),
        };
        assert_eq!(err.category(), "format");
    }

    #[test]
    fn test_messages_name_offending_input() {
        let err = GroupError::FormatError {
            name: "My Clip".to_string(),
        };
        assert!(err.to_string().contains("'My Clip'"));

        let err = GroupError::PartialParseError {
            key: "k".to_string(),
            failed: 2,
        };
        assert_eq!(err.to_string(), "Failed to parse 2 node ids of 'k'");
        assert!(err.is_partial());
    }
}

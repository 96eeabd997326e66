use thiserror::Error;

/// Errors returned by the series store, indicator configuration and the
/// indicator dispatch table.
///
/// Numeric edge cases (a window that is not yet full, a zero denominator)
/// are never errors: they show up in-band as `None` values inside the
/// returned [`Series`](crate::Series).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A column does not have as many rows as the table it is added to.
    #[error("column `{column}` has {actual} rows, expected {expected}")]
    ShapeMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Row count of the column.
        actual: usize,
    },

    /// A referenced column is not part of the table.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A dispatch key is not one of the known indicators.
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    /// A period or other parameter is out of range for the request.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A base OHLCV column cannot be replaced by a derived one.
    #[error("column `{0}` is a base column and cannot be replaced")]
    DuplicateColumn(String),
}

impl Error {
    /// Creates an [`Error::InvalidParameter`].
    #[must_use]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_column() {
        let err = Error::ShapeMismatch {
            column: "sma_14".into(),
            expected: 10,
            actual: 9,
        };
        assert_eq!(err.to_string(), "column `sma_14` has 9 rows, expected 10");
    }

    #[test]
    fn invalid_parameter_helper() {
        let err = Error::invalid_parameter("length", "must be positive");
        assert_eq!(
            err,
            Error::InvalidParameter {
                name: "length",
                reason: "must be positive".into()
            }
        );
        assert_eq!(err.to_string(), "invalid parameter `length`: must be positive");
    }
}

use derive_more::{Display, Error, IsVariant};

/// An error returned by metric constructors and checked mutators.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required identity field is empty.
    #[display("metric {_0} must not be empty")]
    EmptyField(#[error(not(source))] Field),
    /// A counter was created with a negative initial value.
    #[display("counter `{name}` cannot start at a negative value ({value})")]
    NegativeInitialValue {
        /// The qualified name of the counter.
        name: String,
        /// The rejected initial value.
        value: i64,
    },
    /// A counter was asked to decrease.
    #[display("counter `{name}` can only increase, got delta {delta}")]
    NegativeDelta {
        /// The qualified name of the counter.
        name: String,
        /// The rejected delta.
        delta: i64,
    },
}

impl Error {
    /// Returns the broad category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyField(_) => ErrorKind::InvalidState,
            Self::NegativeInitialValue { .. } | Self::NegativeDelta { .. } => {
                ErrorKind::IllegalArgument
            }
        }
    }
}

/// A category of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum ErrorKind {
    /// The metric cannot be constructed in a usable state.
    /// Returned when an identity field is empty.
    #[display("invalid state")]
    InvalidState,
    /// An argument breaks an invariant of the metric.
    /// The metric, if any, is left untouched.
    #[display("illegal argument")]
    IllegalArgument,
}

/// An identity field of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    /// The metric's name.
    #[display("name")]
    Name,
    /// The metric's help string.
    #[display("help")]
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::EmptyField(Field::Help).to_string(),
            "metric help must not be empty"
        );
        assert_eq!(
            Error::NegativeDelta {
                name: "jvb_packets".into(),
                delta: -3,
            }
            .to_string(),
            "counter `jvb_packets` can only increase, got delta -3"
        );
    }

    #[test]
    fn kinds() {
        assert!(Error::EmptyField(Field::Name).kind().is_invalid_state());
        assert!(Error::NegativeInitialValue {
            name: "c".into(),
            value: -1,
        }
        .kind()
        .is_illegal_argument());
    }

    #[test]
    fn no_source() {
        use std::error::Error as _;

        assert!(Error::EmptyField(Field::Name).source().is_none());
    }
}

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Draft validation failure raised before a write reaches SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent from the caller payload.
    MissingField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require<T: Clone>(value: &Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.clone().ok_or(ValidationError::MissingField(field))
}

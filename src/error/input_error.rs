use thiserror::Error;

/// A raw input value that could not be normalized before binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field} '{value}': {reason}")]
pub struct InputError {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

impl InputError {
    pub fn new(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

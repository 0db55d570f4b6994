use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// A field the host requires was empty or absent.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A time value that cannot be read as a number of seconds.
    #[error("invalid time value: {value:?}")]
    InvalidTime { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

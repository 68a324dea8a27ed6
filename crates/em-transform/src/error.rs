use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("malformed timestamp '{value}': {reason}")]
    MalformedTimestamp { value: String, reason: &'static str },
}

impl TransformError {
    pub(crate) fn malformed(value: &str, reason: &'static str) -> Self {
        Self::MalformedTimestamp {
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

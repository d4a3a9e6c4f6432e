use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("proportion requested over zero cells")]
    EmptySequence,
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;

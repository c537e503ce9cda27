use thiserror::Error;

/// Errors raised when a record fails validation at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("row {row}: name is empty")]
    EmptyName { row: usize },
    #[error("row {row}: platform is empty")]
    EmptyPlatform { row: usize },
    #[error("row {row}: points value {value} is not a finite number")]
    NonFinitePoints { row: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;

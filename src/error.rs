use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowdeckError>;

#[derive(Debug, Error)]
pub enum FlowdeckError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Card index {index} out of range for column {column} (len {len})")]
    CardIndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Board has no columns")]
    NoColumns,

    #[error("Duplicate column id: {0}")]
    DuplicateColumnId(String),

    #[error("Duplicate card id: {0}")]
    DuplicateCardId(String),

    #[error("Invalid column id: {0:?}")]
    InvalidColumnId(String),

    #[error("Invalid card id: {0:?}")]
    InvalidCardId(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Identity provider error: {0}")]
    Identity(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrocError {
    /// Rejected input from the caller: blank names, unknown ids.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl GrocError {
    pub fn item_not_found(id: u32) -> Self {
        GrocError::InvalidArgument(format!("Item with ID {} not found", id))
    }
}

pub type Result<T> = std::result::Result<T, GrocError>;

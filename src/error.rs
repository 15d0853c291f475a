use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid goal type: '{0}'")]
    InvalidGoalType(String),

    #[error("Unknown meal: {0}")]
    UnknownMeal(String),

    #[error("Food not found: {0}")]
    UnknownFood(String),

    #[error("diet computation failed: {0}")]
    DietComputation(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DietError {
    /// Shorthand used by the validation helpers.
    pub fn invalid(msg: impl Into<String>) -> Self {
        DietError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DietError>;

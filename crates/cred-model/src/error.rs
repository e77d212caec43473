use thiserror::Error;

#[derive(Debug, Error)]
pub enum EligibilityError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("provider payload root must be a JSON object")]
    PayloadNotObject,
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, EligibilityError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LadderError {
    #[error("authentication failed")]
    AuthFailed,

    #[error("unknown checklist item: {0}")]
    UnknownItem(String),

    #[error("invalid level {0}: expected 0..=4")]
    InvalidLevel(u8),

    #[error("user name must not be empty")]
    MissingUser,

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LadderError>;

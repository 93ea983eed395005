use crate::model::ClientId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No client id left after {0}")]
    IdsExhausted(ClientId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::ClientNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

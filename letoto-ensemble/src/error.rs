use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("tirage invalide : {0}")]
    InvalidDrawRecord(String),

    #[error("configuration invalide : {0}")]
    InvalidConfiguration(String),
}

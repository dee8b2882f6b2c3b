use thiserror::Error;
use word_tally_shared_kernel::{
    ApplicationError, ConfigError, InfrastructureError, WordTallyError,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<EngineError> for WordTallyError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Infrastructure(e) => e.into(),
            EngineError::Config(e) => e.into(),
            EngineError::Application(e) => e.into(),
        }
    }
}

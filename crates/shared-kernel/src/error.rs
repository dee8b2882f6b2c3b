// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WordTallyError {
    /// Adds human context while preserving the wrapped error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WordTallyError>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, WordTallyError>;

/// Errors raised while validating run settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid worker count {jobs}: at least one worker is required")]
    InvalidJobs { jobs: usize },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Failures of the tally run itself rather than of an adapter around it.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Totals still referenced by {holders} unfinished task(s) after the pool drained")]
    TotalsStillShared { holders: usize },
}

/// Errors from the adapters around the tally engine: line sources, pools, output.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("could not open {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} of {origin}: {source}")]
    SourceRead {
        origin: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for WordTallyError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WordTallyError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for WordTallyError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<WordTallyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WordTallyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WordTallyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ConfigError, ConfigResult, ErrorContext, InfraResult, InfrastructureError, Result,
    WordTallyError,
};

pub mod error;

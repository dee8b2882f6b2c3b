//! # Ports
//!
//! Interface definitions for the collaborators of the tally engine.
//!
//! - [`line_source`]: one-pass supply of text lines
//! - [`worker_pool`]: execution of submitted units of work with a drain barrier
//!
//! The engine only talks to these traits; file readers and thread pools
//! live in adapter crates.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod line_source;
pub mod worker_pool;

pub use line_source::LineSource;
pub use worker_pool::{Job, WorkerPool};

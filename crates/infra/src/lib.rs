// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod line_source;

pub use line_source::{FileLineSource, ReaderLineSource, STDIN_PATH, StdinLineSource, open_source};

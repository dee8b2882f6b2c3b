//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Opening lines used across suites: 1 horatio, 2 and, 2 hamlet, 1 god, 8 words.
pub const SCENE: &str = "Hamlet and Horatio.\nGod's will, and Hamlet's fate.\n";

/// A text file inside its own temporary directory.
pub struct PlayFile {
    dir: TempDir,
    pub path: PathBuf,
}

impl PlayFile {
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write play file");
        Self { dir, path }
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

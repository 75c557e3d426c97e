//! The fixed set of directories and files every generated project receives.
//!
//! File bodies are embedded from `templates/` at compile time and written
//! byte-for-byte. The only project identifier they mention is
//! [`PROJECT_IDENTIFIER`], which is independent of the user-supplied name.

use std::path::{Path, PathBuf};

/// Project and executable name used inside the generated build files.
pub const PROJECT_IDENTIFIER: &str = "task";

/// Subdirectories created directly under the project root, in creation order.
pub const DIRECTORIES: [&str; 4] = ["cmake", "app", "src", "external"];

/// A single file to be written under the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    /// Path relative to the project root, `/`-separated.
    pub path: &'static str,
    pub content: &'static str,
}

impl AssetEntry {
    const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }

    /// Resolves the entry against `root`, one path segment at a time so the
    /// result uses the platform separator.
    pub fn target<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        self.path
            .split('/')
            .fold(root.as_ref().to_path_buf(), |acc, segment| acc.join(segment))
    }
}

/// Files written during scaffolding, in write order.
pub static ASSETS: [AssetEntry; 7] = [
    AssetEntry::new("Makefile", include_str!("../templates/Makefile")),
    AssetEntry::new("CMakeLists.txt", include_str!("../templates/CMakeLists.txt")),
    AssetEntry::new(
        "cmake/AddGitSubmodule.cmake",
        include_str!("../templates/cmake/AddGitSubmodule.cmake"),
    ),
    AssetEntry::new("app/main.cpp", include_str!("../templates/app/main.cpp")),
    AssetEntry::new(
        "app/CMakeLists.txt",
        include_str!("../templates/app/CMakeLists.txt"),
    ),
    AssetEntry::new("src/CMakeLists.txt", ""),
    AssetEntry::new(".gitignore", include_str!("../templates/gitignore")),
];

/// Looks up an asset by its relative path.
pub fn find(path: &str) -> Option<&'static AssetEntry> {
    ASSETS.iter().find(|entry| entry.path == path)
}

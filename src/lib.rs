/// Handles argument parsing and orchestration.
pub mod cli;

/// Fixed values shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// The directories and files every generated project receives.
pub mod assets;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Plans and executes the directory/file scaffolding sequence.
pub mod scaffold;

/// Project name checks.
pub mod validation;

/// Repository initialisation through an external version-control tool.
pub mod vcs;

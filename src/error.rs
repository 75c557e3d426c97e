use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::{exit_codes, messages};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// No `--name` was given, or it was empty.
    #[error("{}", messages::MISSING_NAME)]
    MissingProjectName,

    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    #[error("Cannot proceed: project directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Failed to {context}. Original error: {source}")]
    FilesystemError {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The version-control binary could not be started at all.
    #[error("Failed to run '{program}'. Original error: {source}")]
    VcsSpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The version-control binary ran but finished with an error.
    #[error("'{program} init' failed with status: {status}")]
    VcsExecutionError { program: String, status: ExitStatus },
}

/// Convenience type alias for Results with cmaker's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// The missing-name usage message goes to stdout, everything else to stderr.
/// Always exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    match err {
        Error::MissingProjectName => println!("{err}"),
        _ => eprintln!("{err}"),
    }
    std::process::exit(exit_codes::FAILURE);
}

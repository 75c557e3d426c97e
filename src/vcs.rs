use std::fmt;
use std::io::{BufReader, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::constants::{DEFAULT_VCS_PROGRAM, VCS_INIT_ARGS};
use crate::error::{Error, Result};

/// Result of running the version-control tool, kept for display.
#[derive(Debug, Clone)]
pub struct VcsOutcome {
    pub program: String,
    pub args: Vec<String>,
    pub status: ExitStatus,
    pub stdout: String,
}

impl fmt::Display for VcsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self
            .status
            .code()
            .map(|code| code.to_string())
            .unwrap_or_else(|| "terminated by signal".to_string());
        write!(f, "{} {}: exit status {}", self.program, self.args.join(" "), code)?;
        let stdout = self.stdout.trim_end();
        if !stdout.is_empty() {
            write!(f, "\n{stdout}")?;
        }
        Ok(())
    }
}

/// Something that can turn a directory into a repository.
pub trait RepositoryInitializer {
    /// Initialises a repository in `dir`.
    ///
    /// # Returns
    /// * `Ok(VcsOutcome)` - The tool ran, regardless of its exit status
    /// * `Err(Error::VcsSpawnError)` - The tool could not be started
    fn init(&self, dir: &Path) -> Result<VcsOutcome>;
}

/// Runs `<program> init` as a child process.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(DEFAULT_VCS_PROGRAM)
    }
}

impl RepositoryInitializer for GitCli {
    fn init(&self, dir: &Path) -> Result<VcsOutcome> {
        log::debug!("Running '{} {}' in '{}'", self.program, VCS_INIT_ARGS.join(" "), dir.display());

        let mut child = Command::new(&self.program)
            .args(VCS_INIT_ARGS)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::VcsSpawnError { program: self.program.clone(), source })?;

        // Read stdout before waiting for the process to complete
        let stdout = match child.stdout.take() {
            Some(stdout) => {
                let mut output = String::new();
                BufReader::new(stdout).read_to_string(&mut output)?;
                output
            }
            None => String::new(),
        };

        let status = child.wait()?;

        Ok(VcsOutcome {
            program: self.program.clone(),
            args: VCS_INIT_ARGS.iter().map(|arg| arg.to_string()).collect(),
            status,
            stdout,
        })
    }
}

/// Best-effort repository initialisation.
///
/// The outcome is printed whatever it is. Failures are logged as warnings and
/// never turned into an error for the caller.
pub fn initialize_repository(
    initializer: &dyn RepositoryInitializer,
    dir: &Path,
) -> Option<VcsOutcome> {
    match initializer.init(dir) {
        Ok(outcome) => {
            println!("{outcome}");
            if !outcome.status.success() {
                let err = Error::VcsExecutionError {
                    program: outcome.program.clone(),
                    status: outcome.status,
                };
                log::warn!("{err}");
            }
            Some(outcome)
        }
        Err(err) => {
            println!("{err}");
            log::warn!("Repository was not initialised: {err}");
            None
        }
    }
}

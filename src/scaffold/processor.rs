use std::path::{Path, PathBuf};

use crate::{
    assets::{ASSETS, DIRECTORIES},
    error::Result,
    ioutils::{create_dir, create_project_root, write_file},
    scaffold::operation::ScaffoldOperation,
};

/// Receives one progress line per completed operation.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Prints progress lines to stdout.
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Keeps progress lines in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub messages: Vec<String>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// The user-supplied project name resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    base_dir: PathBuf,
}

impl ProjectSpec {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, base_dir: P) -> Self {
        Self { name: name.into(), base_dir: base_dir.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn project_path(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }
}

/// Materialises the fixed project skeleton.
///
/// Every step is individually fatal. Nothing is rolled back, so on error the
/// caller is left with whatever was created before the failing step.
pub struct Scaffolder<'a> {
    reporter: &'a mut dyn Reporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(reporter: &'a mut dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Returns the ordered list of operations for `project`: the root, the
    /// subdirectories, then the asset files.
    pub fn plan(project: &ProjectSpec) -> Vec<ScaffoldOperation> {
        let root = project.project_path();

        let directories = DIRECTORIES
            .iter()
            .map(|dir| ScaffoldOperation::CreateDirectory { target: root.join(dir) });
        let writes = ASSETS.iter().map(|entry| ScaffoldOperation::Write {
            target: entry.target(&root),
            content: entry.content,
        });

        std::iter::once(ScaffoldOperation::CreateRoot { target: root.clone() })
            .chain(directories)
            .chain(writes)
            .collect()
    }

    /// Executes the plan for `project` and returns the project root.
    pub fn scaffold(&mut self, project: &ProjectSpec) -> Result<PathBuf> {
        log::debug!(
            "Scaffolding project '{}' in '{}'",
            project.name(),
            project.base_dir().display()
        );

        for operation in Self::plan(project) {
            if let Err(e) = self.execute(&operation) {
                log::error!("Aborting: could not {}", operation.error_context());
                return Err(e);
            }
            self.reporter.report(&operation.get_message());
        }

        Ok(project.project_path())
    }

    fn execute(&self, operation: &ScaffoldOperation) -> Result<()> {
        log::debug!("Handling operation: {operation:?}");
        match operation {
            ScaffoldOperation::CreateRoot { target } => create_project_root(target),
            ScaffoldOperation::CreateDirectory { target } => create_dir(target),
            ScaffoldOperation::Write { target, content } => {
                write_file(content, target)?;
                log::trace!("Wrote {} bytes to '{}'", content.len(), target.display());
                Ok(())
            }
        }
    }
}

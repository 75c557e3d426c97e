use crate::{
    cli::Args,
    constants::messages,
    error::{Error, Result},
    scaffold::{ProjectSpec, Scaffolder, StdoutReporter},
    validation::validate_project_name,
    vcs::{initialize_repository, GitCli, RepositoryInitializer},
};
use std::path::{Path, PathBuf};

/// Main CLI runner that orchestrates project generation
pub struct Runner {
    args: Args,
    initializer: Box<dyn RepositoryInitializer>,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self::with_initializer(args, Box::new(GitCli::default()))
    }

    pub fn with_initializer(args: Args, initializer: Box<dyn RepositoryInitializer>) -> Self {
        Self { args, initializer }
    }

    /// Executes the complete workflow and returns the project root.
    ///
    /// Leaves the process working directory inside the new project.
    pub fn run(self) -> Result<PathBuf> {
        let name = validate_project_name(self.args.name.as_deref().unwrap_or_default())?;
        let base_dir = std::env::current_dir()?;
        let project = ProjectSpec::new(name, base_dir);

        let root = Scaffolder::new(&mut StdoutReporter).scaffold(&project)?;

        Self::enter(&root)?;
        initialize_repository(self.initializer.as_ref(), &root);

        println!("{}", messages::COMPLETED);
        Ok(root)
    }

    fn enter(root: &Path) -> Result<()> {
        log::debug!("Changing working directory to '{}'", root.display());
        std::env::set_current_dir(root).map_err(|source| Error::FilesystemError {
            context: format!("change directory to '{}'", root.display()),
            source,
        })
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run().map(|_| ())
}

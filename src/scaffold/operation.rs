use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOperation {
    /// The project root; fails if the path already exists.
    CreateRoot { target: PathBuf },
    CreateDirectory { target: PathBuf },
    Write { target: PathBuf, content: &'static str },
}

impl ScaffoldOperation {
    /// Returns the path this operation creates.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            ScaffoldOperation::CreateRoot { target } => target,
            ScaffoldOperation::CreateDirectory { target } => target,
            ScaffoldOperation::Write { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    ///
    /// # Returns
    /// * `String` - A concise description including the operation type and path
    pub fn error_context(&self) -> String {
        match self {
            ScaffoldOperation::CreateRoot { target }
            | ScaffoldOperation::CreateDirectory { target } => {
                format!("create directory '{}'", target.display())
            }
            ScaffoldOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
        }
    }

    /// Gets the progress line printed once the operation has completed.
    pub fn get_message(&self) -> String {
        match self {
            ScaffoldOperation::CreateRoot { target } => {
                format!("Created project directory '{}'", target.display())
            }
            ScaffoldOperation::CreateDirectory { target } => {
                format!("Created directory '{}'", target.display())
            }
            ScaffoldOperation::Write { target, content } if content.is_empty() => {
                format!("Created empty file '{}'", target.display())
            }
            ScaffoldOperation::Write { target, .. } => {
                format!("Created file '{}'", target.display())
            }
        }
    }
}

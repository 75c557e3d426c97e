use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};

fn filesystem_error(context: String) -> impl FnOnce(std::io::Error) -> Error {
    move |source| Error::FilesystemError { context, source }
}

/// Creates the project root. Unlike [`create_dir`], an existing path is
/// reported as [`Error::OutputDirectoryExistsError`].
pub fn create_project_root<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::create_dir(dest_path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => Error::OutputDirectoryExistsError {
            output_dir: dest_path.display().to_string(),
        },
        _ => Error::FilesystemError {
            context: format!("create directory '{}'", dest_path.display()),
            source: e,
        },
    })
}

/// Creates a single directory. Parents are never created implicitly.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::create_dir(dest_path)
        .map_err(filesystem_error(format!("create directory '{}'", dest_path.display())))
}

/// Creates (or truncates) `dest_path` and writes `content` in full.
///
/// The write is not atomic: a failure part-way leaves a partial file behind.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut file = File::create(dest_path)
        .map_err(filesystem_error(format!("create '{}'", dest_path.display())))?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(filesystem_error(format!("write '{}'", dest_path.display())))
}

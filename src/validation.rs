use crate::error::{Error, Result};

/// Device names Windows refuses to use as a file or directory stem.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn invalid(name: &str, reason: &str) -> Error {
    Error::InvalidProjectName { name: name.to_string(), reason: reason.to_string() }
}

/// Checks that `name` can be used as a single path segment under the base directory.
///
/// An empty name is treated like an absent one and yields
/// [`Error::MissingProjectName`]. Nothing on disk is touched.
pub fn validate_project_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(Error::MissingProjectName);
    }
    if name.trim().is_empty() {
        return Err(invalid(name, "name consists only of whitespace"));
    }
    if name == "." || name == ".." {
        return Err(invalid(name, "name refers to an existing directory"));
    }
    if let Some(c) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(invalid(name, &format!("name contains forbidden character {c:?}")));
    }

    let stem = name.split('.').next().unwrap_or(name);
    if RESERVED_NAMES.iter().any(|reserved| reserved.eq_ignore_ascii_case(stem)) {
        return Err(invalid(name, "name is a reserved device name"));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(name: &str) -> String {
        match validate_project_name(name) {
            Err(Error::InvalidProjectName { reason, .. }) => reason,
            other => panic!("expected InvalidProjectName for {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_ordinary_names() {
        for name in ["demo", "my-project", "my_project.v2", "Console", "con1"] {
            assert_eq!(validate_project_name(name).unwrap(), name);
        }
    }

    #[test]
    fn empty_name_is_missing() {
        assert!(matches!(validate_project_name(""), Err(Error::MissingProjectName)));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(reason("  \t"), "name consists only of whitespace");
    }

    #[test]
    fn rejects_dot_segments() {
        assert_eq!(reason("."), "name refers to an existing directory");
        assert_eq!(reason(".."), "name refers to an existing directory");
    }

    #[test]
    fn rejects_separators() {
        assert!(reason("a/b").contains("'/'"));
        assert!(reason("..\\escape").contains("'\\\\'"));
        assert!(reason("nul\0byte").contains("forbidden character"));
    }

    #[test]
    fn rejects_reserved_device_names() {
        for name in ["CON", "nul", "Com1", "lpt9.txt", "aux.tar.gz"] {
            assert_eq!(reason(name), "name is a reserved device name");
        }
    }
}

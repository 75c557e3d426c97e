#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use walkdir::WalkDir;

/// Relative paths of every file under `root`, sorted. Directories get a
/// trailing `/` so empty ones show up too.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| !e.path().components().any(|c| c.as_os_str() == ".git"))
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            if e.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();
    entries.sort();
    entries
}

/// Every entry under `root` (including `.git`) with its size, for detecting
/// any write at all.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, u64)> {
    let mut entries: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            let len = e.metadata().map(|m| m.len()).unwrap_or_default();
            (e.path().to_path_buf(), len)
        })
        .collect();
    entries.sort();
    entries
}

/// The tree a successful run must produce, assembled straight from the
/// `templates/` directory in the source tree.
pub fn write_expected_tree(root: &Path) {
    let templates = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
    for dir in ["cmake", "app", "src", "external"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for (from, to) in [
        ("Makefile", "Makefile"),
        ("CMakeLists.txt", "CMakeLists.txt"),
        ("cmake/AddGitSubmodule.cmake", "cmake/AddGitSubmodule.cmake"),
        ("app/main.cpp", "app/main.cpp"),
        ("app/CMakeLists.txt", "app/CMakeLists.txt"),
        ("gitignore", ".gitignore"),
    ] {
        fs::copy(templates.join(from), root.join(to)).unwrap();
    }
    fs::write(root.join("src").join("CMakeLists.txt"), "").unwrap();
}

/// Runs the compiled binary with `cwd` as working directory.
pub fn run_cmaker(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmaker"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

pub const EXPECTED_TREE: &[&str] = &[
    ".gitignore",
    "CMakeLists.txt",
    "Makefile",
    "app/",
    "app/CMakeLists.txt",
    "app/main.cpp",
    "cmake/",
    "cmake/AddGitSubmodule.cmake",
    "external/",
    "src/",
    "src/CMakeLists.txt",
];

//! Constants used throughout cmaker

/// Version-control executable used to initialise the generated project
pub const DEFAULT_VCS_PROGRAM: &str = "git";

/// Arguments passed to the version-control executable
pub const VCS_INIT_ARGS: &[&str] = &["init"];

/// User-facing messages
pub mod messages {
    pub const MISSING_NAME: &str = "Please provide project directory name!";
    pub const COMPLETED: &str = "Done generating cmake template project!";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

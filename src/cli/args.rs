use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;

const AFTER_HELP: &str = "\
navigate to destination and run:
cmaker -n <your-project-name> (REQUIRED)

cmaker will generate the project directory and the necessary nested template files";

/// CLI arguments for cmaker.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "cmake template cli tool", long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Name of the project directory to create.
    // Optional for clap so a missing name produces our own usage message.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments, exiting on malformed input.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

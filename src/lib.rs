mod commands {
    pub mod clone;
}

pub mod cli;
mod clipboard;
pub mod config;
mod error;
pub mod git;
pub mod repo_ref;
mod shellquote;

pub use clipboard::copy_to_clipboard;
pub use commands::clone::Clone;
pub use config::Config;
pub use error::Error;
pub use repo_ref::{RepoRef, UrlError};
pub use shellquote::SplitError;

use clap::ArgMatches;
use std::path::PathBuf;

/// Resolves, clones and copies the repository named in `args`, returning its local path.
pub fn handle(args: &ArgMatches) -> Result<PathBuf, Error> {
    let config = Config::from_args(args)?;
    Clone::handle(args, &config)
}

pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

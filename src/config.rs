use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;
use git2::Config as GitConfig;

use crate::error::Error;
use crate::shellquote;

pub const DEFAULT_CLIPBOARD: &str = "pbcopy";

const ROOT_KEY: &str = "gclone.root";
const CLIPBOARD_KEY: &str = "gclone.clipboard";

#[derive(Debug, PartialEq)]
pub struct Config {
    /// Directory every destination is derived under.
    pub root: PathBuf,
    /// Clipboard program followed by its arguments, `None` when disabled.
    pub clipboard: Option<Vec<String>>,
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Result<Config, Error> {
        let git_config = GitConfig::open_default()
            .map_err(|err| log::debug!("can't open git config: {}", err))
            .ok();

        Self::resolve(args, git_config.as_ref(), std::env::var_os("HOME"))
    }

    /// Flags (and their environment fallbacks) take precedence over git config,
    /// which takes precedence over the home directory and built-in defaults.
    pub fn resolve(
        args: &ArgMatches,
        git_config: Option<&GitConfig>,
        home: Option<OsString>,
    ) -> Result<Config, Error> {
        let root = args
            .get_one::<PathBuf>("root")
            .cloned()
            .or_else(|| git_config.and_then(|config| config.get_path(ROOT_KEY).ok()))
            .or_else(|| home.map(PathBuf::from))
            .or_else(dirs::home_dir)
            .unwrap_or_default();

        let clipboard = if args.get_flag("no-clipboard") {
            None
        } else {
            let command = args
                .get_one::<String>("clipboard")
                .cloned()
                .or_else(|| git_config.and_then(|config| config.get_string(CLIPBOARD_KEY).ok()))
                .unwrap_or_else(|| DEFAULT_CLIPBOARD.to_string());

            Some(split_command(&command)?)
        };

        log::debug!("root: {}", root.display());
        log::debug!("clipboard: {:?}", clipboard);

        Ok(Config { root, clipboard })
    }
}

fn split_command(command: &str) -> Result<Vec<String>, Error> {
    let words = shellquote::split(command)
        .map_err(|err| Error::InvalidClipboardCommand(command.to_string(), err))?;

    if words.is_empty() {
        return Err(Error::InvalidClipboardCommand(
            command.to_string(),
            shellquote::SplitError::Empty,
        ));
    }

    Ok(words)
}

use std::path::PathBuf;

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("gclone")
        .version(crate_version!())
        .about("Clones a git repository into ~/<host>/<owner>/<name> and copies the path")
        .arg(
            Arg::new("url")
                .required(false)
                .value_name("GIT URL")
                .help("git@host:owner/name.git or https://host/owner/name.git"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .env("GCLONE_ROOT")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to clone under instead of $HOME"),
        )
        .arg(
            Arg::new("clipboard")
                .long("clipboard")
                .value_name("COMMAND")
                .env("GCLONE_CLIPBOARD")
                .help("Command the destination path is piped into"),
        )
        .arg(
            Arg::new("no-clipboard")
                .long("no-clipboard")
                .action(ArgAction::SetTrue)
                .help("Don't copy the destination path"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more, can be repeated"),
        )
}

/// `cli()` without `GCLONE_ROOT`/`GCLONE_CLIPBOARD` fallbacks.
#[cfg(test)]
pub(crate) fn cli_without_env() -> Command {
    cli()
        .mut_arg("root", |arg| arg.env(None::<&'static str>))
        .mut_arg("clipboard", |arg| arg.env(None::<&'static str>))
}

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::Error;

/// Pipes `text` into `command`, which is a program followed by its arguments.
pub fn copy_to_clipboard(text: &str, command: &[String]) -> Result<(), Error> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::FailedToExecuteClipboard(ErrorKind::NotFound.into()))?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    log::debug!("running {:?}", cmd);

    let mut child = cmd.spawn().map_err(Error::FailedToExecuteClipboard)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(Error::FailedToExecuteClipboard)?;
    }

    let status = child.wait().map_err(Error::FailedToExecuteClipboard)?;
    if !status.success() {
        return Err(Error::ClipboardFailed(status));
    }

    eprintln!("Path copied to clipboard.");

    Ok(())
}

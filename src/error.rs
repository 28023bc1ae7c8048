use crate::repo_ref::UrlError;
use crate::shellquote::SplitError;

use std::error::Error as StdError;
use std::io::Error as IoError;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum Error {
    MissingUrl,
    InvalidUrl(UrlError),

    InvalidDestination(PathBuf),

    FailedToExecuteGit(IoError),
    CloneFailed(ExitStatus),

    InvalidClipboardCommand(String, SplitError),
    FailedToExecuteClipboard(IoError),
    ClipboardFailed(ExitStatus),
}

impl Error {
    /// Exit code the process terminates with when the run fails with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidDestination(_) => 1,
            _ => 2,
        }
    }
}

impl From<UrlError> for Error {
    fn from(err: UrlError) -> Error {
        Error::InvalidUrl(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use Error::*;

        match self {
            InvalidUrl(err) => Some(err),
            FailedToExecuteGit(err) => Some(err),
            InvalidClipboardCommand(_, err) => Some(err),
            FailedToExecuteClipboard(err) => Some(err),
            _ => None,
        }
    }
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            MissingUrl => write!(f, "missing url to clone"),
            InvalidUrl(err) => write!(f, "{}", err),

            InvalidDestination(path) => {
                write!(f, "the repo path is not valid: {}", path.display())
            }

            FailedToExecuteGit(err) => write!(f, "failed to execute git: {}", err),
            CloneFailed(status) => write!(f, "failed clone: git {}", status),

            InvalidClipboardCommand(command, err) => {
                write!(f, "invalid clipboard command `{command}`: {err}")
            }
            FailedToExecuteClipboard(err) => write!(f, "clipboard error: {}", err),
            ClipboardFailed(status) => write!(f, "clipboard error: {}", status),
        }
    }
}

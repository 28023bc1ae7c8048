mod git_cli {
    pub mod clone;
}

pub use git_cli::clone::clone_repo;

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use git2::{Error as GitError, Repository};

use crate::error::Error;
use crate::repo_ref::RepoRef;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Cloned,
    Reused,
}

pub fn get_repo(path: &Path) -> Result<Repository, GitError> {
    Repository::open(path)
}

pub fn exec_git_cmd<A, I>(args: I) -> Result<(), Error>
where
    A: AsRef<OsStr>,
    I: IntoIterator<Item = A>,
{
    let mut git = Command::new("git");
    let git = git.args(args);

    log::debug!("running {:?}", git);

    let status = git.status().map_err(Error::FailedToExecuteGit)?;
    if !status.success() {
        return Err(Error::CloneFailed(status));
    }

    Ok(())
}

/// Makes sure `repo_ref` is available at `path`, cloning it when nothing is there yet.
pub fn materialize(repo_ref: &RepoRef, path: &Path) -> Result<Outcome, Error> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            eprintln!("The repo already exists: {}", path.display());

            if let Err(err) = get_repo(path) {
                log::warn!("{} is not a git repository: {}", path.display(), err.message());
            }

            Ok(Outcome::Reused)
        }
        Ok(_) => Err(Error::InvalidDestination(path.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("cloning {} into {}", repo_ref, path.display());

            clone_repo(&repo_ref.url, path)?;
            Ok(Outcome::Cloned)
        }
        Err(err) => {
            log::debug!("can't stat {}: {}", path.display(), err);
            Err(Error::InvalidDestination(path.to_path_buf()))
        }
    }
}

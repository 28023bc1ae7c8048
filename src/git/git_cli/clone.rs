use std::ffi::OsStr;
use std::path::Path;

use crate::error::Error;
use crate::git::{exec_git_cmd, get_repo};

pub fn clone_repo(url: &str, path: &Path) -> Result<(), Error> {
    let args = [OsStr::new("clone"), OsStr::new(url), path.as_os_str()];
    exec_git_cmd(args)?;

    // git may produce repositories libgit2 can't read, e.g. sha256 object format
    if let Err(err) = get_repo(path) {
        log::warn!("can't open cloned {}: {}", path.display(), err.message());
    }

    Ok(())
}

#[cfg(all(test, unix, feature = "integration-tests"))]
mod tests {
    use super::*;

    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(args: &[&str], dir: &Path) {
        let status = Command::new("git").args(args).current_dir(dir).status().unwrap();
        assert!(status.success(), "git {args:?} failed");
    }

    #[test]
    fn clone_unreadable_by_libgit2_succeeds() {
        let dir = TempDir::new().unwrap();
        let remote = dir.path().join("remote.git");
        fs::create_dir_all(&remote).unwrap();
        git(&["init", "--bare", "--quiet", "--object-format=sha256"], &remote);

        let path = dir.path().join("github.com").join("acme").join("widget");
        let url = format!("file://{}", remote.display());

        clone_repo(&url, &path).unwrap();

        assert!(path.join(".git").is_dir());
    }

    #[test]
    fn clone_of_missing_remote_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widget");
        let url = format!("file://{}/missing.git", dir.path().display());

        let err = clone_repo(&url, &path).unwrap_err();

        assert!(matches!(err, Error::CloneFailed(_)));
        assert_eq!(err.exit_code(), 2);
    }
}

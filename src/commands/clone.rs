use std::path::PathBuf;

use clap::ArgMatches;

use crate::clipboard::copy_to_clipboard;
use crate::config::Config;
use crate::error::Error;
use crate::git::{materialize, Outcome};
use crate::repo_ref::RepoRef;

pub struct Clone;

impl Clone {
    pub fn handle(args: &ArgMatches, config: &Config) -> Result<PathBuf, Error> {
        let url = args.get_one::<String>("url").ok_or(Error::MissingUrl)?;

        let repo_ref = RepoRef::parse(url)?;
        log::debug!("resolved {} as {:?}", url, repo_ref);

        let path = repo_ref.path(&config.root);

        match materialize(&repo_ref, &path)? {
            Outcome::Cloned => log::info!("cloned {}", repo_ref),
            Outcome::Reused => log::info!("reusing {}", path.display()),
        }

        match &config.clipboard {
            Some(command) => copy_to_clipboard(&path.to_string_lossy(), command)?,
            None => log::debug!("clipboard is disabled"),
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::cli_without_env;

    use std::fs;
    use tempfile::TempDir;

    fn handle(args: &[&str], config: &Config) -> Result<PathBuf, Error> {
        let mut argv = vec!["gclone"];
        argv.extend_from_slice(args);
        let matches = cli_without_env().try_get_matches_from(argv).unwrap();

        Clone::handle(&matches, config)
    }

    fn config(root: &TempDir) -> Config {
        Config {
            root: root.path().to_path_buf(),
            clipboard: None,
        }
    }

    #[test]
    fn missing_url() {
        let root = TempDir::new().unwrap();

        assert!(matches!(
            handle(&[], &config(&root)),
            Err(Error::MissingUrl)
        ));
    }

    #[test]
    fn invalid_url() {
        let root = TempDir::new().unwrap();

        assert!(matches!(
            handle(&["acme/widget"], &config(&root)),
            Err(Error::InvalidUrl(_))
        ));
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn existing_directory() {
        let root = TempDir::new().unwrap();
        let expected = root.path().join("github.com").join("acme").join("widget");
        fs::create_dir_all(&expected).unwrap();

        let path = handle(&["https://github.com/acme/widget.git"], &config(&root)).unwrap();

        assert_eq!(path, expected);
    }

    #[cfg(unix)]
    #[test]
    fn existing_directory_is_copied() {
        let root = TempDir::new().unwrap();
        let expected = root.path().join("github.com").join("acme").join("widget");
        fs::create_dir_all(&expected).unwrap();

        let clip = root.path().join("clip");
        let config = Config {
            clipboard: Some(vec![
                "sh".to_string(),
                "-c".to_string(),
                format!("cat > '{}'", clip.display()),
            ]),
            ..config(&root)
        };

        let path = handle(&["git@github.com:acme/widget.git"], &config).unwrap();

        assert_eq!(path, expected);
        assert_eq!(
            fs::read_to_string(clip).unwrap(),
            expected.to_string_lossy()
        );
    }
}

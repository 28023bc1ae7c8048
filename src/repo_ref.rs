use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use url::{Host, Url};

#[derive(Clone, Debug, PartialEq)]
pub struct RepoRef {
    pub url: String,
    pub raw: String,
    pub resource: String,
    pub owner: String,
    pub name: String,
}

#[derive(Debug, PartialEq)]
pub enum UrlError {
    MissingGitSuffix,
    InvalidSsh,
    Parse(url::ParseError),
    Malformed,
}

impl StdError for UrlError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            UrlError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::MissingGitSuffix => write!(f, "not a valid git url"),
            UrlError::InvalidSsh => write!(f, "not a valid ssh git url"),
            UrlError::Parse(err) => write!(f, "failed to parse git url: {err}"),
            UrlError::Malformed => write!(f, "malformed reference"),
        }
    }
}

impl RepoRef {
    pub fn parse(url: &str) -> Result<RepoRef, UrlError> {
        let raw = url.strip_suffix(".git").ok_or(UrlError::MissingGitSuffix)?;

        let (resource, owner, name) = match raw.strip_prefix("git@") {
            // git@github.com:acme/widget
            Some(scp) => Self::from_scp(scp)?,
            // https://github.com/acme/widget
            None => Self::from_url(raw)?,
        };

        if resource.is_empty() || owner.is_empty() || name.is_empty() {
            return Err(UrlError::Malformed);
        }

        Ok(RepoRef {
            url: url.to_string(),
            raw: raw.to_string(),
            resource,
            owner,
            name,
        })
    }

    fn from_scp(scp: &str) -> Result<(String, String, String), UrlError> {
        let parts = scp.split(':').collect::<Vec<_>>();
        let [server, path] = parts[..] else {
            return Err(UrlError::InvalidSsh);
        };

        let (owner, name) = path.split_once('/').ok_or(UrlError::InvalidSsh)?;

        Ok((server.to_string(), owner.to_string(), name.to_string()))
    }

    fn from_url(raw: &str) -> Result<(String, String, String), UrlError> {
        let url = Url::parse(raw).map_err(UrlError::Parse)?;

        let resource = match url.host() {
            Some(Host::Domain(domain)) => percent_decode(domain),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => String::new(),
        };

        let path = percent_decode(url.path());
        let mut segments = path.split('/').peekable();
        if segments.peek() == Some(&"") {
            segments.next();
        }

        let owner = segments.next().ok_or(UrlError::Malformed)?;
        let name = segments.next().ok_or(UrlError::Malformed)?;

        Ok((resource, owner.to_string(), name.to_string()))
    }

    pub fn path(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.push(&self.resource);
        path.push(&self.owner);
        path.push(&self.name);
        path
    }
}

fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.resource, self.owner, self.name)
    }
}

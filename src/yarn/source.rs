//! Classification of a package's `resolved` location
//!
//! Detects special dependency types:
//! - Git dependencies: URLs starting with `git+`, `git://`, `git@`, or a `.git` URL with `#commit`
//! - Local path dependencies: `link:`, `file:` URLs
//!
//! Everything else with a value is treated as a registry tarball.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Registry { url: String },
    Git { url: String, commit: String },
    Local { path: String },
    /// No `resolved` line was present
    Unknown,
}

impl Source {
    pub fn from_resolved(resolved: &str) -> Self {
        if resolved.is_empty() {
            return Source::Unknown;
        }

        if resolved.starts_with("link:") || resolved.starts_with("file:") {
            return Source::Local {
                path: resolved.to_string(),
            };
        }

        if let Some(git) = parse_git_url(resolved) {
            return git;
        }

        Source::Registry {
            url: resolved.to_string(),
        }
    }

    /// Short label used in text output
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Registry { .. } => "registry",
            Source::Git { .. } => "git",
            Source::Local { .. } => "local",
            Source::Unknown => "unknown",
        }
    }
}

/// Parse a git URL into `Source::Git`
///
/// Handles various git URL formats:
/// - `git+https://github.com/org/repo.git#commit`
/// - `git+ssh://git@github.com/org/repo.git#commit`
/// - `git://github.com/org/repo#commit`
/// - `git@github.com:org/repo.git#commit`
/// - `https://github.com/org/repo.git#commit` (path ends in `.git` and has a #commit)
fn parse_git_url(url: &str) -> Option<Source> {
    let (url_part, fragment) = match url.rsplit_once('#') {
        Some((url, fragment)) => (url, Some(fragment)),
        None => (url, None),
    };

    let is_git_url = url_part.starts_with("git+")
        || url_part.starts_with("git://")
        || url_part.starts_with("git@")
        || (url_part.ends_with(".git") && fragment.is_some());

    if !is_git_url {
        return None;
    }

    // Git URL without a fragment pins nothing; report HEAD
    let commit = fragment.unwrap_or("HEAD").to_string();

    let clean_url = url_part.strip_prefix("git+").unwrap_or(url_part);

    let clean_url = if let Some(rest) = clean_url.strip_prefix("ssh://git@") {
        // ssh://git@github.com/org/repo.git -> https://github.com/org/repo.git
        format!("https://{}", rest)
    } else if let Some(rest) = clean_url.strip_prefix("git@") {
        // git@github.com:org/repo.git -> https://github.com/org/repo.git
        format!("https://{}", rest.replacen(':', "/", 1))
    } else if let Some(rest) = clean_url.strip_prefix("git://") {
        format!("https://{}", rest)
    } else {
        clean_url.to_string()
    };

    Some(Source::Git {
        url: clean_url,
        commit,
    })
}

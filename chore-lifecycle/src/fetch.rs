//! Source content fetching.
//!
//! A `source` string is resolved in order: an existing directory (content is
//! its `main.chore` entry point, the whole tree is the payload), an `http(s)`
//! URL (blocking single-attempt GET, no retry, no timeout), or a local file.

use std::path::{Path, PathBuf};

use chore_core::store::TREE_ENTRY_POINT;

use crate::error::{io_err, LifecycleError};

/// How the fetched content should be committed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A single file holding exactly the fetched content.
    File,
    /// A directory convention: the whole tree is copied in.
    Tree { dir: PathBuf },
}

/// A fetched source: the bytes to confirm and inspect, the payload shape to
/// commit, and the path to attribute diagnostics to.
#[derive(Debug)]
pub struct Fetched {
    pub content: String,
    pub payload: Payload,
    pub display_path: PathBuf,
}

/// Whether `source` names a remote URL rather than a local path.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch `source`. Local misses are [`LifecycleError::SourceNotFound`];
/// remote failures of any kind are [`LifecycleError::RemoteFetchFailed`].
pub fn fetch(source: &str) -> Result<Fetched, LifecycleError> {
    if is_remote(source) {
        return fetch_remote(source);
    }

    let path = Path::new(source);
    if path.is_dir() {
        let entry = path.join(TREE_ENTRY_POINT);
        let content = read_local(&entry, source)?;
        return Ok(Fetched {
            content,
            payload: Payload::Tree {
                dir: path.to_path_buf(),
            },
            display_path: entry,
        });
    }

    let content = read_local(path, source)?;
    Ok(Fetched {
        content,
        payload: Payload::File,
        display_path: path.to_path_buf(),
    })
}

fn read_local(path: &Path, source: &str) -> Result<String, LifecycleError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LifecycleError::SourceNotFound {
                source_name: source.to_string(),
            }
        } else {
            io_err(path, e)
        }
    })
}

fn fetch_remote(url: &str) -> Result<Fetched, LifecycleError> {
    let remote_err = |message: String| LifecycleError::RemoteFetchFailed {
        url: url.to_string(),
        message,
    };

    let response = ureq::get(url).call().map_err(|e| remote_err(e.to_string()))?;
    let content = response
        .into_string()
        .map_err(|e| remote_err(e.to_string()))?;

    Ok(Fetched {
        content,
        payload: Payload::File,
        display_path: PathBuf::from(url),
    })
}

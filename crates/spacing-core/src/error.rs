use std::path::PathBuf;

use crate::element::ElementId;

/// A failed read from the host page.
///
/// These never escape the state machine: callers degrade to an empty
/// value and log.
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    /// The element is no longer attached to the page.
    #[error("element {0} is detached")]
    Detached(ElementId),

    /// The host threw while reading element metadata.
    #[error("reading {what} of element {id} failed: {reason}")]
    Read {
        id: ElementId,
        what: &'static str,
        reason: String,
    },
}

/// Why a session could not be started.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StartError {
    /// The page has no renderable root to attach overlays to yet.
    #[error("unable to initialise, the page has no renderable root")]
    NoRoot,
}

/// Errors while loading configuration from disk.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns true if the error only means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl HostError {
    /// Build a [`HostError::Read`] value.
    pub fn read(id: ElementId, what: &'static str, reason: impl Into<String>) -> Self {
        Self::Read {
            id,
            what,
            reason: reason.into(),
        }
    }
}

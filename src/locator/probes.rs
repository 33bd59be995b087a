//! Collaborator traits the resolver queries during a search
//!
//! Each query source is an injected capability rather than ambient
//! filesystem or process state, so the resolver stays pure and deterministic
//! under test. A failing probe marks one candidate unusable; it never aborts
//! the overall search.

#[cfg(test)]
use mockall::automock;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::revision::Revision;

/// A package installed in the managed repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPackage {
    pub revision: Revision,
    pub install_dir: PathBuf,
}

/// Why a probed location could not report a revision.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not execute tool: {0}")]
    Io(#[from] std::io::Error),

    #[error("tool version output could not be parsed")]
    UnreadableVersion,
}

/// Enumerates installed repository packages.
#[cfg_attr(test, automock)]
pub trait RepositoryLister {
    /// Called at most once per resolution; enumeration order is preserved in
    /// rejection diagnostics.
    fn list_packages(&self) -> Vec<RepositoryPackage>;
}

/// Retrieves the tool revision installed at a directory.
#[cfg_attr(test, automock)]
pub trait RevisionProbe {
    /// `Ok(None)` means no tool lives there; `Err` means a tool was present
    /// but could not be executed or its output read.
    fn revision_at(&self, dir: &Path) -> Result<Option<Revision>, ProbeError>;
}

/// Enumerates search-path directories, in scan order.
#[cfg_attr(test, automock)]
pub trait SearchPathLister {
    /// Called at most once per resolution, only when the repository phase
    /// found nothing.
    fn search_paths(&self) -> Vec<PathBuf>;
}

/// Callback that may fetch a missing revision.
#[cfg_attr(test, automock)]
pub trait ProvisioningHook {
    /// Invoked at most once per resolution, only on terminal failure, and
    /// only when the caller enabled provisioning. Retry is the hook's own
    /// concern.
    fn provision(&self, revision: &Revision);
}

//! Repository lister backed by a directory layout
//!
//! Installed packages live under `<root>/<tool>/<revision>/`, one directory
//! per revision, e.g. `/opt/sdk/cmake/3.6.4111459`. The directory name is
//! the package revision; entries that do not parse are ignored.

use std::fs;
use std::path::PathBuf;

use crate::locator::probes::{RepositoryLister, RepositoryPackage};
use crate::revision::Revision;

pub struct DirectoryRepository {
    root: PathBuf,
    tool: String,
}

impl DirectoryRepository {
    pub fn new(root: impl Into<PathBuf>, tool: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            tool: tool.into(),
        }
    }
}

impl RepositoryLister for DirectoryRepository {
    fn list_packages(&self) -> Vec<RepositoryPackage> {
        let dir = self.root.join(&self.tool);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(fault) => {
                tracing::debug!("repository directory '{}' not listed: {fault}", dir.display());
                return Vec::new();
            }
        };

        let mut packages: Vec<RepositoryPackage> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let name = entry.file_name();
                match name.to_string_lossy().parse::<Revision>() {
                    Ok(revision) => Some(RepositoryPackage {
                        revision,
                        install_dir: entry.path(),
                    }),
                    Err(_) => {
                        tracing::warn!(
                            "ignoring repository entry '{}': not a revision",
                            entry.path().display()
                        );
                        None
                    }
                }
            })
            .collect();
        // read_dir order is platform-defined; keep enumeration stable
        packages.sort_by(|a, b| a.revision.cmp(&b.revision));
        packages
    }
}

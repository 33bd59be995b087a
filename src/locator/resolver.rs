//! The precedence engine that decides which tool installation to use
//!
//! Candidates are considered in a fixed order: an explicit override
//! location, the managed package repository, then the process search path.
//! Sources are queried lazily and each at most once. Every rejected
//! candidate is remembered in discovery order so a terminal failure can
//! explain the whole search in one message.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::locator::aliases;
use crate::locator::diagnostics::Diagnostics;
use crate::locator::probes::{
    ProvisioningHook, RepositoryLister, RevisionProbe, SearchPathLister,
};
use crate::revision::Revision;

/// Revision candidates are matched against when the caller requests no
/// version, or when the request was downgraded.
pub const DEFAULT_TOOL_REVISION: Revision = Revision::of(3, 6, 4111459);

/// Oldest revision an explicit request may name. The default revision
/// predates the floor; the floor binds explicit requests only.
pub const MINIMUM_SUPPORTED_REVISION: Revision = Revision::of(3, 7, 0);

const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// A caller-supplied version request, as read from configuration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequest {
    Absent,
    Malformed(String),
    Parsed(Revision),
}

impl VersionRequest {
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            None => VersionRequest::Absent,
            Some(raw) => match raw.parse::<Revision>() {
                Ok(revision) => VersionRequest::Parsed(revision),
                Err(_) => VersionRequest::Malformed(raw.to_string()),
            },
        }
    }
}

/// Terminal failure: no candidate satisfied the effective revision. The
/// message is one headline plus one `- ` bullet per rejected candidate, in
/// discovery order, joined with the platform line separator.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolutionFailure {
    pub message: String,
}

/// Everything one resolution call produced.
#[derive(Debug)]
pub struct Resolution {
    /// The install directory on success. Never a `bin`-style subdirectory:
    /// search-path candidates resolve to the probed entry's parent.
    pub outcome: Result<PathBuf, ResolutionFailure>,
    pub diagnostics: Diagnostics,
}

/// Single-shot, synchronous resolver over injected candidate sources.
///
/// A resolver holds no state between calls; two calls with identically
/// behaving collaborators produce identical resolutions.
pub struct Resolver<'a> {
    repository: &'a dyn RepositoryLister,
    probe: &'a dyn RevisionProbe,
    search_paths: &'a dyn SearchPathLister,
    hook: Option<&'a dyn ProvisioningHook>,
    provision_on_failure: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(
        repository: &'a dyn RepositoryLister,
        probe: &'a dyn RevisionProbe,
        search_paths: &'a dyn SearchPathLister,
    ) -> Self {
        Self {
            repository,
            probe,
            search_paths,
            hook: None,
            provision_on_failure: false,
        }
    }

    pub fn with_provisioning(mut self, hook: &'a dyn ProvisioningHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Policy switch: when enabled, the provisioning hook is invoked with
    /// the effective revision before a failure is finalized.
    pub fn provision_on_failure(mut self, enabled: bool) -> Self {
        self.provision_on_failure = enabled;
        self
    }

    /// Runs the search and returns the outcome plus everything diagnosed
    /// along the way.
    pub fn resolve(&self, version_text: Option<&str>, override_dir: Option<&Path>) -> Resolution {
        let mut diagnostics = Diagnostics::default();
        let request = VersionRequest::from_text(version_text);
        let (effective, explicit) = effective_revision(&request, &mut diagnostics);
        tracing::debug!("resolving tool revision {effective} (explicit request: {explicit})");

        let mut rejections: Vec<String> = Vec::new();
        let mut override_mismatch: Option<String> = None;

        // Override phase. Without an explicit request any probed revision is
        // accepted; with one, a mismatch dooms the resolution but the later
        // phases still run to collect their rejections for the message.
        if let Some(dir) = override_dir {
            match self.probe.revision_at(&dir.join("bin")) {
                Ok(Some(found)) => {
                    if !explicit || found == effective {
                        return Resolution {
                            outcome: Ok(dir.to_path_buf()),
                            diagnostics,
                        };
                    }
                    override_mismatch = Some(format!(
                        "Tool '{found}' found via override='{}' does not match requested version '{effective}'.",
                        dir.display()
                    ));
                }
                Ok(None) => {
                    diagnostics.error(format!(
                        "Could not get version from override path '{}'.",
                        dir.display()
                    ));
                }
                Err(fault) => {
                    tracing::debug!("override probe failed: {fault}");
                    diagnostics.error(format!(
                        "Could not get version from override path '{}'.",
                        dir.display()
                    ));
                }
            }
        }

        // Repository phase. Packages are reported in the order the lister
        // returned them.
        for package in self.repository.list_packages() {
            if package.revision == effective {
                if override_mismatch.is_none() {
                    return Resolution {
                        outcome: Ok(package.install_dir),
                        diagnostics,
                    };
                }
                continue;
            }
            let rejection = format!(
                "'{}' found in repository was not the requested version '{effective}'.",
                package.revision
            );
            diagnostics.info(rejection.clone());
            rejections.push(rejection);
        }

        // Search-path phase.
        for entry in self.search_paths.search_paths() {
            match self.probe.revision_at(&entry) {
                Ok(Some(found)) => {
                    if explicit {
                        if found == effective && override_mismatch.is_none() {
                            return Resolution {
                                outcome: Ok(install_dir_of(&entry)),
                                diagnostics,
                            };
                        }
                        // A later entry may still match the request.
                    } else {
                        // No explicit request exists, so no path entry can
                        // ever satisfy the implicit default; the first
                        // probed candidate is the only one reported.
                        let rejection = format!(
                            "Tool found in PATH at '{}' had version '{found}'.",
                            install_dir_of(&entry).display()
                        );
                        diagnostics.info(rejection.clone());
                        rejections.push(rejection);
                        break;
                    }
                }
                Ok(None) => {}
                Err(fault) => {
                    tracing::debug!("search path probe failed: {fault}");
                    diagnostics.warn(format!(
                        "Could not execute tool at '{}' to get version. Skipping.",
                        entry.display()
                    ));
                }
            }
        }

        // Failure phase.
        if self.provision_on_failure {
            if let Some(hook) = self.hook {
                hook.provision(&effective);
            }
        }
        let headline = override_mismatch.unwrap_or_else(|| {
            if explicit {
                format!("Tool '{effective}' was not found in PATH or by override property.")
            } else {
                format!(
                    "Tool '{effective}' is required but has not yet been downloaded from the repository."
                )
            }
        });
        let mut message = headline;
        for rejection in &rejections {
            message.push_str(LINE_SEPARATOR);
            message.push_str("- ");
            message.push_str(rejection);
        }
        Resolution {
            outcome: Err(ResolutionFailure { message }),
            diagnostics,
        }
    }
}

/// Reduces a request to the revision every candidate is matched against.
/// Returns the revision and whether it came from an explicit, valid request
/// rather than the default fallback.
fn effective_revision(request: &VersionRequest, diagnostics: &mut Diagnostics) -> (Revision, bool) {
    match request {
        VersionRequest::Absent => (DEFAULT_TOOL_REVISION, false),
        VersionRequest::Malformed(raw) => {
            diagnostics.error(format!("Tool version '{raw}' is not formatted correctly."));
            (DEFAULT_TOOL_REVISION, false)
        }
        VersionRequest::Parsed(revision) => {
            if let Some(canonical) = aliases::canonical_revision(revision) {
                return (canonical, true);
            }
            if *revision < MINIMUM_SUPPORTED_REVISION {
                diagnostics.error(format!(
                    "Tool version '{revision}' is too low. Use {MINIMUM_SUPPORTED_REVISION} or higher."
                ));
                (DEFAULT_TOOL_REVISION, false)
            } else {
                (revision.clone(), true)
            }
        }
    }
}

/// Probe targets are conventionally a `bin`-style subdirectory; the install
/// directory reported to the caller is its parent.
fn install_dir_of(entry: &Path) -> PathBuf {
    entry
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| entry.to_path_buf())
}

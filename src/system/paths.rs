//! Search-path lister backed by the PATH environment variable

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::locator::probes::SearchPathLister;

/// Splits a captured PATH value into directories, preserving order. The
/// value is read once at construction so a resolution is unaffected by
/// concurrent environment changes.
pub struct EnvSearchPaths {
    raw: Option<OsString>,
}

impl EnvSearchPaths {
    pub fn from_env() -> Self {
        Self {
            raw: env::var_os("PATH"),
        }
    }

    pub fn from_value(raw: impl Into<OsString>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl SearchPathLister for EnvSearchPaths {
    fn search_paths(&self) -> Vec<PathBuf> {
        match &self.raw {
            Some(raw) => env::split_paths(raw).collect(),
            None => Vec::new(),
        }
    }
}

//! Ordered diagnostic accumulation for a single resolution call
//!
//! Errors, warnings, and info lines are appended in discovery order and are
//! never reordered or deduplicated. On failure the resolver renders them
//! into one aggregated message; on success the caller may inspect or ignore
//! them. Each entry is also mirrored to `tracing` at a matching level.

/// Append-only sink owned by exactly one resolution call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
    info: Vec<String>,
}

impl Diagnostics {
    /// Records a user-input problem (malformed or too-low version request,
    /// unusable override). Errors do not abort the search.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.errors.push(message);
    }

    /// Records a skipped candidate that does not indicate a misconfigured
    /// request, such as an unexecutable search-path entry.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.warnings.push(message);
    }

    /// Records a rejected candidate.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{message}");
        self.info.push(message);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn infos(&self) -> &[String] {
        &self.info
    }
}

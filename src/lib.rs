//! Locates and validates an installation of an external build tool.
//!
//! The core is a resolution engine: it turns a possibly-absent,
//! possibly-malformed version request plus three injected candidate sources
//! (an explicit override directory, a managed package repository, and the
//! process search path) into either a concrete install directory or an
//! aggregated failure that explains every rejected candidate.
//!
//! The [`locator`] module is pure and deterministic; real collaborators that
//! query the filesystem, run the tool binary, and read the `PATH`
//! environment variable live in [`system`].

pub mod config;
pub mod locator;
pub mod revision;
pub mod system;

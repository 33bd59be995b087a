//! Real collaborators backed by the filesystem and process environment
//!
//! These implement the probe traits from [`crate::locator::probes`] for
//! actual use: a directory-layout repository, a subprocess version probe,
//! and a `PATH`-environment search-path lister. The resolver itself never
//! touches ambient state; everything environmental lives here.

pub mod paths;
pub mod probe;
pub mod repository;

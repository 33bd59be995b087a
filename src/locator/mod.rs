//! Tool installation lookup
//!
//! This module decides which installation of an external build tool to use,
//! given a possibly-absent version request and three independently queryable
//! candidate sources.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Resolver   │────▶│    Probes    │     │ Diagnostics  │
//! │ (precedence) │     │ (candidates) │     │   (sink)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         ▲
//!        ▼                                         │
//! ┌──────────────┐                          ordered errors,
//! │   Aliases    │                          warnings, info
//! │ (static map) │
//! └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: the precedence state machine and its outcome types
//! - [`probes`]: collaborator traits for the three candidate sources and the
//!   provisioning hook
//! - [`diagnostics`]: ordered accumulation of what the search diagnosed
//! - [`aliases`]: static table of legacy reported-version aliases

pub mod aliases;
pub mod diagnostics;
pub mod probes;
pub mod resolver;

//! # Docmill Domain
//!
//! Resource schema types for the Docmill web service.
//!
//! This crate contains:
//! - Typed resources exchanged with the service (service status, scripts,
//!   jobs, results)
//! - The server-side error document
//!
//! ## Architecture
//! - No dependencies on other Docmill crates
//! - Pure data structures with their wire field mappings; all I/O lives in
//!   `docmill-client`
//!
//! Field renames follow the conventions of quick-xml's serde support:
//! `@name` marks an attribute, `$text` marks element character data.

pub mod types;

// Re-export commonly used items
pub use types::*;

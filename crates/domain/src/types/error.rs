//! Server-side error document
//!
//! The service reports failures as an `error` document, either as the body
//! of a non-success response or embedded in an otherwise successful one.

use serde::{Deserialize, Serialize};

/// Error document returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "error", default)]
pub struct ServiceError {
    /// Query that triggered the error
    #[serde(rename = "@query", skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(rename = "description", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "trace", skip_serializing_if = "String::is_empty")]
    pub trace: String,
}

impl ServiceError {
    /// True when the service reported nothing, i.e. the slot was never
    /// populated by a decoded error document.
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
    }
}

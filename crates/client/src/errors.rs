//! Error taxonomy and HTTP status classification
//!
//! Unexpected statuses are classified into domain errors by a handler
//! closure built here. Every operation gets the default status semantics;
//! individual calls layer verbatim message overrides on top.

use std::collections::HashMap;

use reqwest::StatusCode;
use thiserror::Error;

use crate::request::RequestEnvelope;
use crate::transport::TransportError;

/// Errors surfaced to callers of the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The requested resource does not exist (404)
    #[error("resource not found: {url}")]
    NotFound {
        /// URL of the missing resource
        url: String,
    },

    /// The service rejected the credentials (401)
    #[error("you don't have enough permissions, check your configuration")]
    PermissionDenied,

    /// The service failed (500), with its own description when it gave one
    #[error("server error: {0}")]
    Server(String),

    /// Any other status outside the operation's declared success code
    #[error("framework server error (code: {0})")]
    Framework(u16),

    /// Per-call override message, used verbatim
    #[error("{0}")]
    Rejected(String),

    /// Error description embedded in a success-status response body
    #[error("error from the web service: {0}")]
    Service(String),

    /// Underlying transport failure, propagated unchanged
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Client-side configuration problem
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors produced by the codec layer.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A codec was handed a value that does not expose the capability it
    /// needs; always a caller bug
    #[error("capability mismatch: {codec} requires a value that can {capability}")]
    CapabilityMismatch {
        /// Codec that refused the value
        codec: &'static str,
        /// Capability the value would have to expose
        capability: &'static str,
    },

    /// A structured document failed to marshal or unmarshal
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The multipart boundary token appears inside part content
    #[error("multipart boundary {0:?} appears in part content")]
    BoundaryCollision(String),
}

impl CodecError {
    pub(crate) fn capability_mismatch(codec: &'static str, capability: &'static str) -> Self {
        Self::CapabilityMismatch { codec, capability }
    }
}

/// Classifier from an unexpected status and the executed envelope to a
/// domain error.
pub type ErrorHandler =
    Box<dyn Fn(StatusCode, &RequestEnvelope<'_>) -> ClientError + Send + Sync>;

/// Classifier applying only the default status semantics.
pub fn default_error_handler() -> ErrorHandler {
    error_handler(HashMap::new())
}

/// Classifier with per-call overrides consulted before the defaults. An
/// override maps a status code to a message returned verbatim for that
/// call.
pub fn error_handler(overrides: HashMap<u16, String>) -> ErrorHandler {
    Box::new(move |status, envelope| {
        if let Some(message) = overrides.get(&status.as_u16()) {
            return ClientError::Rejected(message.clone());
        }
        match status.as_u16() {
            404 => ClientError::NotFound { url: envelope.url().to_string() },
            401 => ClientError::PermissionDenied,
            500 => {
                let reported = &envelope.service_error().description;
                if reported.is_empty() {
                    ClientError::Server(format!("from {}", envelope.url()))
                } else {
                    ClientError::Server(reported.clone())
                }
            }
            code => ClientError::Framework(code),
        }
    })
}

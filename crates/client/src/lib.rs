//! # Docmill Client
//!
//! Client library for the Docmill document-processing web service.
//!
//! The service exposes XML resources over HTTP: a liveness document, a
//! script catalog, and jobs with their results. This crate turns logical
//! operations into HTTP requests with pluggable body codecs, classifies
//! response statuses into domain errors, and decodes bodies into the typed
//! resources from `docmill-domain`.
//!
//! ## Architecture
//!
//! - `registry` — static operation catalog (path template, HTTP method,
//!   expected success status)
//! - `codec` — pluggable encoders/decoders: structured XML, raw bytes, and
//!   the multipart composition used for job submissions with binary input
//! - `transport` — HTTP execution behind an injectable trait
//! - `errors` — error taxonomy and the status classifier
//! - `client` — the dispatcher and the public operations

pub mod client;
pub mod codec;
pub mod config;
pub mod errors;
pub mod registry;
pub mod request;
pub mod transport;

// Re-export commonly used items
pub use client::Client;
pub use codec::{
    BodySource, BodyTarget, Decoder, Encoder, MultipartBody, MultipartEncoder, RawCodec,
    RawPayload, XmlCodec,
};
pub use config::ClientConfig;
pub use errors::{default_error_handler, error_handler, ClientError, CodecError, ErrorHandler};
pub use request::{Payload, RequestEnvelope};
pub use transport::{HttpTransport, Transport, TransportError};

//! Per-call request envelope
//!
//! An envelope carries everything one call needs: the resolved URL and
//! method, the caller's result target, the dispatcher's error-detail slot,
//! and the codecs chosen for this call. It is created, executed, and
//! discarded within a single call, never shared.

use docmill_domain::ServiceError;
use reqwest::{Method, StatusCode};

use crate::codec::{BodySource, BodyTarget, Decoder, Encoder, XmlCodec};

/// Outgoing payload: the value to send and the encoder that turns it into
/// body bytes.
pub struct Payload<'a> {
    pub(crate) source: &'a dyn BodySource,
    pub(crate) encoder: Box<dyn Encoder>,
}

impl<'a> Payload<'a> {
    /// Payload encoded by `encoder`.
    pub fn new(source: &'a dyn BodySource, encoder: impl Encoder + 'static) -> Self {
        Self { source, encoder: Box::new(encoder) }
    }

    /// Payload encoded as a structured XML document.
    pub fn xml(source: &'a dyn BodySource) -> Self {
        Self::new(source, XmlCodec)
    }
}

/// State of one request/response round trip.
pub struct RequestEnvelope<'a> {
    pub(crate) url: String,
    pub(crate) method: Method,
    pub(crate) expected_status: StatusCode,
    /// Slot owned by the caller; populated by the transport on success
    pub(crate) result: Option<&'a mut dyn BodyTarget>,
    /// Slot owned by the dispatcher; populated only when the response body
    /// carries an error document
    pub(crate) error: ServiceError,
    pub(crate) payload: Option<Payload<'a>>,
    /// Decoder applied to the response body; per-call, so one operation can
    /// switch decoding strategy without mutating shared state
    pub(crate) decoder: Box<dyn Decoder>,
}

impl<'a> RequestEnvelope<'a> {
    pub(crate) fn new(
        url: String,
        method: Method,
        expected_status: StatusCode,
        result: Option<&'a mut dyn BodyTarget>,
        payload: Option<Payload<'a>>,
    ) -> Self {
        Self {
            url,
            method,
            expected_status,
            result,
            error: ServiceError::default(),
            payload,
            decoder: Box::new(XmlCodec),
        }
    }

    /// Replace the response decoder for this call.
    pub(crate) fn with_decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP method of the call.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Status code that signals success for this call.
    pub fn expected_status(&self) -> StatusCode {
        self.expected_status
    }

    /// Error document decoded from the response body, if the service
    /// reported one.
    pub fn service_error(&self) -> &ServiceError {
        &self.error
    }
}

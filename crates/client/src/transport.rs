//! HTTP execution behind an injectable seam
//!
//! The dispatcher never touches HTTP directly: it hands a
//! [`RequestEnvelope`] to a [`Transport`], which encodes the payload,
//! performs the exchange, reads the body in full, and decodes it into the
//! envelope's slots.

use async_trait::async_trait;
use quick_xml::events::Event;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use docmill_domain::ServiceError;

use crate::config::ClientConfig;
use crate::errors::CodecError;
use crate::request::RequestEnvelope;

/// Failures reported by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The response status differed from the operation's declared success
    /// status; the dispatcher classifies these into domain errors
    #[error("unexpected status {status}")]
    UnexpectedStatus {
        /// Status the service actually returned
        status: StatusCode,
    },

    /// The request could not be built or executed
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body failed to encode or decode
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// One request/response round trip.
///
/// Implementations encode the payload with the envelope's encoder, read
/// the response body in full, and decode it into the envelope's result
/// target (or its error slot) before returning. `UnexpectedStatus` is the
/// only error the dispatcher classifies; everything else propagates to the
/// caller unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the envelope, returning the response status.
    async fn execute(
        &self,
        envelope: &mut RequestEnvelope<'_>,
    ) -> Result<StatusCode, TransportError>;
}

/// Transport over reqwest. Timeout and user agent come from the client
/// configuration; there is no retry layer.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .no_proxy()
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        envelope: &mut RequestEnvelope<'_>,
    ) -> Result<StatusCode, TransportError> {
        let mut request = self.client.request(envelope.method().clone(), envelope.url());
        if let Some(payload) = &envelope.payload {
            let mut body = Vec::new();
            let content_type = payload.encoder.encode(payload.source, &mut body)?;
            request = request.header(CONTENT_TYPE, content_type).body(body);
        }

        debug!(method = %envelope.method(), url = %envelope.url(), "sending request");
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%status, bytes = bytes.len(), "received response");

        // The service reports failures as an <error> document, sometimes
        // inside a success-status response. Sniff before decoding so the
        // slot is populated either way.
        if let Some(reported) = sniff_service_error(&bytes) {
            envelope.error = reported;
            if status != envelope.expected_status() {
                return Err(TransportError::UnexpectedStatus { status });
            }
            return Ok(status);
        }

        if status != envelope.expected_status() {
            return Err(TransportError::UnexpectedStatus { status });
        }

        if let Some(target) = envelope.result.as_deref_mut() {
            envelope.decoder.decode(&bytes, target)?;
        }
        Ok(status)
    }
}

/// Best-effort detection of an `<error>` document in a response body.
/// Binary and non-XML bodies simply yield `None`.
fn sniff_service_error(bytes: &[u8]) -> Option<ServiceError> {
    let text = std::str::from_utf8(bytes).ok()?;
    if root_element(text)? != "error" {
        return None;
    }
    quick_xml::de::from_str(text).ok()
}

/// Local name of the document's root element, skipping the declaration,
/// comments, and leading whitespace.
fn root_element(text: &str) -> Option<String> {
    let mut reader = quick_xml::Reader::from_str(text);
    loop {
        match reader.read_event().ok()? {
            Event::Start(start) | Event::Empty(start) => {
                return String::from_utf8(start.local_name().as_ref().to_vec()).ok();
            }
            Event::Decl(_) | Event::Comment(_) | Event::Text(_) | Event::PI(_)
            | Event::DocType(_) => {}
            _ => return None,
        }
    }
}

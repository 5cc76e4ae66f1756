//! Raw byte pass-through codec
//!
//! Job results come back as an opaque archive, not a structured document.
//! The raw codec moves bytes untouched between the wire and a
//! [`RawPayload`].

use crate::codec::{BodySource, BodyTarget, Decoder, Encoder};
use crate::errors::CodecError;

/// Media type announced for opaque payloads.
pub const BINARY_MEDIA_TYPE: &str = "application/octet-stream";

/// Pass-through codec for opaque payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCodec;

impl Encoder for RawCodec {
    fn encode(&self, source: &dyn BodySource, out: &mut Vec<u8>) -> Result<String, CodecError> {
        out.extend_from_slice(source.expose_bytes()?);
        Ok(BINARY_MEDIA_TYPE.to_string())
    }
}

impl Decoder for RawCodec {
    fn decode(&self, bytes: &[u8], target: &mut dyn BodyTarget) -> Result<(), CodecError> {
        target.accept_bytes(bytes)
    }
}

/// Owned byte payload, the value raw codecs read and write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    data: Vec<u8>,
}

impl RawPayload {
    /// Payload owning `data`.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The payload's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the payload, yielding its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for RawPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for RawPayload {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl BodySource for RawPayload {
    fn expose_bytes(&self) -> Result<&[u8], CodecError> {
        Ok(&self.data)
    }
}

impl BodyTarget for RawPayload {
    fn accept_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.data = bytes.to_vec();
        Ok(())
    }
}

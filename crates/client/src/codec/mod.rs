//! Pluggable body encoding and decoding
//!
//! A codec turns an in-memory value into request-body bytes and response
//! bytes back into a value. Values advertise what they support through the
//! [`BodySource`] and [`BodyTarget`] capability traits; a codec asserts the
//! capability it needs and fails with a typed mismatch error when a value
//! does not expose it, never silently.

use serde::de::DeserializeOwned;
use serde::Serialize;

use docmill_domain::{Alive, Job, JobRequest, Jobs, Script, Scripts, ServiceError};

use crate::errors::CodecError;

pub mod multipart;
pub mod raw;

pub use multipart::{MultipartBody, MultipartEncoder};
pub use raw::{RawCodec, RawPayload};

/// Media type of structured documents on the wire.
pub const XML_MEDIA_TYPE: &str = "application/xml; charset=utf-8";

/// Value that can be encoded into a request body.
///
/// Every capability defaults to a mismatch error; implementors opt in to
/// the representations they actually support.
pub trait BodySource: Send + Sync {
    /// Marshal the value as a structured XML document.
    fn marshal_xml(&self, _out: &mut Vec<u8>) -> Result<(), CodecError> {
        Err(CodecError::capability_mismatch("XML codec", "marshal to XML"))
    }

    /// Expose the value's raw bytes.
    fn expose_bytes(&self) -> Result<&[u8], CodecError> {
        Err(CodecError::capability_mismatch("raw codec", "expose raw bytes"))
    }

    /// Split the value into its two multipart fields.
    fn multipart_parts(&self) -> Result<MultipartParts<'_>, CodecError> {
        Err(CodecError::capability_mismatch("multipart codec", "split into multipart fields"))
    }
}

/// Value that can be populated from a response body.
pub trait BodyTarget: Send {
    /// Unmarshal a structured XML document into the value.
    fn unmarshal_xml(&mut self, _bytes: &[u8]) -> Result<(), CodecError> {
        Err(CodecError::capability_mismatch("XML codec", "unmarshal from XML"))
    }

    /// Accept the body's raw bytes.
    fn accept_bytes(&mut self, _bytes: &[u8]) -> Result<(), CodecError> {
        Err(CodecError::capability_mismatch("raw codec", "accept raw bytes"))
    }
}

/// Borrowed pair of fields produced by a multipart-capable source.
pub struct MultipartParts<'a> {
    /// Structured job descriptor field
    pub document: &'a dyn BodySource,
    /// Opaque binary data field
    pub data: &'a dyn BodySource,
}

/// Serializes an outgoing payload into body bytes.
///
/// This is the encoder-supplier seam: the dispatcher picks the encoder per
/// call, so one operation can switch body formats without touching shared
/// state.
pub trait Encoder: Send + Sync {
    /// Encode `source` into `out` and return the content type of the body
    /// just produced (the multipart encoder finalizes its boundary during
    /// encode). On error the buffer must be treated as invalid; partial
    /// output is not rolled back.
    fn encode(&self, source: &dyn BodySource, out: &mut Vec<u8>) -> Result<String, CodecError>;
}

/// Decodes a fully-read response body into a target value.
pub trait Decoder: Send + Sync {
    /// Decode `bytes` into `target`. A failed decode leaves the target in
    /// an unspecified state; callers must discard it.
    fn decode(&self, bytes: &[u8], target: &mut dyn BodyTarget) -> Result<(), CodecError>;
}

/// Structured-document codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl Encoder for XmlCodec {
    fn encode(&self, source: &dyn BodySource, out: &mut Vec<u8>) -> Result<String, CodecError> {
        source.marshal_xml(out)?;
        Ok(XML_MEDIA_TYPE.to_string())
    }
}

impl Decoder for XmlCodec {
    fn decode(&self, bytes: &[u8], target: &mut dyn BodyTarget) -> Result<(), CodecError> {
        target.unmarshal_xml(bytes)
    }
}

/// Marker for typed resources with an XML wire mapping. Implementing it
/// gives a resource both XML body capabilities.
pub trait XmlResource: Serialize + DeserializeOwned + Send + Sync {}

impl<T: XmlResource> BodySource for T {
    fn marshal_xml(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let document =
            quick_xml::se::to_string(self).map_err(|err| CodecError::Malformed(err.to_string()))?;
        out.extend_from_slice(document.as_bytes());
        Ok(())
    }
}

impl<T: XmlResource> BodyTarget for T {
    fn unmarshal_xml(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        *self =
            quick_xml::de::from_reader(bytes).map_err(|err| CodecError::Malformed(err.to_string()))?;
        Ok(())
    }
}

impl XmlResource for Alive {}
impl XmlResource for Script {}
impl XmlResource for Scripts {}
impl XmlResource for Job {}
impl XmlResource for Jobs {}
impl XmlResource for JobRequest {}
impl XmlResource for ServiceError {}

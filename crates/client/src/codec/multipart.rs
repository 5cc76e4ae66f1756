//! Boundary-delimited two-part message encoding
//!
//! Job submissions that carry binary input data travel as one
//! `multipart/form-data` body: the opaque data part first, then the job
//! request document, then the closing boundary. Compliant readers do not
//! depend on part order, but golden tests pin it.
//!
//! Only encoding exists here; no operation decodes a multipart response.

use uuid::Uuid;

use crate::codec::{BodySource, Encoder, MultipartParts, XML_MEDIA_TYPE};
use crate::errors::CodecError;

/// Form-data field name of the binary input part.
pub const DATA_PART_NAME: &str = "job-data";
/// Form-data field name of the job request document part.
pub const DOCUMENT_PART_NAME: &str = "job-request";
/// Filename advertised for the binary input part; job data travels zipped.
const DATA_PART_FILENAME: &str = "docmill-job-data.zip";
const DATA_PART_MEDIA_TYPE: &str = "application/zip";

/// Pairs a job request document with its binary input data, each field
/// keeping its own encoding.
pub struct MultipartBody<'a> {
    document: &'a dyn BodySource,
    data: &'a dyn BodySource,
}

impl<'a> MultipartBody<'a> {
    /// Body pairing `document` (structured) with `data` (raw bytes).
    pub fn new(document: &'a dyn BodySource, data: &'a dyn BodySource) -> Self {
        Self { document, data }
    }
}

impl BodySource for MultipartBody<'_> {
    fn multipart_parts(&self) -> Result<MultipartParts<'_>, CodecError> {
        Ok(MultipartParts { document: self.document, data: self.data })
    }
}

/// Encoder for two-part form-data bodies.
pub struct MultipartEncoder {
    boundary: String,
    pinned: bool,
}

impl MultipartEncoder {
    /// Encoder with a freshly generated boundary token. The token is
    /// regenerated during encode if it happens to occur inside either
    /// part's bytes.
    pub fn new() -> Self {
        Self { boundary: generate_boundary(), pinned: false }
    }

    /// Encoder with a caller-supplied boundary, for deterministic output.
    /// A pinned boundary that collides with part content fails the encode
    /// instead of being replaced.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self { boundary: boundary.into(), pinned: true }
    }

    /// The configured boundary token.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }
}

impl Default for MultipartEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for MultipartEncoder {
    fn encode(&self, source: &dyn BodySource, out: &mut Vec<u8>) -> Result<String, CodecError> {
        let parts = source.multipart_parts()?;

        let mut document = Vec::new();
        parts.document.marshal_xml(&mut document)?;
        let data = parts.data.expose_bytes()?;

        let boundary = resolve_boundary(&self.boundary, self.pinned, &document, data)?;

        write_part(
            out,
            &boundary,
            true,
            &[
                format!(
                    "Content-Disposition: form-data; name=\"{DATA_PART_NAME}\"; filename=\"{DATA_PART_FILENAME}\""
                ),
                "Content-Transfer-Encoding: binary".to_string(),
                format!("Content-Type: {DATA_PART_MEDIA_TYPE}"),
            ],
            data,
        );
        write_part(
            out,
            &boundary,
            false,
            &[
                format!("Content-Disposition: form-data; name=\"{DOCUMENT_PART_NAME}\""),
                format!("Content-Type: {XML_MEDIA_TYPE}"),
            ],
            &document,
        );
        out.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Ok(format!("multipart/form-data; boundary={boundary}"))
    }
}

fn generate_boundary() -> String {
    format!("docmill-{}", Uuid::new_v4().simple())
}

/// Pick a boundary that occurs in neither part. Generated boundaries are
/// replaced until clean; pinned ones fail so golden output stays stable.
fn resolve_boundary(
    configured: &str,
    pinned: bool,
    document: &[u8],
    data: &[u8],
) -> Result<String, CodecError> {
    let mut boundary = configured.to_string();
    while contains(document, boundary.as_bytes()) || contains(data, boundary.as_bytes()) {
        if pinned {
            return Err(CodecError::BoundaryCollision(boundary));
        }
        boundary = generate_boundary();
    }
    Ok(boundary)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

fn write_part(out: &mut Vec<u8>, boundary: &str, first: bool, headers: &[String], body: &[u8]) {
    if !first {
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    for header in headers {
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(body);
}

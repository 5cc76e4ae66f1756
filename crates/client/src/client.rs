//! Public client and request dispatch
//!
//! Every operation follows the same path: resolve the registered endpoint,
//! build an envelope, hand it to the transport, and either return the
//! decoded result or classify the failure. Operations differ only in their
//! registry entry, payload, and per-call error overrides.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::instrument;

use docmill_domain::{Alive, Job, JobRequest, Jobs, Script, Scripts};

use crate::codec::{BodyTarget, MultipartBody, MultipartEncoder, RawCodec, RawPayload};
use crate::config::ClientConfig;
use crate::errors::{default_error_handler, error_handler, ClientError, ErrorHandler};
use crate::registry::{
    entry, expand, OP_ALIVE, OP_DELETE_JOB, OP_JOB, OP_JOBS, OP_JOB_REQUEST, OP_RESULT, OP_SCRIPT,
    OP_SCRIPTS,
};
use crate::request::{Payload, RequestEnvelope};
use crate::transport::{HttpTransport, Transport, TransportError};

/// Client for a Docmill web service instance.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client talking HTTP to the service at `config.base_url`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)
            .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self { base_url: config.base_url, transport: Arc::new(transport) })
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    /// Base URL the client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the service is up, returning its liveness document.
    #[instrument(skip(self))]
    pub async fn alive(&self) -> Result<Alive, ClientError> {
        let mut alive = Alive::default();
        let envelope = self.build_request(OP_ALIVE, Some(&mut alive), None, &[]);
        self.dispatch(envelope, &default_error_handler()).await?;
        Ok(alive)
    }

    /// List the scripts installed on the service.
    #[instrument(skip(self))]
    pub async fn scripts(&self) -> Result<Scripts, ClientError> {
        let mut scripts = Scripts::default();
        let envelope = self.build_request(OP_SCRIPTS, Some(&mut scripts), None, &[]);
        self.dispatch(envelope, &default_error_handler()).await?;
        Ok(scripts)
    }

    /// Fetch one script's detail by id.
    #[instrument(skip(self))]
    pub async fn script(&self, id: &str) -> Result<Script, ClientError> {
        let mut script = Script::default();
        let envelope = self.build_request(OP_SCRIPT, Some(&mut script), None, &[id]);
        let handler = error_handler(HashMap::from([(404, format!("Script {id} not found"))]));
        self.dispatch(envelope, &handler).await?;
        Ok(script)
    }

    /// Absolute URL of one script's detail resource, without calling the
    /// service.
    pub fn script_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, expand(entry(OP_SCRIPT).path, &[id]))
    }

    /// Submit a job. With `data`, the request travels as a two-part
    /// form-data body carrying the zipped input alongside the document;
    /// without, as a plain XML body.
    #[instrument(skip(self, request, data), fields(script = %request.script.id))]
    pub async fn job_request(
        &self,
        request: &JobRequest,
        data: Option<&[u8]>,
    ) -> Result<Job, ClientError> {
        let mut job = Job::default();
        let handler = error_handler(HashMap::from([(400, "Job request is not valid".to_string())]));

        match data {
            Some(bytes) => {
                let raw = RawPayload::from(bytes);
                let body = MultipartBody::new(request, &raw);
                let payload = Payload::new(&body, MultipartEncoder::new());
                let envelope = self.build_request(OP_JOB_REQUEST, Some(&mut job), Some(payload), &[]);
                self.dispatch(envelope, &handler).await?;
            }
            None => {
                let envelope =
                    self.build_request(OP_JOB_REQUEST, Some(&mut job), Some(Payload::xml(request)), &[]);
                self.dispatch(envelope, &handler).await?;
            }
        }
        Ok(job)
    }

    /// Fetch one job's status, including any messages with a sequence
    /// number at or above `message_sequence`.
    #[instrument(skip(self))]
    pub async fn job(&self, id: &str, message_sequence: u32) -> Result<Job, ClientError> {
        let sequence = message_sequence.to_string();
        let mut job = Job::default();
        let envelope = self.build_request(OP_JOB, Some(&mut job), None, &[id, &sequence]);
        let handler = error_handler(HashMap::from([(404, format!("Job {id} not found"))]));
        self.dispatch(envelope, &handler).await?;
        Ok(job)
    }

    /// List the jobs known to the service.
    #[instrument(skip(self))]
    pub async fn jobs(&self) -> Result<Jobs, ClientError> {
        let mut jobs = Jobs::default();
        let envelope = self.build_request(OP_JOBS, Some(&mut jobs), None, &[]);
        self.dispatch(envelope, &default_error_handler()).await?;
        Ok(jobs)
    }

    /// Delete one job by id.
    #[instrument(skip(self))]
    pub async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        let envelope = self.build_request(OP_DELETE_JOB, None, None, &[id]);
        let handler = error_handler(HashMap::from([(404, format!("Job {id} not found"))]));
        self.dispatch(envelope, &handler).await
    }

    /// Download one job's result archive as raw bytes.
    #[instrument(skip(self))]
    pub async fn results(&self, id: &str) -> Result<Vec<u8>, ClientError> {
        let mut payload = RawPayload::default();
        let envelope =
            self.build_request(OP_RESULT, Some(&mut payload), None, &[id]).with_decoder(RawCodec);
        let handler = error_handler(HashMap::from([(404, format!("Job {id} not found"))]));
        self.dispatch(envelope, &handler).await?;
        Ok(payload.into_bytes())
    }

    /// Resolve the registered endpoint and assemble the envelope for one
    /// call.
    fn build_request<'a>(
        &self,
        name: &str,
        result: Option<&'a mut dyn BodyTarget>,
        payload: Option<Payload<'a>>,
        args: &[&str],
    ) -> RequestEnvelope<'a> {
        let endpoint = entry(name);
        let url = format!("{}{}", self.base_url, expand(endpoint.path, args));
        RequestEnvelope::new(url, endpoint.method.clone(), endpoint.ok_status, result, payload)
    }

    /// Execute the envelope and translate the outcome.
    ///
    /// A success status can still carry an error document in the body; that
    /// case surfaces as a service error, not a decoded result.
    async fn dispatch(
        &self,
        mut envelope: RequestEnvelope<'_>,
        handler: &ErrorHandler,
    ) -> Result<(), ClientError> {
        match self.transport.execute(&mut envelope).await {
            Ok(_) => {
                if envelope.service_error().is_empty() {
                    Ok(())
                } else {
                    Err(ClientError::Service(envelope.service_error().description.clone()))
                }
            }
            Err(TransportError::UnexpectedStatus { status }) => Err(handler(status, &envelope)),
            Err(other) => Err(ClientError::Transport(other)),
        }
    }
}

//! Job resources
//!
//! A job is one execution of a script. Submissions go up as a `jobRequest`
//! document; the service answers with `job` documents that accumulate
//! messages and, once finished, a result tree.

use serde::{Deserialize, Serialize};

use super::script::{Script, ScriptInput, ScriptOption};

/// Job submission document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "jobRequest", default)]
pub struct JobRequest {
    /// Script to run, usually referenced by id only
    #[serde(rename = "script")]
    pub script: Script,
    #[serde(rename = "input", skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<ScriptInput>,
    #[serde(rename = "option", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ScriptOption>,
    #[serde(rename = "callback", skip_serializing_if = "Vec::is_empty")]
    pub callbacks: Vec<Callback>,
}

/// Status-change callback registration carried on a job request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "callback", default)]
pub struct Callback {
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@frequency", skip_serializing_if = "String::is_empty")]
    pub frequency: String,
    #[serde(rename = "@type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

/// A job as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "job", default)]
pub struct Job {
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "@href", skip_serializing_if = "String::is_empty")]
    pub href: String,
    /// Execution state, e.g. "IDLE", "RUNNING", "DONE", "ERROR"
    #[serde(rename = "@status", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(rename = "nicename", skip_serializing_if = "Option::is_none")]
    pub nicename: Option<String>,
    #[serde(rename = "script", skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(rename = "messages", skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
    #[serde(rename = "log", skip_serializing_if = "Option::is_none")]
    pub log: Option<JobLog>,
    #[serde(rename = "results", skip_serializing_if = "Option::is_none")]
    pub results: Option<Results>,
}

/// List of jobs known to the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "jobs", default)]
pub struct Jobs {
    #[serde(rename = "@href", skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(rename = "job", skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
}

/// Execution messages attached to a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "messages", default)]
pub struct Messages {
    #[serde(rename = "message", skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

/// One execution message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "message", default)]
pub struct Message {
    #[serde(rename = "@level", skip_serializing_if = "String::is_empty")]
    pub level: String,
    #[serde(rename = "@sequence", skip_serializing_if = "String::is_empty")]
    pub sequence: String,
    #[serde(rename = "$text", skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// Pointer to the job's execution log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "log", default)]
pub struct JobLog {
    #[serde(rename = "@href")]
    pub href: String,
}

/// Root of a finished job's result tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "results", default)]
pub struct Results {
    #[serde(rename = "@href", skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(rename = "@mime-type", skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(rename = "result", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ResultNode>,
}

/// Node in the result tree. Port- and option-level nodes nest file-level
/// nodes beneath them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "result", default)]
pub struct ResultNode {
    #[serde(rename = "@href", skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(rename = "@mime-type", skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    /// Whether the node came from a port or an option
    #[serde(rename = "@from", skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "result", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ResultNode>,
}

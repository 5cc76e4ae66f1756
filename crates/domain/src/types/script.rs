//! Script catalog resources
//!
//! A script is a named document conversion hosted by the service. The
//! catalog lists the scripts; each script describes its inputs and options.

use serde::{Deserialize, Serialize};

/// Catalog of scripts available on the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "scripts", default)]
pub struct Scripts {
    /// URL this catalog was fetched from
    #[serde(rename = "@href", skip_serializing_if = "String::is_empty")]
    pub href: String,
    /// Scripts available on the service
    #[serde(rename = "script", skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,
}

/// A single conversion script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "script", default)]
pub struct Script {
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "@href", skip_serializing_if = "String::is_empty")]
    pub href: String,
    /// Human-readable name
    #[serde(rename = "nicename", skip_serializing_if = "Option::is_none")]
    pub nicename: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "homepage", skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(rename = "input", skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<ScriptInput>,
    #[serde(rename = "option", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ScriptOption>,
}

impl Script {
    /// Shorthand for a script referenced only by id, as used in job requests.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }
}

/// Declared input port of a script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "input", default)]
pub struct ScriptInput {
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "@desc", skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(rename = "@mediaType", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Whether the port accepts a sequence of documents
    #[serde(rename = "@sequence")]
    pub sequence: bool,
    #[serde(rename = "item", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// Declared option of a script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "option", default)]
pub struct ScriptOption {
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "@required")]
    pub required: bool,
    #[serde(rename = "@sequence")]
    pub sequence: bool,
    #[serde(rename = "@ordered")]
    pub ordered: bool,
    #[serde(rename = "@mediaType", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "@desc", skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "@outputType", skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(rename = "@separator", skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Option value, carried as element text
    #[serde(rename = "$text", skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(rename = "item", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// One value of a sequence-valued input or option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "item", default)]
pub struct Item {
    #[serde(rename = "@value")]
    pub value: String,
}

//! Service status resource

use std::fmt;

use serde::{Deserialize, Serialize};

/// Liveness document returned by the `alive` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "alive", default)]
pub struct Alive {
    /// Whether the service expects authenticated requests
    #[serde(rename = "@authentication")]
    pub authentication: bool,
    /// Execution mode reported by the service (e.g. "local")
    #[serde(rename = "@mode")]
    pub mode: String,
    /// Version of the service framework
    #[serde(rename = "@version")]
    pub version: String,
}

impl fmt::Display for Alive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alive:[#authentication:{} #mode:{} #version:{}]",
            self.authentication, self.mode, self.version
        )
    }
}

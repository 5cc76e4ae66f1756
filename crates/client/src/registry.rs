//! Static catalog of service operations
//!
//! The operation set is fixed at build time: a lookup miss is a
//! programming error and fails loudly. The table itself is read-only
//! process-wide state, safe to share across concurrent calls.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use reqwest::{Method, StatusCode};

/// Service liveness check.
pub const OP_ALIVE: &str = "alive";
/// Script catalog listing.
pub const OP_SCRIPTS: &str = "scripts";
/// Single script detail; one path argument (script id).
pub const OP_SCRIPT: &str = "script";
/// Job submission.
pub const OP_JOB_REQUEST: &str = "job-request";
/// Single job detail; arguments: job id, message sequence number.
pub const OP_JOB: &str = "job";
/// Job listing.
pub const OP_JOBS: &str = "jobs";
/// Job deletion; one path argument (job id).
pub const OP_DELETE_JOB: &str = "delete-job";
/// Job result archive; one path argument (job id).
pub const OP_RESULT: &str = "result";

/// One registered operation: where it lives and what success looks like.
#[derive(Debug, Clone)]
pub struct ApiEntry {
    /// Path template relative to the base URL; `{}` placeholders are
    /// substituted left-to-right
    pub path: &'static str,
    /// HTTP method of the operation
    pub method: Method,
    /// Status code that signals success for this operation
    pub ok_status: StatusCode,
}

static ENTRIES: Lazy<HashMap<&'static str, ApiEntry>> = Lazy::new(|| {
    HashMap::from([
        (OP_ALIVE, ApiEntry { path: "alive", method: Method::GET, ok_status: StatusCode::OK }),
        (OP_SCRIPTS, ApiEntry { path: "scripts", method: Method::GET, ok_status: StatusCode::OK }),
        (
            OP_SCRIPT,
            ApiEntry { path: "scripts/{}", method: Method::GET, ok_status: StatusCode::OK },
        ),
        (
            OP_JOB_REQUEST,
            ApiEntry { path: "jobs", method: Method::POST, ok_status: StatusCode::CREATED },
        ),
        (
            OP_JOB,
            ApiEntry {
                path: "jobs/{}?msgSeq={}",
                method: Method::GET,
                ok_status: StatusCode::OK,
            },
        ),
        (OP_JOBS, ApiEntry { path: "jobs", method: Method::GET, ok_status: StatusCode::OK }),
        (
            OP_DELETE_JOB,
            ApiEntry { path: "jobs/{}", method: Method::DELETE, ok_status: StatusCode::NO_CONTENT },
        ),
        (
            OP_RESULT,
            ApiEntry { path: "jobs/{}/result", method: Method::GET, ok_status: StatusCode::OK },
        ),
    ])
});

/// Look up a registered operation.
///
/// # Panics
///
/// Panics on an unknown name; the operation set never grows at runtime, so
/// a miss is a bug in the caller, not a recoverable condition.
pub fn entry(name: &str) -> &'static ApiEntry {
    ENTRIES.get(name).unwrap_or_else(|| panic!("no api entry registered for {name:?}"))
}

/// Substitute positional arguments into a path template, left to right.
///
/// # Panics
///
/// Panics when the argument count does not match the template's
/// placeholders.
pub(crate) fn expand(template: &str, args: &[&str]) -> String {
    let placeholders = template.matches("{}").count();
    assert_eq!(
        placeholders,
        args.len(),
        "template {template:?} takes {placeholders} arguments, got {}",
        args.len()
    );

    let mut segments = template.split("{}");
    let mut path =
        String::with_capacity(template.len() + args.iter().map(|arg| arg.len()).sum::<usize>());
    if let Some(first) = segments.next() {
        path.push_str(first);
    }
    for (arg, rest) in args.iter().zip(segments) {
        path.push_str(arg);
        path.push_str(rest);
    }
    path
}

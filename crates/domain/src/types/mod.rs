//! Typed resources exchanged with the Docmill web service

pub mod error;
pub mod job;
pub mod script;
pub mod status;

pub use error::ServiceError;
pub use job::{Callback, Job, JobLog, JobRequest, Jobs, Message, Messages, ResultNode, Results};
pub use script::{Item, Script, ScriptInput, ScriptOption, Scripts};
pub use status::Alive;

//! Data models shared by the library and the command-line tool.
//! Job files and stdout messages are JSON with camelCase keys.

mod parameter_value;
mod parameter_spec;
mod preset_job;
mod worker_message;

pub use parameter_value::*;
pub use parameter_spec::*;
pub use preset_job::*;
pub use worker_message::*;

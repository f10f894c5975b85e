//! Agent function dispatcher for the revenue backend.
//!
//! The conversational framework owns language understanding. This crate owns
//! the other half of the contract:
//! - the base prompt and few-shot dialogues that steer function selection
//! - a registry of named functions, each a single backend HTTP call
//! - reshaping backend JSON into short strings for the reply
//!
//! # Key Types
//!
//! - `AgentRuntime` - registry + backend, dispatches by function name
//! - `Backend` - request seam; `HttpBackend` talks to the real service
//! - `Tool` - one registered function

pub mod args;
pub mod backend;
pub mod call;
pub mod errors;
pub mod functions;
pub mod prompt;
pub mod runtime;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod tools;

pub use backend::{Backend, BackendRequest, BackendResponse, HttpBackend, Method};
pub use errors::ToolError;
pub use runtime::{AgentMetadata, AgentRuntime, FunctionInfo};
pub use tools::{Tool, ToolRegistry};

pub mod agents;
pub mod config;
pub mod console;
pub mod error;
pub mod llm;
pub mod models;
pub mod orchestration;
pub mod pipeline;
pub mod runtime;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{OrchestratorError, Result};

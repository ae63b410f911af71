//! Infrastructure layer - stateful services and external adapters

pub mod admission;
pub mod llm;
pub mod logging;
pub mod services;
pub mod usage;

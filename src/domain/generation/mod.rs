//! Generation domain - request/response types and the provider seam
//!
//! The completion service itself is an external collaborator; this module
//! owns the shapes that cross that boundary and the prompts sent over it.

mod prompt;
mod provider;
mod request;
mod response;

pub use prompt::{build_system_prompt, build_user_prompt};
pub use provider::{GeneratedText, GenerationRequest, TextGenerator};
pub use request::{Language, OutputLanguage, Platform, PostRequest};
pub use response::{PostResponse, PostVariant, TokenUsage};

#[cfg(test)]
pub use provider::mock;

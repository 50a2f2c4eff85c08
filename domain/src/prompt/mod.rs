//! Prompt domain
//!
//! Templates for every request sent to the generative-text collaborator.

mod template;

pub use template::PromptTemplate;

// Campus Assistant - question answering over a static campus knowledge base
// Matches free-text queries against hand-authored records using sentence
// embeddings, with a keyword intent classifier and a suggestion fallback.

pub mod api;
pub mod config;
pub mod engine;
pub mod errors;
pub mod kb;
pub mod nlu;
pub mod semantic;

pub use config::ServiceConfig;
pub use engine::ChatEngine;
pub use errors::{ChatError, ChatResult};
pub use kb::KnowledgeBase;

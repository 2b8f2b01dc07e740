//! lexiband - AI-powered IELTS study-guide generator
//!
//! This library turns an English article into a structured four-section study
//! guide (speaking practice, core vocabulary, reading logic, syntax analysis)
//! by dispatching one analysis request to a configurable LLM provider and
//! rendering the normalized result in the terminal.

// Allow certain clippy warnings that are stylistic
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod llm;
pub mod llm_providers;
pub mod logger;
pub mod output;
pub mod prompt;
pub mod providers;
pub mod store;
pub mod types;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use llm::AnalysisError;
pub use providers::{Provider, ProviderConfig};
pub use store::ResultStore;
pub use types::{StudyGuide, format_study_guide};

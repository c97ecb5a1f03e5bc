//! LLM module for scriptbot
//!
//! Handles AI-powered transcript summaries using the Gemini API.

mod client;
mod gemini;
pub mod prompts;

pub use client::{build_provider, summarize, LlmProvider};
pub use gemini::GeminiClient;

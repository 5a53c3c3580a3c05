//! Gemini provider implementation
//!
//! Talks to the Generative Language API `generateContent` endpoint.

pub mod client;
pub mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL, PROVIDER};

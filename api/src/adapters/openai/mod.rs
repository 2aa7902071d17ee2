//! OpenAI-compatible completion API adapter

pub mod client;

pub use client::OpenAiClient;

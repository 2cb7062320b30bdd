pub mod gemini;
pub mod store;
pub mod webhook;

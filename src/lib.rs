pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod image_processing;
pub mod logger;
pub mod options;
pub mod prompt;
pub mod server;
pub mod suggestions;
pub mod web_pages;

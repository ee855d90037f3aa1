//! Vidshelf Core Library
//!
//! This crate provides the domain model, YouTube URL validation, error types,
//! and configuration shared by the database and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod video_url;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use video_url::{embed_url, extract_video_id, VideoUrlError};

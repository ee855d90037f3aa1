//! Vidshelf API Library
//!
//! HTTP handlers, middleware, and application setup for the video catalogue.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
pub mod setup;
mod telemetry;

pub mod error;
pub mod state;

pub use error::ErrorResponse;
pub use middleware::REQUEST_ID_HEADER;

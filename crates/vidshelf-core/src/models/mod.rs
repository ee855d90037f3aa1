//! Data models for the application

mod home;
mod video;

pub use home::HomeResponse;
pub use video::*;

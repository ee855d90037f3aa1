pub mod home;
pub mod video_add;
pub mod video_get;

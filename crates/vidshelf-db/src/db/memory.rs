//! In-process video store.
//!
//! Mirrors the PostgreSQL repository: ids are assigned sequentially from 1,
//! `video_id` is unique, listings are ordered by lowercased name (code point
//! order) then id, and search is a case-insensitive substring match.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use vidshelf_core::{
    models::{Video, VideoRecord},
    AppError,
};

use super::video::VideoStore;

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    videos: Vec<Video>,
}

#[derive(Default)]
pub struct InMemoryVideoStore {
    state: RwLock<MemoryState>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn create_video(&self, record: VideoRecord) -> Result<Video, AppError> {
        let mut state = self.state.write().await;

        if state.videos.iter().any(|v| v.video_id == record.video_id) {
            return Err(AppError::DuplicateVideo {
                video_id: record.video_id,
            });
        }

        state.last_id += 1;
        let video = Video {
            id: state.last_id,
            name: record.name,
            url: record.url,
            notes: record.notes,
            video_id: record.video_id,
            created_at: Utc::now(),
        };
        state.videos.push(video.clone());

        Ok(video)
    }

    async fn list_videos(&self, search: Option<&str>) -> Result<Vec<Video>, AppError> {
        let state = self.state.read().await;
        let needle = search.map(str::to_lowercase);

        let mut videos: Vec<Video> = state
            .videos
            .iter()
            .filter(|v| match needle {
                Some(ref n) => v.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        // Code-point order, same as PostgreSQL's COLLATE "C"
        videos.sort_by_cached_key(|v| (v.name.to_lowercase(), v.id));

        Ok(videos)
    }

    async fn get_video(&self, id: i64) -> Result<Option<Video>, AppError> {
        let state = self.state.read().await;
        Ok(state.videos.iter().find(|v| v.id == id).cloned())
    }

    async fn count_videos(&self) -> Result<i64, AppError> {
        let state = self.state.read().await;
        Ok(state.videos.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

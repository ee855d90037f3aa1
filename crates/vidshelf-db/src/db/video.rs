use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use vidshelf_core::{
    models::{Video, VideoRecord},
    AppError,
};

const VIDEO_COLUMNS: &str = "id, name, url, notes, video_id, created_at";

/// Storage operations for catalogued videos.
/// Implemented by PostgreSQL and by the in-memory store.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a validated video. A second video with the same `video_id`
    /// fails with `AppError::DuplicateVideo`.
    async fn create_video(&self, record: VideoRecord) -> Result<Video, AppError>;

    /// Videos ordered by lowercased name compared by code point, optionally
    /// restricted to names containing `search` (case-insensitive, matched literally).
    async fn list_videos(&self, search: Option<&str>) -> Result<Vec<Video>, AppError>;

    async fn get_video(&self, id: i64) -> Result<Option<Video>, AppError>;

    async fn count_videos(&self) -> Result<i64, AppError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed video repository
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    #[tracing::instrument(skip(self, record), fields(db.table = "videos", db.operation = "insert", video_id = %record.video_id))]
    async fn create_video(&self, record: VideoRecord) -> Result<Video, AppError> {
        let query = format!(
            "INSERT INTO videos (name, url, notes, video_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            VIDEO_COLUMNS
        );

        let video = sqlx::query_as::<Postgres, Video>(&query)
            .bind(&record.name)
            .bind(&record.url)
            .bind(&record.notes)
            .bind(&record.video_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    AppError::DuplicateVideo {
                        video_id: record.video_id.clone(),
                    }
                }
                other => AppError::Database(other),
            })?;

        tracing::debug!(id = video.id, "Video inserted");
        Ok(video)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    async fn list_videos(&self, search: Option<&str>) -> Result<Vec<Video>, AppError> {
        let videos = match search {
            Some(term) => {
                let query = format!(
                    "SELECT {} FROM videos WHERE name ILIKE $1 ESCAPE '\\' ORDER BY LOWER(name) COLLATE \"C\" ASC, id ASC",
                    VIDEO_COLUMNS
                );
                sqlx::query_as::<Postgres, Video>(&query)
                    .bind(contains_pattern(term))
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {} FROM videos ORDER BY LOWER(name) COLLATE \"C\" ASC, id ASC",
                    VIDEO_COLUMNS
                );
                sqlx::query_as::<Postgres, Video>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(videos)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select", db.record_id = id))]
    async fn get_video(&self, id: i64) -> Result<Option<Video>, AppError> {
        let query = format!("SELECT {} FROM videos WHERE id = $1", VIDEO_COLUMNS);
        let video = sqlx::query_as::<Postgres, Video>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(video)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    async fn count_videos(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// `%term%` with LIKE wildcards in `term` escaped by backslash.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::AppError;
use crate::video_url::{embed_url, extract_video_id};

/// Number of note characters shown in a video's one-line summary.
const SUMMARY_NOTES_CHARS: usize = 200;

/// A catalogued video link as stored in the `videos` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
    pub created_at: DateTime<Utc>,
}

impl Display for Video {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let notes: String = self
            .notes
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(SUMMARY_NOTES_CHARS)
            .collect();
        write!(
            f,
            "ID: {}, Name: {}, URL: {}, Video ID: {}, Notes: {}",
            self.id, self.name, self.url, self.video_id, notes
        )
    }
}

/// Request DTO for adding a video
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct NewVideo {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,
    /// YouTube watch URL, e.g. `https://www.youtube.com/watch?v=LluAI0f0N9s`
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 400,
        message = "URL must be between 1 and 400 characters"
    ))]
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewVideo {
    /// Strip surrounding whitespace; blank notes become `None`.
    pub fn normalized(self) -> Self {
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
            notes,
        }
    }

    /// Check field lengths and presence.
    pub fn validate_fields(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }

    /// Normalize, validate, and derive the video identifier from the URL.
    pub fn into_record(self) -> Result<VideoRecord, AppError> {
        let new_video = self.normalized();
        new_video.validate_fields()?;
        let video_id = extract_video_id(&new_video.url)?;

        Ok(VideoRecord {
            name: new_video.name,
            url: new_video.url,
            notes: new_video.notes,
            video_id,
        })
    }
}

/// A validated video ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct VideoResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
    /// Player URL for displaying the video
    pub embed_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        let embed_url = embed_url(&video.video_id);
        VideoResponse {
            id: video.id,
            name: video.name,
            url: video.url,
            notes: video.notes,
            video_id: video.video_id,
            embed_url,
            created_at: video.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoListResponse {
    pub videos: Vec<VideoResponse>,
    pub count: usize,
    /// Human-readable count, e.g. "No videos", "1 Video", "3 Videos"
    pub count_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl VideoListResponse {
    pub fn new(videos: Vec<Video>, search_term: Option<String>) -> Self {
        let count = videos.len();
        VideoListResponse {
            videos: videos.into_iter().map(VideoResponse::from).collect(),
            count,
            count_label: count_label(count),
            search_term,
        }
    }
}

pub fn count_label(count: usize) -> String {
    match count {
        0 => "No videos".to_string(),
        1 => "1 Video".to_string(),
        n => format!("{} Videos", n),
    }
}

/// The search form on the video list.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct VideoQuery {
    /// Case-insensitive substring of the video name
    #[serde(default)]
    pub search_term: Option<String>,
}

impl VideoQuery {
    /// Build from raw query pairs. A repeated `search_term` keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let search_term = pairs
            .into_iter()
            .filter(|(key, _)| key == "search_term")
            .map(|(_, value)| value)
            .last();
        Self { search_term }
    }

    /// The trimmed search term, or `None` when absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_url::VideoUrlError;

    fn test_video(id: i64, name: &str, notes: Option<&str>) -> Video {
        Video {
            id,
            name: name.to_string(),
            url: format!("https://www.youtube.com/watch?v=vid{}", id),
            notes: notes.map(str::to_string),
            video_id: format!("vid{}", id),
            created_at: Utc::now(),
        }
    }

    fn new_video(name: &str, url: &str, notes: Option<&str>) -> NewVideo {
        NewVideo {
            name: name.to_string(),
            url: url.to_string(),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_into_record_extracts_video_id() {
        let record = new_video(
            "Vikings vs Chiefs",
            "https://www.youtube.com/watch?v=LluAI0f0N9s",
            Some("Pretty fun game"),
        )
        .into_record()
        .unwrap();

        assert_eq!(record.name, "Vikings vs Chiefs");
        assert_eq!(record.url, "https://www.youtube.com/watch?v=LluAI0f0N9s");
        assert_eq!(record.notes.as_deref(), Some("Pretty fun game"));
        assert_eq!(record.video_id, "LluAI0f0N9s");
    }

    #[test]
    fn test_into_record_trims_fields_and_drops_blank_notes() {
        let record = new_video(
            "  Packers highlights ",
            " https://www.youtube.com/watch?v=abc ",
            Some("   "),
        )
        .into_record()
        .unwrap();

        assert_eq!(record.name, "Packers highlights");
        assert_eq!(record.url, "https://www.youtube.com/watch?v=abc");
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_into_record_requires_name() {
        let err = new_video("   ", "https://www.youtube.com/watch?v=abc", None)
            .into_record()
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.contains("Name")));
    }

    #[test]
    fn test_into_record_rejects_long_name() {
        let err = new_video(
            &"n".repeat(201),
            "https://www.youtube.com/watch?v=abc",
            None,
        )
        .into_record()
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        assert!(new_video(
            &"n".repeat(200),
            "https://www.youtube.com/watch?v=abc",
            None
        )
        .into_record()
        .is_ok());
    }

    #[test]
    fn test_into_record_rejects_long_url_before_parsing() {
        let url = format!("https://www.youtube.com/watch?v=abc&pad={}", "p".repeat(400));
        let err = new_video("example", &url, None).into_record().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_into_record_rejects_invalid_url() {
        let err = new_video("example", "https://www.github.com", Some("notes"))
            .into_record()
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidVideoUrl(VideoUrlError::NotYoutube(_))
        ));
    }

    #[test]
    fn test_new_video_deserializes_with_missing_fields() {
        let new_video: NewVideo = serde_json::from_str(r#"{"name": "only a name"}"#).unwrap();
        assert_eq!(new_video.url, "");
        assert_eq!(new_video.notes, None);
        assert!(new_video.validate_fields().is_err());
    }

    #[test]
    fn test_video_response_has_embed_url() {
        let response = VideoResponse::from(test_video(7, "XYZ", None));
        assert_eq!(response.id, 7);
        assert_eq!(response.video_id, "vid7");
        assert_eq!(response.embed_url, "https://www.youtube.com/embed/vid7");
    }

    #[test]
    fn test_display_truncates_notes() {
        let long_notes = "a".repeat(250);
        let video = test_video(3, "AAA", Some(&long_notes));
        let summary = video.to_string();
        assert!(summary.starts_with("ID: 3, Name: AAA, URL: https://www.youtube.com/watch?v=vid3, Video ID: vid3, Notes: "));
        assert!(summary.ends_with(&"a".repeat(200)));
        assert!(!summary.contains(&"a".repeat(201)));

        let no_notes = test_video(4, "BBB", None).to_string();
        assert!(no_notes.ends_with("Notes: "));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "No videos");
        assert_eq!(count_label(1), "1 Video");
        assert_eq!(count_label(2), "2 Videos");
        assert_eq!(count_label(12), "12 Videos");
    }

    #[test]
    fn test_list_response_counts_videos() {
        let response = VideoListResponse::new(
            vec![test_video(1, "XYZ", None), test_video(2, "ZXY", None)],
            Some("x".to_string()),
        );
        assert_eq!(response.count, 2);
        assert_eq!(response.count_label, "2 Videos");
        assert_eq!(response.videos.len(), 2);
        assert_eq!(response.search_term.as_deref(), Some("x"));

        let empty = VideoListResponse::new(Vec::new(), None);
        assert_eq!(empty.count_label, "No videos");
        let json = serde_json::to_value(&empty).unwrap();
        assert!(json.get("search_term").is_none());
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_video_query_keeps_last_search_term() {
        let query = VideoQuery::from_pairs(pairs(&[
            ("search_term", "a"),
            ("page", "2"),
            ("search_term", "b"),
        ]));
        assert_eq!(query.search_term(), Some("b"));
    }

    #[test]
    fn test_video_query_ignores_blank_term() {
        let query = VideoQuery::from_pairs(pairs(&[("search_term", "   ")]));
        assert_eq!(query.search_term(), None);
        assert_eq!(VideoQuery::from_pairs(Vec::new()).search_term(), None);
    }

    #[test]
    fn test_video_query_trims_term() {
        let query = VideoQuery::from_pairs(pairs(&[("search_term", "  chiefs ")]));
        assert_eq!(query.search_term(), Some("chiefs"));
    }
}

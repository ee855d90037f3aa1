//! YouTube URL validation and video identifier extraction.
//!
//! Only watch-page URLs (`https://www.youtube.com/watch?...`) are accepted. The
//! identifier is the first non-empty `v` query parameter. The query string is
//! parsed strictly: a field without `=` rejects the whole URL.

use percent_encoding::percent_decode_str;

/// Every accepted URL starts with this literal prefix.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch";

/// Base of the player URL used to display a stored video.
pub const EMBED_URL_BASE: &str = "https://www.youtube.com/embed/";

/// Width of the `videos.video_id` column.
pub const MAX_VIDEO_ID_LENGTH: usize = 40;

/// Query parameter holding the video identifier.
const VIDEO_ID_PARAM: &str = "v";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoUrlError {
    #[error("Not a Youtube url {0}")]
    NotYoutube(String),

    #[error("Invalid Youtube URL {0}")]
    MissingQuery(String),

    #[error("Invalid Youtube URL, malformed query string {0}")]
    MalformedQuery(String),

    #[error("Invalid Youtube URL, missing parameters {0}")]
    MissingVideoId(String),

    #[error("Invalid Youtube URL, video id longer than {max} characters {url}")]
    VideoIdTooLong { url: String, max: usize },
}

impl VideoUrlError {
    /// The rejected URL, as submitted.
    pub fn url(&self) -> &str {
        match self {
            VideoUrlError::NotYoutube(url)
            | VideoUrlError::MissingQuery(url)
            | VideoUrlError::MalformedQuery(url)
            | VideoUrlError::MissingVideoId(url) => url,
            VideoUrlError::VideoIdTooLong { url, .. } => url,
        }
    }
}

/// Validate a YouTube watch URL and return its video identifier.
pub fn extract_video_id(url: &str) -> Result<String, VideoUrlError> {
    if !url.starts_with(WATCH_URL_PREFIX) {
        return Err(VideoUrlError::NotYoutube(url.to_string()));
    }

    let query = query_string(url)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| VideoUrlError::MissingQuery(url.to_string()))?;

    let params =
        parse_query_strict(query).ok_or_else(|| VideoUrlError::MalformedQuery(url.to_string()))?;

    let video_id = params
        .into_iter()
        .find(|(key, _)| key == VIDEO_ID_PARAM)
        .map(|(_, value)| value)
        .ok_or_else(|| VideoUrlError::MissingVideoId(url.to_string()))?;

    if video_id.chars().count() > MAX_VIDEO_ID_LENGTH {
        return Err(VideoUrlError::VideoIdTooLong {
            url: url.to_string(),
            max: MAX_VIDEO_ID_LENGTH,
        });
    }

    Ok(video_id)
}

/// Player URL for a stored video identifier.
pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_URL_BASE, video_id)
}

/// Text between the first `?` and the fragment, if there is a `?` at all.
fn query_string(url: &str) -> Option<&str> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    without_fragment.split_once('?').map(|(_, query)| query)
}

/// Parse `a=1&b=2` into decoded pairs, dropping fields with blank values.
/// Returns `None` when any field lacks `=`.
fn parse_query_strict(query: &str) -> Option<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for field in query.split('&') {
        let (name, value) = field.split_once('=')?;
        if value.is_empty() {
            continue;
        }
        pairs.push((form_decode(name), form_decode(value)));
    }
    Some(pairs)
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_from_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=LluAI0f0N9s").unwrap();
        assert_eq!(id, "LluAI0f0N9s");
    }

    #[test]
    fn test_extracts_id_when_not_first_parameter() {
        let id =
            extract_video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=42s")
                .unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_first_v_parameter_wins() {
        let id = extract_video_id("https://www.youtube.com/watch?v=first&v=second").unwrap();
        assert_eq!(id, "first");
    }

    #[test]
    fn test_blank_v_is_skipped_in_favour_of_later_value() {
        let id = extract_video_id("https://www.youtube.com/watch?v=&v=abc").unwrap();
        assert_eq!(id, "abc");
    }

    #[test]
    fn test_fragment_is_ignored() {
        let id = extract_video_id("https://www.youtube.com/watch?v=abc123#t=30").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn test_values_are_form_decoded() {
        let id = extract_video_id("https://www.youtube.com/watch?v=a%2Db+c").unwrap();
        assert_eq!(id, "a-b c");
    }

    #[test]
    fn test_rejects_urls_from_other_hosts() {
        for url in [
            "https://www.github.com",
            "https://www.minneapolis.edu",
            "https://www.minneapolis.edu?v=21345",
            "http://www.youtube.com/watch?v=abc",
            "https://youtu.be/abc",
        ] {
            assert_eq!(
                extract_video_id(url),
                Err(VideoUrlError::NotYoutube(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn test_rejects_missing_or_empty_query() {
        for url in [
            "https://www.youtube.com/watch",
            "https://www.youtube.com/watch?",
            "https://www.youtube.com/watch#v=abc",
        ] {
            assert_eq!(
                extract_video_id(url),
                Err(VideoUrlError::MissingQuery(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn test_rejects_missing_video_id() {
        for url in [
            "https://www.youtube.com/watch?abc=123",
            "https://www.youtube.com/watch?v=",
            "https://www.youtube.com/watch?V=abc",
        ] {
            assert_eq!(
                extract_video_id(url),
                Err(VideoUrlError::MissingVideoId(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn test_rejects_fields_without_equals_sign() {
        for url in [
            "https://www.youtube.com/watch?abc",
            "https://www.youtube.com/watch?v=abc&feature",
            "https://www.youtube.com/watch?v=abc&",
        ] {
            assert_eq!(
                extract_video_id(url),
                Err(VideoUrlError::MalformedQuery(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn test_rejects_id_wider_than_column() {
        let url = format!("https://www.youtube.com/watch?v={}", "x".repeat(41));
        let err = extract_video_id(&url).unwrap_err();
        assert!(matches!(err, VideoUrlError::VideoIdTooLong { max: 40, .. }));
        assert_eq!(err.url(), url);

        let url = format!("https://www.youtube.com/watch?v={}", "x".repeat(40));
        assert_eq!(extract_video_id(&url).unwrap().len(), 40);
    }

    #[test]
    fn test_error_messages_include_url() {
        let err = extract_video_id("https://www.github.com").unwrap_err();
        assert_eq!(err.to_string(), "Not a Youtube url https://www.github.com");

        let err = extract_video_id("https://www.youtube.com/watch?abc=123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Youtube URL, missing parameters https://www.youtube.com/watch?abc=123"
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("LluAI0f0N9s"),
            "https://www.youtube.com/embed/LluAI0f0N9s"
        );
    }
}

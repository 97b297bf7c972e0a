use crate::objects::{ContentKind, ContentRecord, Platform};
use chrono::{DateTime, Datelike};
use serde::Deserialize;

pub const API_BASE: &str = "https://www.googleapis.com/youtube/v3/search";

/// Canned queries for the highlights rail; results are concatenated in this
/// order and capped afterwards.
pub const HIGHLIGHT_QUERIES: [&str; 4] = [
    "movie trailers 2024",
    "netflix series 2024",
    "popular movies",
    "tv shows 2024",
];
pub const RESULTS_PER_QUERY: usize = 5;
pub const HIGHLIGHT_CAP: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: VideoRef,
    pub snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoRef {
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub title: String,
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub channel_title: Option<String>,
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

pub fn search_query_url(api_key: &str, query: &str) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());

    serializer.append_pair("part", "snippet");
    serializer.append_pair("maxResults", &RESULTS_PER_QUERY.to_string());
    serializer.append_pair("q", query);
    serializer.append_pair("type", "video");
    serializer.append_pair("key", api_key);

    format!("{}?{}", API_BASE, serializer.finish())
}

/// Items without a video id cannot be keyed or routed and are skipped.
pub fn map_item(item: &SearchItem) -> Option<ContentRecord> {
    let video_id = item.id.video_id.as_ref()?;
    let snippet = &item.snippet;

    Some(ContentRecord {
        id: format!("youtube-{}", video_id),
        title: snippet.title.clone(),
        platform: Platform::Youtube,
        kind: ContentKind::Video,
        rating: String::from("4.5"),
        year: snippet
            .published_at
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
            .map(|date| date.year()),
        genre: String::from("Entertainment"),
        image: snippet
            .thumbnails
            .high
            .as_ref()
            .or(snippet.thumbnails.default.as_ref())
            .map(|thumbnail| thumbnail.url.clone())
            .unwrap_or_else(|| ContentRecord::placeholder_image(&snippet.title)),
        overview: snippet.description.clone(),
        provider_item_id: Some(video_id.clone()),
        channel_title: snippet.channel_title.clone(),
        url: None,
        size: None,
        last_modified: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: serde_json::Value) -> SearchItem {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn search_items_map_to_video_records() {
        let record = map_item(&item(serde_json::json!({
            "id": {"videoId": "abc123"},
            "snippet": {
                "title": "Official Trailer",
                "publishedAt": "2024-02-01T10:00:00Z",
                "description": "Two minutes of footage.",
                "channelTitle": "Trailer Channel",
                "thumbnails": {
                    "default": {"url": "https://img.example/default.jpg"},
                    "high": {"url": "https://img.example/high.jpg"}
                }
            }
        })))
        .unwrap();

        assert_eq!(record.id, "youtube-abc123");
        assert_eq!(record.platform, Platform::Youtube);
        assert_eq!(record.kind, ContentKind::Video);
        assert_eq!(record.year, Some(2024));
        assert_eq!(record.image, "https://img.example/high.jpg");
        assert_eq!(record.channel_title.as_deref(), Some("Trailer Channel"));
        assert_eq!(record.provider_item_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_high_thumbnail_falls_back_to_default() {
        let record = map_item(&item(serde_json::json!({
            "id": {"videoId": "abc"},
            "snippet": {
                "title": "Clip",
                "thumbnails": {"default": {"url": "https://img.example/default.jpg"}}
            }
        })))
        .unwrap();

        assert_eq!(record.image, "https://img.example/default.jpg");
    }

    #[test]
    fn items_without_a_video_id_are_skipped() {
        assert!(map_item(&item(serde_json::json!({
            "id": {},
            "snippet": {"title": "Channel result"}
        })))
        .is_none());
    }

    #[test]
    fn query_url_is_snippet_scoped_and_bounded() {
        let url = search_query_url("secret", "movie trailers 2024");

        assert!(url.starts_with(API_BASE));
        assert!(url.contains("part=snippet"));
        assert!(url.contains("maxResults=5"));
        assert!(url.contains("q=movie+trailers+2024"));
        assert!(url.contains("key=secret"));
    }
}

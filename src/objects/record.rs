use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Origin of a content record. Drives tile theming and playback routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Netflix,
    Youtube,
    Prime,
    Disney,
    Hbo,
    /// Origin of dedicated-search results; has no storefront of its own.
    Tmdb,
    Local,
}

impl Platform {
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Netflix => "netflix",
            Platform::Youtube => "youtube",
            Platform::Prime => "prime",
            Platform::Disney => "disney",
            Platform::Hbo => "hbo",
            Platform::Tmdb => "tmdb",
            Platform::Local => "local",
        }
    }

    /// Platforms the user can toggle in the settings panel.
    pub fn selectable() -> [Platform; 6] {
        [
            Platform::Netflix,
            Platform::Youtube,
            Platform::Prime,
            Platform::Disney,
            Platform::Hbo,
            Platform::Local,
        ]
    }

    pub fn theme_class(&self) -> &'static str {
        match self {
            Platform::Netflix => "is-danger",
            Platform::Youtube => "is-warning",
            Platform::Prime => "is-info",
            Platform::Disney => "is-link",
            Platform::Hbo => "is-primary",
            Platform::Tmdb => "is-success",
            Platform::Local => "is-dark",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
    Video,
}

/// The unit of display. Ids are `{platform}-{providerId}` to avoid collisions
/// across sources; local-file ids carry a random component and are
/// session-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub platform: Platform,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub rating: String,
    pub year: Option<i32>,
    pub genre: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    /// Blob object URL of a local file; valid for the current session only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl ContentRecord {
    pub fn year_label(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => String::from("N/A"),
        }
    }

    /// Case-insensitive substring match over title, genre and channel title.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.title.to_lowercase().contains(&query)
            || self.genre.to_lowercase().contains(&query)
            || self
                .channel_title
                .as_ref()
                .map(|c| c.to_lowercase().contains(&query))
                .unwrap_or(false)
    }

    /// Generated poster stand-in carrying the URL-encoded title.
    pub fn placeholder_image(title: &str) -> String {
        format!(
            "https://via.placeholder.com/300x450/333/white?text={}",
            encode_component(title)
        )
    }
}

pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genre: &str, channel: Option<&str>) -> ContentRecord {
        ContentRecord {
            id: String::from("netflix-1"),
            title: String::from(title),
            platform: Platform::Netflix,
            kind: ContentKind::Movie,
            rating: String::from("7.5"),
            year: Some(2021),
            genre: String::from(genre),
            image: String::new(),
            overview: None,
            provider_item_id: None,
            channel_title: channel.map(String::from),
            url: None,
            size: None,
            last_modified: None,
        }
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        assert!(record("The Crown", "Drama", None).matches_query("crown"));
        assert!(record("The Crown", "Drama", None).matches_query("CROWN"));
        assert!(!record("The Crown", "Drama", None).matches_query("heist"));
    }

    #[test]
    fn query_matches_genre_and_channel_title() {
        assert!(record("Clip", "Entertainment", None).matches_query("entertain"));
        assert!(record("Clip", "Drama", Some("Movie Trailers HQ")).matches_query("trailers"));
    }

    #[test]
    fn placeholder_embeds_encoded_title() {
        let url = ContentRecord::placeholder_image("Blade Runner");

        assert!(url.contains("text=Blade+Runner"));
    }

    #[test]
    fn year_label_falls_back_to_na() {
        let mut rec = record("The Crown", "Drama", None);

        assert_eq!(rec.year_label(), "2021");
        rec.year = None;
        assert_eq!(rec.year_label(), "N/A");
    }

    #[test]
    fn record_round_trips_with_camel_case_keys() {
        let rec = record("The Crown", "Drama", Some("A Channel"));
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["type"], "movie");
        assert_eq!(json["channelTitle"], "A Channel");
        assert!(json.get("providerItemId").is_none());
    }
}

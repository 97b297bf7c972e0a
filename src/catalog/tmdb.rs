use crate::objects::{ContentKind, ContentRecord, Platform};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

pub const API_BASE: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Listing endpoints consumed from the catalog, with the platform each one is
/// attributed to on the home view.
pub const CATALOG_ENDPOINTS: [(&str, Platform); 3] = [
    ("trending/all/week", Platform::Netflix),
    ("movie/popular", Platform::Prime),
    ("tv/top_rated", Platform::Disney),
];

#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<CatalogEntry>,
}

/// One row of a TMDB listing; movies carry `title`/`release_date`, series
/// carry `name`/`first_air_date`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

pub fn catalog_url(endpoint: &str, api_key: &str) -> String {
    format!(
        "{}/{}?{}",
        API_BASE,
        endpoint,
        encode_query_pairs(&[("api_key", api_key), ("language", "en-US"), ("page", "1")])
    )
}

pub fn search_url(api_key: &str, query: &str) -> String {
    format!(
        "{}/search/multi?{}",
        API_BASE,
        encode_query_pairs(&[
            ("api_key", api_key),
            ("language", "en-US"),
            ("query", query),
            ("page", "1"),
            ("include_adult", "false"),
        ])
    )
}

pub fn map_entry(entry: &CatalogEntry, platform: Platform) -> ContentRecord {
    let title = display_title(entry);

    ContentRecord {
        id: format!("{}-{}", platform.slug(), entry.id),
        image: entry
            .poster_path
            .as_ref()
            .map(|path| format!("{}{}", IMAGE_BASE, path))
            .unwrap_or_else(|| ContentRecord::placeholder_image(&title)),
        title,
        platform,
        kind: entry_kind(entry),
        rating: format_rating(entry.vote_average),
        year: parse_year(entry),
        genre: String::from("Drama"),
        overview: entry.overview.clone(),
        provider_item_id: Some(entry.id.to_string()),
        channel_title: None,
        url: None,
        size: None,
        last_modified: None,
    }
}

/// Dedicated-search results: only movies and series that carry a poster are
/// kept, which is stricter than the client-side substring filter.
pub fn map_search_results(page: &CatalogPage) -> Vec<ContentRecord> {
    page.results
        .iter()
        .filter(|entry| {
            matches!(entry.media_type.as_deref(), Some("movie") | Some("tv"))
                && entry.poster_path.is_some()
        })
        .map(|entry| {
            let mut record = map_entry(entry, Platform::Tmdb);

            record.id = format!("search-{}", entry.id);
            record.genre = String::from("Search Result");
            record
        })
        .collect()
}

fn display_title(entry: &CatalogEntry) -> String {
    entry
        .title
        .clone()
        .or_else(|| entry.name.clone())
        .unwrap_or_default()
}

fn entry_kind(entry: &CatalogEntry) -> ContentKind {
    match entry.media_type.as_deref() {
        Some("movie") => ContentKind::Movie,
        Some("tv") => ContentKind::Series,
        _ => match entry.title.is_some() {
            true => ContentKind::Movie,
            false => ContentKind::Series,
        },
    }
}

fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(average) => format!("{:.1}", average),
        None => String::from("N/A"),
    }
}

/// A date that does not parse yields no year, never a default one.
fn parse_year(entry: &CatalogEntry) -> Option<i32> {
    entry
        .release_date
        .as_deref()
        .or(entry.first_air_date.as_deref())
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|date| date.year())
}

fn encode_query_pairs(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());

    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }

    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: serde_json::Value) -> CatalogEntry {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn movie_fields_map_directly() {
        let record = map_entry(
            &entry(serde_json::json!({
                "id": 603,
                "title": "The Matrix",
                "media_type": "movie",
                "vote_average": 8.22,
                "release_date": "1999-03-30",
                "poster_path": "/matrix.jpg",
                "overview": "A hacker learns the truth."
            })),
            Platform::Netflix,
        );

        assert_eq!(record.id, "netflix-603");
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.kind, ContentKind::Movie);
        assert_eq!(record.rating, "8.2");
        assert_eq!(record.year, Some(1999));
        assert_eq!(record.image, format!("{}/matrix.jpg", IMAGE_BASE));
        assert_eq!(record.provider_item_id.as_deref(), Some("603"));
    }

    #[test]
    fn series_fall_back_to_name_and_first_air_date() {
        let record = map_entry(
            &entry(serde_json::json!({
                "id": 1399,
                "name": "Game of Thrones",
                "first_air_date": "2011-04-17",
                "poster_path": "/got.jpg"
            })),
            Platform::Disney,
        );

        assert_eq!(record.title, "Game of Thrones");
        assert_eq!(record.kind, ContentKind::Series);
        assert_eq!(record.year, Some(2011));
    }

    #[test]
    fn unparseable_dates_and_missing_votes_become_na() {
        let record = map_entry(
            &entry(serde_json::json!({
                "id": 1,
                "title": "Obscure",
                "release_date": ""
            })),
            Platform::Prime,
        );

        assert_eq!(record.year, None);
        assert_eq!(record.year_label(), "N/A");
        assert_eq!(record.rating, "N/A");
    }

    #[test]
    fn missing_poster_yields_a_placeholder_with_the_encoded_title() {
        let record = map_entry(
            &entry(serde_json::json!({"id": 2, "title": "Lost Tape"})),
            Platform::Netflix,
        );

        assert!(record.image.starts_with("https://via.placeholder.com/"));
        assert!(record.image.contains("Lost+Tape"));
    }

    #[test]
    fn search_results_keep_only_movies_and_series_with_posters() {
        let page: CatalogPage = serde_json::from_value(serde_json::json!({
            "results": [
                {"id": 1, "title": "Kept", "media_type": "movie", "poster_path": "/a.jpg"},
                {"id": 2, "name": "Also Kept", "media_type": "tv", "poster_path": "/b.jpg"},
                {"id": 3, "title": "No Poster", "media_type": "movie"},
                {"id": 4, "name": "A Person", "media_type": "person", "poster_path": "/c.jpg"}
            ]
        }))
        .unwrap();

        let records = map_search_results(&page);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "search-1");
        assert_eq!(records[0].platform, Platform::Tmdb);
        assert_eq!(records[0].genre, "Search Result");
        assert_eq!(records[1].kind, ContentKind::Series);
    }

    #[test]
    fn urls_carry_the_key_and_encoded_query() {
        let url = search_url("secret", "blade runner");

        assert!(url.starts_with(API_BASE));
        assert!(url.contains("api_key=secret"));
        assert!(url.contains("query=blade+runner"));
        assert!(url.contains("include_adult=false"));
        assert!(catalog_url("movie/popular", "secret").contains("/movie/popular?"));
    }
}

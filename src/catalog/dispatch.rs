use crate::objects::{encode_component, ContentRecord, Platform};

/// Routing decision for a selected record. Local files open the embedded
/// player; everything else opens an external tab.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchAction {
    OpenPlayer(ContentRecord),
    OpenTab(String),
}

pub fn dispatch(record: &ContentRecord) -> DispatchAction {
    if record.platform == Platform::Local {
        return DispatchAction::OpenPlayer(record.clone());
    }

    if record.platform == Platform::Youtube {
        if let Some(video_id) = &record.provider_item_id {
            return DispatchAction::OpenTab(watch_url(video_id));
        }
    }

    DispatchAction::OpenTab(search_url(record.platform, &record.title))
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Search page of the record's own platform. Records without a storefront
/// (dedicated-search results, local files) search the metadata site.
pub fn search_url(platform: Platform, title: &str) -> String {
    let query = encode_component(title);

    match platform {
        Platform::Netflix => format!("https://www.netflix.com/search?q={}", query),
        Platform::Prime => format!(
            "https://www.primevideo.com/search/ref=atv_nb_sr?phrase={}",
            query
        ),
        Platform::Disney => format!("https://www.disneyplus.com/search?q={}", query),
        Platform::Hbo => format!("https://play.max.com/search?q={}", query),
        Platform::Youtube => format!("https://www.youtube.com/results?search_query={}", query),
        Platform::Tmdb | Platform::Local => {
            format!("https://www.themoviedb.org/search?query={}", query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ContentKind;

    fn record(platform: Platform, provider_item_id: Option<&str>) -> ContentRecord {
        ContentRecord {
            id: String::from("x"),
            title: String::from("Blade Runner"),
            platform,
            kind: ContentKind::Movie,
            rating: String::from("N/A"),
            year: None,
            genre: String::from("Drama"),
            image: String::new(),
            overview: None,
            provider_item_id: provider_item_id.map(String::from),
            channel_title: None,
            url: Some(String::from("blob:town/abc")),
            size: None,
            last_modified: None,
        }
    }

    #[test]
    fn local_records_open_the_embedded_player() {
        match dispatch(&record(Platform::Local, None)) {
            DispatchAction::OpenPlayer(rec) => assert_eq!(rec.url.as_deref(), Some("blob:town/abc")),
            DispatchAction::OpenTab(_) => panic!("local records must not open a tab"),
        }
    }

    #[test]
    fn youtube_records_with_a_video_id_open_the_watch_page() {
        assert_eq!(
            dispatch(&record(Platform::Youtube, Some("abc123"))),
            DispatchAction::OpenTab(String::from("https://www.youtube.com/watch?v=abc123"))
        );
    }

    #[test]
    fn youtube_records_without_a_video_id_fall_back_to_search() {
        assert_eq!(
            dispatch(&record(Platform::Youtube, None)),
            DispatchAction::OpenTab(String::from(
                "https://www.youtube.com/results?search_query=Blade+Runner"
            ))
        );
    }

    #[test]
    fn remote_records_open_their_platform_search_page() {
        for (platform, host) in [
            (Platform::Netflix, "www.netflix.com"),
            (Platform::Prime, "www.primevideo.com"),
            (Platform::Disney, "www.disneyplus.com"),
            (Platform::Hbo, "play.max.com"),
            (Platform::Tmdb, "www.themoviedb.org"),
        ] {
            match dispatch(&record(platform, None)) {
                DispatchAction::OpenTab(url) => {
                    assert!(url.contains(host), "{} routed to {}", platform, url);
                    assert!(url.contains("Blade+Runner"));
                }
                DispatchAction::OpenPlayer(_) => panic!("remote records must open a tab"),
            }
        }
    }
}

use super::tmdb;
use crate::objects::{Credentials, Platform};
use serde::{Deserialize, Serialize};

/// The four remote rails of the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeSection {
    Trending,
    NewReleases,
    TopRated,
    Highlights,
}

/// Pull decision for one rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPull {
    /// Credential absent: the rail settles empty without a network call.
    Skip,
    Catalog { url: String, platform: Platform },
    Highlights { api_key: String },
}

/// Decides, per rail, whether and what to pull for the given credentials.
pub fn plan_home_pull(credentials: &Credentials) -> [(HomeSection, SectionPull); 4] {
    let catalog = |index: usize| {
        let (endpoint, platform) = tmdb::CATALOG_ENDPOINTS[index];

        match credentials.tmdb() {
            Some(api_key) => SectionPull::Catalog {
                url: tmdb::catalog_url(endpoint, api_key),
                platform,
            },
            None => SectionPull::Skip,
        }
    };
    let highlights = match credentials.youtube() {
        Some(api_key) => SectionPull::Highlights {
            api_key: api_key.to_string(),
        },
        None => SectionPull::Skip,
    };

    [
        (HomeSection::Trending, catalog(0)),
        (HomeSection::NewReleases, catalog(1)),
        (HomeSection::TopRated, catalog(2)),
        (HomeSection::Highlights, highlights),
    ]
}

/// Validates a dedicated-search submission. Both rejections are user-input
/// errors and are surfaced as blocking notifications, never dropped.
pub fn validate_search(
    credentials: &Credentials,
    query: &str,
) -> Result<(String, String), &'static str> {
    let query = query.trim();

    if query.is_empty() {
        return Err("enter a search term before submitting");
    }

    match credentials.tmdb() {
        Some(api_key) => Ok((api_key.to_string(), query.to_string())),
        None => Err("a TMDB API key is required for search; add one in settings"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(tmdb: Option<&str>, youtube: Option<&str>) -> Credentials {
        Credentials {
            tmdb_api_key: tmdb.map(String::from),
            youtube_api_key: youtube.map(String::from),
        }
    }

    #[test]
    fn absent_credentials_plan_no_network_calls() {
        for (_, pull) in plan_home_pull(&Credentials::default()) {
            assert_eq!(pull, SectionPull::Skip);
        }
    }

    #[test]
    fn a_tmdb_key_pulls_only_the_three_catalog_rails() {
        let pulls = plan_home_pull(&creds(Some("secret"), None));

        match &pulls[0] {
            (HomeSection::Trending, SectionPull::Catalog { url, platform }) => {
                assert!(url.contains("trending/all/week"));
                assert!(url.contains("api_key=secret"));
                assert_eq!(*platform, Platform::Netflix);
            }
            other => panic!("unexpected pull: {:?}", other),
        }
        match &pulls[1] {
            (HomeSection::NewReleases, SectionPull::Catalog { url, platform }) => {
                assert!(url.contains("movie/popular"));
                assert_eq!(*platform, Platform::Prime);
            }
            other => panic!("unexpected pull: {:?}", other),
        }
        match &pulls[2] {
            (HomeSection::TopRated, SectionPull::Catalog { url, platform }) => {
                assert!(url.contains("tv/top_rated"));
                assert_eq!(*platform, Platform::Disney);
            }
            other => panic!("unexpected pull: {:?}", other),
        }
        assert_eq!(pulls[3], (HomeSection::Highlights, SectionPull::Skip));
    }

    #[test]
    fn a_youtube_key_pulls_only_the_highlights_rail() {
        let pulls = plan_home_pull(&creds(None, Some("yt-secret")));

        assert_eq!(pulls[0].1, SectionPull::Skip);
        assert_eq!(pulls[1].1, SectionPull::Skip);
        assert_eq!(pulls[2].1, SectionPull::Skip);
        assert_eq!(
            pulls[3],
            (
                HomeSection::Highlights,
                SectionPull::Highlights {
                    api_key: String::from("yt-secret")
                }
            )
        );
    }

    #[test]
    fn blank_search_submissions_are_rejected() {
        assert!(validate_search(&creds(Some("secret"), None), "   ").is_err());
        assert!(validate_search(&creds(Some("secret"), None), "").is_err());
    }

    #[test]
    fn search_requires_a_tmdb_key() {
        assert!(validate_search(&creds(None, Some("yt-secret")), "blade runner").is_err());
    }

    #[test]
    fn valid_searches_carry_the_key_and_the_trimmed_query() {
        assert_eq!(
            validate_search(&creds(Some("secret"), None), "  blade runner "),
            Ok((String::from("secret"), String::from("blade runner")))
        );
    }
}

use super::Platform;
use serde::{Deserialize, Serialize};

/// Persisted storage entry names. The values under `keys::TMDB_API_KEY` and
/// `keys::YOUTUBE_API_KEY` are raw strings; everything else is JSON.
pub mod keys {
    pub const CONTINUE_WATCHING: &str = "continueWatching";
    pub const VIEWING_STATS: &str = "viewingStats";
    pub const SELECTED_PLATFORMS: &str = "selectedPlatforms";
    pub const TMDB_API_KEY: &str = "tmdbApiKey";
    pub const YOUTUBE_API_KEY: &str = "youtubeApiKey";
}

/// Per-platform inclusion toggles for the aggregated views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSelection {
    pub netflix: bool,
    pub youtube: bool,
    pub prime: bool,
    pub disney: bool,
    pub hbo: bool,
    pub local: bool,
}

impl Default for PlatformSelection {
    fn default() -> Self {
        Self {
            netflix: true,
            youtube: true,
            prime: true,
            disney: true,
            hbo: true,
            local: true,
        }
    }
}

impl PlatformSelection {
    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::Netflix => self.netflix,
            Platform::Youtube => self.youtube,
            Platform::Prime => self.prime,
            Platform::Disney => self.disney,
            Platform::Hbo => self.hbo,
            Platform::Local => self.local,
            // dedicated-search results are not platform-gated
            Platform::Tmdb => true,
        }
    }

    pub fn set_enabled(&mut self, platform: Platform, enabled: bool) {
        match platform {
            Platform::Netflix => self.netflix = enabled,
            Platform::Youtube => self.youtube = enabled,
            Platform::Prime => self.prime = enabled,
            Platform::Disney => self.disney = enabled,
            Platform::Hbo => self.hbo = enabled,
            Platform::Local => self.local = enabled,
            Platform::Tmdb => {}
        }
    }
}

/// API keys for the two metadata services. A missing key disables the
/// corresponding fetcher without raising an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    pub tmdb_api_key: Option<String>,
    pub youtube_api_key: Option<String>,
}

impl Credentials {
    pub fn tmdb(&self) -> Option<&str> {
        self.tmdb_api_key.as_deref()
    }

    pub fn youtube(&self) -> Option<&str> {
        self.youtube_api_key.as_deref()
    }

    pub fn any(&self) -> bool {
        self.tmdb_api_key.is_some() || self.youtube_api_key.is_some()
    }
}

/// Normalizes user key input; whitespace-only input clears the key.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();

    match trimmed.is_empty() {
        true => None,
        false => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_platforms_are_enabled_by_default() {
        let selection = PlatformSelection::default();

        for platform in Platform::selectable() {
            assert!(selection.is_enabled(platform));
        }
    }

    #[test]
    fn toggling_a_platform_only_affects_that_platform() {
        let mut selection = PlatformSelection::default();

        selection.set_enabled(Platform::Disney, false);

        assert!(!selection.is_enabled(Platform::Disney));
        assert!(selection.is_enabled(Platform::Netflix));
        assert!(selection.is_enabled(Platform::Local));
    }

    #[test]
    fn search_results_are_never_platform_gated() {
        let selection = PlatformSelection::default();

        assert!(selection.is_enabled(Platform::Tmdb));
    }

    #[test]
    fn missing_fields_deserialize_as_enabled() {
        let selection: PlatformSelection = serde_json::from_str(r#"{"netflix":false}"#).unwrap();

        assert!(!selection.netflix);
        assert!(selection.hbo);
    }

    #[test]
    fn blank_key_input_clears_the_credential() {
        assert_eq!(non_empty(String::from("  ")), None);
        assert_eq!(non_empty(String::from(" abc ")), Some(String::from("abc")));
    }
}

use crate::objects::{ContentRecord, PlatformSelection};

/// The four remote rails of the home view, filled in as each fetch settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeCatalog {
    pub trending: Vec<ContentRecord>,
    pub new_releases: Vec<ContentRecord>,
    pub top_rated: Vec<ContentRecord>,
    pub highlights: Vec<ContentRecord>,
}

impl HomeCatalog {
    pub fn is_empty(&self) -> bool {
        self.trending.is_empty()
            && self.new_releases.is_empty()
            && self.top_rated.is_empty()
            && self.highlights.is_empty()
    }
}

/// Conjunctive display predicate shared by the aggregated list and the
/// per-section home rails.
pub fn is_visible(record: &ContentRecord, selection: &PlatformSelection, query: &str) -> bool {
    selection.is_enabled(record.platform) && (query.is_empty() || record.matches_query(query))
}

/// Merges the catalog rails and the local files in fixed order (trending,
/// new releases, top rated, local) and applies the display predicate. No
/// re-ranking; the catalog endpoints' curation order is preserved.
pub fn aggregate(
    catalog: &HomeCatalog,
    local_files: &[ContentRecord],
    selection: &PlatformSelection,
    query: &str,
) -> Vec<ContentRecord> {
    catalog
        .trending
        .iter()
        .chain(catalog.new_releases.iter())
        .chain(catalog.top_rated.iter())
        .chain(local_files.iter())
        .filter(|record| is_visible(record, selection, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ContentKind, Platform};

    fn record(id: &str, title: &str, platform: Platform) -> ContentRecord {
        ContentRecord {
            id: String::from(id),
            title: String::from(title),
            platform,
            kind: ContentKind::Movie,
            rating: String::from("N/A"),
            year: None,
            genre: String::from("Drama"),
            image: String::new(),
            overview: None,
            provider_item_id: None,
            channel_title: None,
            url: None,
            size: None,
            last_modified: None,
        }
    }

    fn catalog() -> HomeCatalog {
        HomeCatalog {
            trending: vec![record("netflix-1", "The Crown", Platform::Netflix)],
            new_releases: vec![record("prime-2", "Heat", Platform::Prime)],
            top_rated: vec![record("disney-3", "Loki", Platform::Disney)],
            highlights: vec![record("youtube-4", "Trailer", Platform::Youtube)],
        }
    }

    #[test]
    fn disabled_platforms_are_excluded() {
        let mut selection = PlatformSelection::default();

        selection.set_enabled(Platform::Prime, false);

        let records = aggregate(&catalog(), &[], &selection, "");

        assert!(records.iter().all(|r| r.platform != Platform::Prime));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn concatenation_order_is_preserved() {
        let local = [record("local-5", "movie", Platform::Local)];
        let records = aggregate(&catalog(), &local, &PlatformSelection::default(), "");

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, ["netflix-1", "prime-2", "disney-3", "local-5"]);
    }

    #[test]
    fn highlights_are_not_part_of_the_aggregate() {
        let records = aggregate(&catalog(), &[], &PlatformSelection::default(), "");

        assert!(records.iter().all(|r| r.platform != Platform::Youtube));
    }

    #[test]
    fn search_filter_is_case_insensitive_and_conjunctive() {
        let mut selection = PlatformSelection::default();
        let records = aggregate(&catalog(), &[], &selection, "crown");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "netflix-1");

        selection.set_enabled(Platform::Netflix, false);
        assert!(aggregate(&catalog(), &[], &selection, "crown").is_empty());
    }

    #[test]
    fn empty_query_matches_everything_enabled() {
        let records = aggregate(&catalog(), &[], &PlatformSelection::default(), "");

        assert_eq!(records.len(), 3);
    }

    #[test]
    fn tmdb_only_scenario_contains_the_three_catalog_rails() {
        // video-share key absent: highlights stay empty, the rest aggregate.
        let mut sections = catalog();

        sections.highlights.clear();

        let records = aggregate(&sections, &[], &PlatformSelection::default(), "");

        assert_eq!(records.len(), 3);
        assert!(!sections.is_empty());
    }
}

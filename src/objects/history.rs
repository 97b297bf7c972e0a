use super::{ContentRecord, Platform};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CONTINUE_WATCHING_CAP: usize = 10;
pub const RECENT_WATCHES_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWatchingEntry {
    #[serde(flatten)]
    pub record: ContentRecord,
    pub last_watched_at: DateTime<Utc>,
    pub resume_time_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentWatch {
    pub title: String,
    pub platform: Platform,
    pub watched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewingStats {
    pub total_hours: f64,
    pub recent_watches: Vec<RecentWatch>,
}

/// Moves (or inserts) the record to the front of the continue-watching log
/// and folds it into the viewing stats. `resume_time_seconds` is the absolute
/// playback position, not the delta since the last call; periodic progress
/// updates therefore over-count long sessions. Kept deliberately, the stats
/// page presents the figure as a rough engagement score.
pub fn record_watch(
    continue_watching: &mut Vec<ContinueWatchingEntry>,
    stats: &mut ViewingStats,
    record: &ContentRecord,
    resume_time_seconds: f64,
    now: DateTime<Utc>,
) {
    continue_watching.retain(|entry| entry.record.id != record.id);
    continue_watching.insert(
        0,
        ContinueWatchingEntry {
            record: record.clone(),
            last_watched_at: now,
            resume_time_seconds,
        },
    );
    continue_watching.truncate(CONTINUE_WATCHING_CAP);

    stats.total_hours += resume_time_seconds / 3600.0;
    stats.recent_watches.insert(
        0,
        RecentWatch {
            title: record.title.clone(),
            platform: record.platform,
            watched_at: now,
        },
    );
    stats.recent_watches.truncate(RECENT_WATCHES_CAP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ContentKind;

    fn record(id: &str) -> ContentRecord {
        ContentRecord {
            id: String::from(id),
            title: format!("title {}", id),
            platform: Platform::Netflix,
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

    #[test]
    fn continue_watching_is_capped_at_ten() {
        let mut watching = Vec::new();
        let mut stats = ViewingStats::default();

        for n in 0..25 {
            record_watch(
                &mut watching,
                &mut stats,
                &record(&format!("netflix-{}", n)),
                0.0,
                Utc::now(),
            );
        }

        assert_eq!(watching.len(), CONTINUE_WATCHING_CAP);
        assert_eq!(watching[0].record.id, "netflix-24");
    }

    #[test]
    fn rewatching_moves_the_entry_to_the_front_with_the_new_resume_time() {
        let mut watching = Vec::new();
        let mut stats = ViewingStats::default();

        record_watch(&mut watching, &mut stats, &record("netflix-1"), 30.0, Utc::now());
        record_watch(&mut watching, &mut stats, &record("netflix-2"), 0.0, Utc::now());
        record_watch(&mut watching, &mut stats, &record("netflix-1"), 90.0, Utc::now());

        assert_eq!(watching.len(), 2);
        assert_eq!(watching[0].record.id, "netflix-1");
        assert_eq!(watching[0].resume_time_seconds, 90.0);
    }

    #[test]
    fn recent_watches_are_capped_at_twenty() {
        let mut watching = Vec::new();
        let mut stats = ViewingStats::default();

        for n in 0..30 {
            record_watch(
                &mut watching,
                &mut stats,
                &record(&format!("netflix-{}", n)),
                0.0,
                Utc::now(),
            );
        }

        assert_eq!(stats.recent_watches.len(), RECENT_WATCHES_CAP);
        assert_eq!(stats.recent_watches[0].title, "title netflix-29");
    }

    #[test]
    fn total_hours_accumulates_the_absolute_resume_position() {
        let mut watching = Vec::new();
        let mut stats = ViewingStats::default();

        record_watch(&mut watching, &mut stats, &record("local-1"), 1800.0, Utc::now());
        record_watch(&mut watching, &mut stats, &record("local-1"), 3600.0, Utc::now());

        assert!((stats.total_hours - 1.5).abs() < 1e-9);
    }
}

use crate::objects::{ContentKind, ContentRecord, Platform};
use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "mov"];

pub fn is_video_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();

    VIDEO_EXTENSIONS
        .iter()
        .any(|extension| lower.ends_with(&format!(".{}", extension)))
}

/// File name without its final extension.
pub fn display_title(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// Builds the session-scoped record for a selected file. The id carries a
/// random component and is not stable across sessions; the object URL is
/// owned by the caller and must be revoked when the record is discarded.
pub fn local_record(
    file_name: &str,
    size: u64,
    last_modified: Option<DateTime<Utc>>,
    object_url: String,
) -> ContentRecord {
    let title = display_title(file_name);

    ContentRecord {
        id: format!("local-{}", Uuid::new_v4()),
        image: ContentRecord::placeholder_image(&title),
        title,
        platform: Platform::Local,
        kind: ContentKind::Video,
        rating: String::from("N/A"),
        year: last_modified.map(|date| date.year()),
        genre: String::from("Local"),
        overview: None,
        provider_item_id: None,
        channel_title: None,
        url: Some(object_url),
        size: Some(size),
        last_modified,
    }
}

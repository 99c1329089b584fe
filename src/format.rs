//! Derivation of the notification strings from track metadata.

use crate::track::TrackMetadata;

/// Strings shown in the notification, derived from [`TrackMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayStrings {
    pub title: String,
    pub subtitle: String,
    pub message: String,
}

/// Render the display strings for a track.
///
/// Returns `None` when the status is empty: such records are no-ops and
/// never produce a notification.
pub fn render(meta: &TrackMetadata) -> Option<DisplayStrings> {
    if meta.status.is_empty() {
        return None;
    }

    let mut strings = DisplayStrings {
        title: format!("cmus {}", meta.status),
        ..DisplayStrings::default()
    };

    if is_positive_int(&meta.track_number) {
        strings.subtitle.push_str(&format!("{}) ", meta.track_number));
    }
    if !meta.title.is_empty() {
        strings.subtitle.push_str(&meta.title);
    }

    if !meta.artist.is_empty() {
        strings.message.push_str(&meta.artist);
    }
    if !meta.album.is_empty() {
        strings.message.push('\n');
        strings.message.push_str(&meta.album);
    }
    if is_positive_int(&meta.date) {
        strings.message.push_str(&format!(" ({})", meta.date));
    }

    Some(strings)
}

/// A field counts only when it parses as a strictly positive integer.
fn is_positive_int(value: &str) -> bool {
    value.trim().parse::<i64>().map(|n| n > 0).unwrap_or(false)
}

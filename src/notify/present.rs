use tracing::{debug, warn};

use crate::config::{DisplayMode, IconSettings};
use crate::cover::CoverArt;
use crate::format::DisplayStrings;

use super::sink::{NotificationSink, NotifyError};

/// Fixed identifier for replaceable notifications ("cmus" in ASCII).
pub const REPLACE_ID: u32 = 0x636d_7573;

/// A notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePayload {
    pub summary: String,
    pub body: String,
    /// Identity icon path; empty when the app icon file is missing.
    pub app_icon: String,
    pub image: NoteImage,
}

/// Visual content of the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteImage {
    /// Theme icon name or file path (`image-path` hint).
    Icon(String),
    /// Decoded RGBA image (`image-data` hint).
    Raw {
        width: i32,
        height: i32,
        rowstride: i32,
        data: Vec<u8>,
    },
}

/// Build the deliverable payload for a formatted track.
///
/// The notification service knows only summary + body, so the subtitle and
/// message are folded into the body.
pub fn build_payload(
    strings: &DisplayStrings,
    cover: &CoverArt,
    icons: &IconSettings,
) -> NotePayload {
    let body = [strings.subtitle.as_str(), strings.message.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let image = match cover {
        CoverArt::Embedded(bytes) => decode_cover(bytes).unwrap_or_else(|| {
            warn!("embedded cover could not be decoded, using the fallback icon");
            NoteImage::Icon(icons.local_fallback.clone())
        }),
        CoverArt::Stream => NoteImage::Icon(icons.stream_fallback.clone()),
        CoverArt::None => NoteImage::Icon(icons.local_fallback.clone()),
    };

    NotePayload {
        summary: strings.title.clone(),
        body,
        app_icon: app_icon_path(icons),
        image,
    }
}

/// The app icon is attached whenever the file exists; a missing icon is a
/// warning, never an error.
fn app_icon_path(icons: &IconSettings) -> String {
    if icons.app.is_file() {
        icons.app.display().to_string()
    } else {
        warn!(path = %icons.app.display(), "app icon could not be loaded");
        String::new()
    }
}

fn decode_cover(bytes: &[u8]) -> Option<NoteImage> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(NoteImage::Raw {
        width: width as i32,
        height: height as i32,
        rowstride: width as i32 * 4,
        data: rgba.into_raw(),
    })
}

/// Deliver `payload` according to the configured display mode.
///
/// - `Disabled`: nothing is delivered (callers normally exit earlier).
/// - `Replace`: the latest notification wins, replacing in place.
/// - `ClearThenShow`: the previously shown notification is dismissed first,
///   so at most one from this bridge stays visible.
/// - `Accumulate`: every status change gets its own notification.
pub fn present(
    sink: &mut dyn NotificationSink,
    mode: DisplayMode,
    payload: &NotePayload,
    timeout_ms: i32,
) -> Result<Option<u32>, NotifyError> {
    match mode {
        DisplayMode::Disabled => Ok(None),
        DisplayMode::Replace => sink.deliver(payload, REPLACE_ID, timeout_ms).map(Some),
        DisplayMode::ClearThenShow => {
            // Servers report an error for an unknown id; that is the normal
            // first-run case and not worth surfacing.
            if let Err(err) = sink.dismiss(REPLACE_ID) {
                debug!("no previous notification to dismiss: {err}");
            }
            sink.deliver(payload, REPLACE_ID, timeout_ms).map(Some)
        }
        DisplayMode::Accumulate => sink.deliver(payload, 0, timeout_ms).map(Some),
    }
}

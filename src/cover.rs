//! Cover art resolution for local files and network streams.

use std::path::Path;

use lofty::picture::PictureType;
use lofty::prelude::TaggedFileExt;

use crate::track::TrackMetadata;

/// Sources with one of these prefixes are treated as network streams.
const STREAM_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Suffix appended to the status text for stream sources.
const STREAM_SUFFIX: &str = " (streaming ...)";

/// Artwork resolved for a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverArt {
    /// Nothing found; the presenter falls back to a generic icon.
    None,
    /// Network stream; the presenter substitutes the stream placeholder icon.
    Stream,
    /// Raw image bytes embedded in the file's tag.
    Embedded(Vec<u8>),
}

/// Capability for reading artwork embedded in audio file tags.
///
/// A trait rather than an implicit environment probe: callers pick
/// [`TaggedFileReader`] or [`NoArtwork`] explicitly, and tests can cut tag
/// reading out of the pipeline.
pub trait ArtworkReader {
    fn read_embedded(&self, path: &Path) -> Option<Vec<u8>>;
}

/// Tag-backed reader: prefers the front-cover picture frame, otherwise the
/// first entry of the tag's picture list.
pub struct TaggedFileReader;

impl ArtworkReader for TaggedFileReader {
    fn read_embedded(&self, path: &Path) -> Option<Vec<u8>> {
        let tagged = lofty::read_from_path(path).ok()?;
        let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;
        let pictures = tag.pictures();
        pictures
            .iter()
            .find(|pic| pic.pic_type() == PictureType::CoverFront)
            .or_else(|| pictures.first())
            .map(|pic| pic.data().to_vec())
    }
}

/// Reader used when tag support is unavailable or unwanted.
pub struct NoArtwork;

impl ArtworkReader for NoArtwork {
    fn read_embedded(&self, _path: &Path) -> Option<Vec<u8>> {
        None
    }
}

pub fn is_stream(source: &str) -> bool {
    STREAM_SCHEMES
        .iter()
        .any(|scheme| source.starts_with(scheme))
}

/// Resolve artwork for the parsed track, applying stream adjustments.
///
/// Streams get the placeholder icon, a status suffix, and an artist/title
/// split when the title carries both (`"Artist - Title"`). Local paths go
/// through `reader`; anything unreadable degrades to [`CoverArt::None`].
pub fn resolve(meta: &mut TrackMetadata, reader: &dyn ArtworkReader) -> CoverArt {
    let Some(source) = meta.source.clone() else {
        return CoverArt::None;
    };

    if is_stream(&source) {
        meta.status.push_str(STREAM_SUFFIX);
        // Radio streams often pack "Artist - Title" into the title tag.
        if let Some(i) = meta.title.find(" - ") {
            if i > 0 {
                let artist = meta.title[..i].to_string();
                meta.title = meta.title[i + 3..].to_string();
                meta.artist = artist;
            }
        }
        return CoverArt::Stream;
    }

    match reader.read_embedded(Path::new(&source)) {
        Some(bytes) => CoverArt::Embedded(bytes),
        None => CoverArt::None,
    }
}

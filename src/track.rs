//! Parsing of the key/value metadata cmus passes on the command line.

use thiserror::Error;

/// Track metadata handed over by cmus's `status_display_program` callback.
///
/// Fields keep cmus's own vocabulary; an empty string means the field was
/// not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub status: String,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub track_number: String,
    pub date: String,
    /// Local path or stream URL; `file` wins over `url` when both appear.
    pub source: Option<String>,
}

/// cmus always sends at least `status <value> <key> <value>`-shaped pairs,
/// so anything shorter is a caller bug.
const MIN_TOKENS: usize = 3;

/// Too few tokens followed the program name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid arguments: expected key/value metadata pairs, got {given} tokens")]
pub struct UsageError {
    pub given: usize,
}

/// Parse the alternating key/value tokens into a [`TrackMetadata`] record.
///
/// Unrecognized keys are skipped and a trailing unpaired key is dropped.
/// Repeated keys keep the last value.
pub fn parse(args: &[String]) -> Result<TrackMetadata, UsageError> {
    if args.len() < MIN_TOKENS {
        return Err(UsageError { given: args.len() });
    }

    let mut meta = TrackMetadata::default();
    let mut file: Option<String> = None;
    let mut url: Option<String> = None;

    for pair in args.chunks_exact(2) {
        let (key, value) = (pair[0].as_str(), pair[1].as_str());
        match key {
            "status" => meta.status = value.to_string(),
            "artist" => meta.artist = value.to_string(),
            "album" => meta.album = value.to_string(),
            "title" => meta.title = value.to_string(),
            "tracknumber" => meta.track_number = value.to_string(),
            "date" => meta.date = value.to_string(),
            "file" => file = Some(value.to_string()),
            "url" => url = Some(value.to_string()),
            _ => {}
        }
    }

    meta.source = file.or(url);
    Ok(meta)
}

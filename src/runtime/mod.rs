//! The single-pass pipeline from command-line metadata to a delivered
//! notification.

use std::env;

use tracing::info;

use crate::config::{DisplayMode, Settings};
use crate::cover::{self, ArtworkReader, TaggedFileReader};
use crate::format;
use crate::notify::{self, NotificationSink, NotifyError, SessionBusNotifier};
use crate::track::{self, UsageError};

mod settings;


/// How a run ended; `main` maps this onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A notification was delivered.
    Shown,
    /// Status was empty: the record is a no-op.
    NoStatus,
    /// Display mode 0: notifications are disabled.
    Disabled,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Run the bridge once, end to end.
pub fn run() -> Result<Outcome, RunError> {
    let settings = settings::load_settings();
    if settings.notify.mode == DisplayMode::Disabled {
        return Ok(Outcome::Disabled);
    }

    // No notification service on the session bus means the bridge cannot
    // run at all.
    let mut sink = SessionBusNotifier::connect()?;
    let args: Vec<String> = env::args().skip(1).collect();

    pipeline(&settings, &args, &TaggedFileReader, &mut sink)
}

/// The linear pipeline, parameterized over the artwork and delivery seams.
pub(crate) fn pipeline(
    settings: &Settings,
    args: &[String],
    reader: &dyn ArtworkReader,
    sink: &mut dyn NotificationSink,
) -> Result<Outcome, RunError> {
    if settings.notify.mode == DisplayMode::Disabled {
        return Ok(Outcome::Disabled);
    }

    let mut meta = track::parse(args)?;
    if meta.status.is_empty() {
        info!("empty status, nothing to show");
        return Ok(Outcome::NoStatus);
    }

    let cover = cover::resolve(&mut meta, reader);
    let Some(strings) = format::render(&meta) else {
        return Ok(Outcome::NoStatus);
    };

    let payload = notify::build_payload(&strings, &cover, &settings.icons);
    notify::present(sink, settings.notify.mode, &payload, settings.notify.timeout_ms)?;

    info!(summary = %payload.summary, "notification delivered");
    Ok(Outcome::Shown)
}

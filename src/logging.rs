//! File-backed diagnostics for a process nobody watches interactively.

use std::fs::File;
use std::sync::Mutex;

/// Fixed log destination. The bridge is fire-and-forget, so every
/// invocation starts the file over.
pub const LOG_PATH: &str = "/tmp/cmus-notify.log";

/// Install the global tracing subscriber.
///
/// Records go to [`LOG_PATH`]; when the file cannot be opened, stderr is
/// used instead so diagnostics are never lost. Logging failures must not
/// take the process down.
pub fn init() {
    match File::create(LOG_PATH) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

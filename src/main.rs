use std::process::ExitCode;

use tracing::error;

mod config;
mod cover;
mod format;
mod logging;
mod notify;
mod runtime;
mod track;

use runtime::{Outcome, RunError};

fn main() -> ExitCode {
    logging::init();

    match runtime::run() {
        Ok(Outcome::Disabled) => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ RunError::Usage(_)) => {
            error!("{err}");
            ExitCode::from(1)
        }
        Err(err) => {
            // The next status change retries anyway; runtime failures are
            // logged, not surfaced.
            error!("cmus-notify error: {err}");
            ExitCode::SUCCESS
        }
    }
}

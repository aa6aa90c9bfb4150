//! Log output for the `solve` binary.
//!
//! Everything goes to stderr so stdout only ever carries the answer.
//! `RUST_LOG` takes precedence over the `-v` flags:
//!
//! ```bash
//! RUST_LOG=day2=trace solve --day 2 --part 1 input.txt
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Maps the number of `-v` flags to a filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level_for_verbosity(verbosity))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

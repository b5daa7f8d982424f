//! Browser logging setup

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Route `tracing` output to the browser console
///
/// Debug builds log at `DEBUG`, release builds at `INFO`. Calling this twice
/// keeps the first subscriber.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&"Logging was already initialised".into());
    }
}

//! Browser console logging

use crate::config::LogConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Route `tracing` events to the browser console.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(LogConfig::level()));
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init();
}

//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - All diagnostics go to stderr so stdout carries only results.

use anyhow::{anyhow, Result};
use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use vault_sweep::LogLevel;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber. Call once, before any work is logged.
pub fn init_tracing(lvl: &LogLevel, json: bool) -> Result<()> {
    let env_filter = EnvFilter::default().add_directive(to_level_filter(lvl).into());

    if json {
        let layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_writer(std::io::stderr);
        registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .map_err(|e| anyhow!("failed to install JSON subscriber: {e}"))
    } else {
        let layer = tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr);
        registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .map_err(|e| anyhow!("failed to install subscriber: {e}"))
    }
}

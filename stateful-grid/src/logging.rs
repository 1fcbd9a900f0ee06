//! src/logging.rs
//! ============================================================================
//! Tracing setup for hosts embedding the grid controller.
//!
//! The controller only emits `tracing` events; installing a subscriber is
//! left to the host. `Logger::init_tracing` is the batteries-included
//! option: a daily rolling file plus an optional stderr mirror, both using
//! the compact `[SEQ] LEVEL [file:line module] message` line format.

use std::{
    fs,
    sync::OnceLock,
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::{Context, Result};
use tracing::Metadata;
use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;
use crate::error::GridError;

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. Every failure surfaces as
    /// [`GridError::Logging`].
    pub fn init_tracing(config: &LogConfig) -> Result<(), GridError> {
        Ok(Self::install(config)?)
    }

    fn install(config: &LogConfig) -> Result<()> {
        fs::create_dir_all(&config.dir)
            .with_context(|| format!("cannot create log dir {}", config.dir.display()))?;

        SEQ.get_or_init(|| AtomicUsize::new(1));

        // daily rolling file appender → <dir>/<prefix>.YYYY-MM-DD
        let file: RollingFileAppender = daily(&config.dir, config.file_prefix.as_str());

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(file)
            .with_ansi(false)
            .with_filter(Self::filter(config)?);

        // optional stderr layer for live debugging
        let stderr_layer = if config.stderr {
            Some(
                fmt::layer()
                    .event_format(SeqFileMod)
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_filter(Self::filter(config)?),
            )
        } else {
            None
        };

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        Ok(())
    }

    fn filter(config: &LogConfig) -> Result<EnvFilter> {
        let directive = config
            .level
            .parse()
            .with_context(|| format!("Invalid log level in config: {}", config.level))?;
        Ok(EnvFilter::from_default_env().add_directive(directive))
    }
}

static SEQ: OnceLock<AtomicUsize> = OnceLock::new();

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically-increasing sequence number
        let seq: usize = SEQ
            .get_or_init(|| AtomicUsize::new(1))
            .fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_level_is_rejected() {
        let config = LogConfig {
            level: "grid=loudest".into(),
            ..LogConfig::default()
        };
        assert!(Logger::filter(&config).is_err());
    }

    #[test]
    fn test_init_reports_logging_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            dir: dir.path().join("logs"),
            level: "grid=loudest".into(),
            ..LogConfig::default()
        };

        let err = Logger::init_tracing(&config).unwrap_err();
        assert!(
            matches!(err, GridError::Logging(ref msg) if msg.contains("Invalid log level")),
            "{err}"
        );
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_default_level_parses() {
        assert!(Logger::filter(&LogConfig::default()).is_ok());
    }
}

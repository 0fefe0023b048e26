//! Diagnostics for the `vtdocs` binary.
//!
//! Every `tracing` event is written to stderr. Stdout carries only command
//! results, so `vtdocs routes --json | jq` never sees a log line.

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

/// How chatty the binary is, picked from `-q` and the `-v` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Build progress and copy results.
    #[default]
    Normal,
    /// Per-page and per-widget detail (`-v`).
    Verbose,
    /// Everything, including highlighter and timer internals (`-vv`).
    Trace,
}

impl Verbosity {
    /// Map `-q` / `-v` flags onto a verbosity; `-q` wins.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Most detailed level emitted at this verbosity.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn directive(self) -> String {
        format!("vtdocs={}", self.level())
    }
}

/// Subscriber writing compact, target-tagged lines to `writer`.
fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    )
}

/// Install the global subscriber on stderr.
///
/// `RUST_LOG`, when set, replaces the verbosity-derived filter. A second call
/// leaves the first subscriber in place.
///
/// ```no_run
/// use vtdocs::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    let _ = subscriber(filter, std::io::stderr).try_init();
}

/// Warnings and errors only, captured by the test harness.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Capture {
        type Writer = Capture;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_flags_pick_verbosity() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
    }

    #[test]
    fn test_directive_scopes_to_crate() {
        assert_eq!(Verbosity::default().directive(), "vtdocs=INFO");
        assert_eq!(Verbosity::Quiet.directive(), "vtdocs=ERROR");
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    #[test]
    fn test_events_go_to_diagnostic_writer() {
        let capture = Capture::default();
        let filter = EnvFilter::new(Verbosity::Normal.directive());
        tracing::subscriber::with_default(subscriber(filter, capture.clone()), || {
            tracing::info!(target: "vtdocs::render", pages = 10, "site built");
            tracing::debug!(target: "vtdocs::render", "hidden at normal verbosity");
            tracing::info!(target: "other_crate", "filtered out");
        });

        let out = capture.contents();
        assert!(out.contains("vtdocs::render"));
        assert!(out.contains("site built"));
        assert!(out.contains("pages=10"));
        assert!(!out.contains("hidden at normal verbosity"));
        assert!(!out.contains("filtered out"));
    }

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
        init_test_logging();
    }
}

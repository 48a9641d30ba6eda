//! Logging callback handed to the authentication runtime
//!
//! The runtime reports its internal activity through a caller-supplied
//! callback. [`log_sink`] is the default implementation: it forwards each
//! message to the `tracing` stream matching its level and unconditionally
//! drops anything flagged as containing personally identifiable data.

use tracing::{debug, error, info, warn};

/// Log levels emitted by the authentication runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Verbose,
    /// Emitted by the runtime but not mapped to any output stream
    Trace,
}

/// Callback contract expected by the authentication runtime.
///
/// Arguments are the level, the message, and whether the message contains
/// personally identifiable data.
pub type LoggerCallback = fn(LogLevel, &str, bool);

/// Logger options passed at client construction time.
#[derive(Debug, Clone, Copy)]
pub struct LoggerOptions {
    pub callback: LoggerCallback,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self { callback: log_sink }
    }
}

/// Forward a runtime log line to the stream matching its level.
///
/// Messages flagged as containing PII must never reach any output stream,
/// so they are dropped before the level is even inspected. Levels without a
/// mapped stream fall through silently; neither case is an error.
pub fn log_sink(level: LogLevel, message: &str, contains_pii: bool) {
    if contains_pii {
        return;
    }
    match level {
        LogLevel::Error => error!("{}", message),
        LogLevel::Warning => warn!("{}", message),
        LogLevel::Info => info!("{}", message),
        LogLevel::Verbose => debug!("{}", message),
        LogLevel::Trace => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        writer.contents()
    }

    #[test]
    fn test_pii_is_never_written() {
        let out = capture(|| log_sink(LogLevel::Error, "secret", true));
        assert!(out.is_empty());
    }

    #[test]
    fn test_level_dispatch() {
        let out = capture(|| log_sink(LogLevel::Error, "boom", false));
        assert!(out.contains("ERROR"));
        assert!(out.contains("boom"));

        let out = capture(|| log_sink(LogLevel::Warning, "w", false));
        assert!(out.contains("WARN"));

        let out = capture(|| log_sink(LogLevel::Info, "hi", false));
        assert!(out.contains("INFO"));
        assert!(out.contains("hi"));

        let out = capture(|| log_sink(LogLevel::Verbose, "v", false));
        assert!(out.contains("DEBUG"));
    }

    #[test]
    fn test_unmapped_level_is_silent() {
        let out = capture(|| log_sink(LogLevel::Trace, "x", false));
        assert!(out.is_empty());
    }

    #[test]
    fn test_default_options_use_sink() {
        let options = LoggerOptions::default();
        let out = capture(|| (options.callback)(LogLevel::Info, "hello", false));
        assert!(out.contains("hello"));
    }
}

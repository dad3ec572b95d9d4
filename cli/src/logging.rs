//! Logging initialization: logs go only to a file (or are dropped), never to the console.
//!
//! `RUST_LOG` sets the filter (default `info`). When `LOG_FILE` is set, logs are appended
//! there as plain text; otherwise they are dropped so stdout holds only the tutor's replies.

use std::io::Write;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper_util=off,reqwest=warn"));

    match std::env::var("LOG_FILE") {
        Ok(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(StripAnsiWriter::new(file)))
                .with_ansi(false)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).init();
            tracing::info!(path = %path, "tutor logging to file");
        }
        Err(_) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::sink)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).init();
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    None,
    /// Saw ESC.
    Start,
    /// Inside `ESC [ ...` until a final byte.
    Csi,
}

/// Drops ANSI CSI sequences (`ESC [ params final`) from everything written through it.
///
/// A lone ESC not followed by `[` is dropped together with the next byte.
struct StripAnsiWriter<W> {
    inner: W,
    escape: Escape,
}

impl<W: Write> StripAnsiWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            escape: Escape::None,
        }
    }
}

impl<W: Write> Write for StripAnsiWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut plain = Vec::with_capacity(buf.len());
        for &b in buf {
            self.escape = match (self.escape, b) {
                (Escape::None, 0x1b) => Escape::Start,
                (Escape::None, _) => {
                    plain.push(b);
                    Escape::None
                }
                (Escape::Start, b'[') => Escape::Csi,
                (Escape::Start, _) => Escape::None,
                (Escape::Csi, 0x40..=0x7e) => Escape::None,
                (Escape::Csi, _) => Escape::Csi,
            };
        }
        self.inner.write_all(&plain)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

//! Tracing setup (M-LOG-STRUCTURED).
//!
//! Native hosts get the usual `fmt` layer filtered by `RUST_LOG`
//! (default `info`). In the browser, events are formatted without
//! timestamps and written to the developer console at a matching level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, which is not an
/// error for an embeddable widget.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .is_ok()
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::{filter::LevelFilter, fmt};

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(console::ConsoleMakeWriter),
        )
        .with(LevelFilter::INFO)
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Creates one [`ConsoleWriter`] per formatted event.
    #[derive(Debug, Clone, Copy)]
    pub(super) struct ConsoleMakeWriter;

    /// Buffers one event and emits it to the console on drop.
    #[derive(Debug)]
    pub(super) struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buf.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buf);
            let line = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}

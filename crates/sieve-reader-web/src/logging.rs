//! Tracing output to the browser console.
//!
//! Each formatted event is buffered and handed to `console.log`,
//! `console.warn` or `console.error` (by level) when the writer drops.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Log,
    Warn,
    Error,
}

impl From<&Level> for ConsoleMethod {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            _ => Self::Log,
        }
    }
}

pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        match self.method {
            ConsoleMethod::Log => console::log_1(&value),
            ConsoleMethod::Warn => console::warn_1(&value),
            ConsoleMethod::Error => console::error_1(&value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::Log,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            method: meta.level().into(),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Falls back to `info` when the directive
/// does not parse; a second call is a no-op.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::from(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(&Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::from(&Level::TRACE), ConsoleMethod::Log);
    }
}

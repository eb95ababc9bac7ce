//! Output formatting for CLI commands

use std::io::{self, Write};

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    debug: bool,
}

impl Output {
    pub fn new(format: OutputFormat, debug: bool) -> Self {
        Self { format, debug }
    }

    /// Prints pre-rendered report text as-is
    pub fn report(&self, text: &str) -> io::Result<()> {
        emit(text)
    }

    /// Reports a successful change (silent in text mode)
    pub fn confirm(&self, message: &str) -> io::Result<()> {
        if self.format != OutputFormat::Json {
            return Ok(());
        }
        let line = serde_json::json!({
            "success": true,
            "message": message
        });
        emit(&format!("{}\n", line))
    }

    /// Prints structured data as a single JSON line
    pub fn data<T: Serialize>(&self, data: &T) -> io::Result<()> {
        let json = serde_json::to_string(data)?;
        emit(&format!("{}\n", json))
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a diagnostic message (only when --debug is set)
    pub fn debug(&self, message: &str) {
        if self.debug {
            eprintln!("[debug] {}", message);
        }
    }

    /// Prints a diagnostic message with context (only when --debug is set)
    pub fn debug_ctx(&self, context: &str, message: &str) {
        if self.debug {
            eprintln!("[debug:{}] {}", context, message);
        }
    }
}

fn emit(text: &str) -> io::Result<()> {
    write_stdout(io::stdout().lock(), text)
}

/// Writes `text` to `writer`, treating a closed pipe as success
fn write_stdout<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    match writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_text_unchanged() {
        let mut buffer = Vec::new();

        write_stdout(&mut buffer, "  1: buy milk\n").unwrap();

        assert_eq!(buffer, b"  1: buy milk\n");
    }

    #[test]
    fn closed_pipe_is_not_an_error() {
        assert!(write_stdout(ClosedPipe, "  1: buy milk\n").is_ok());
    }

    #[test]
    fn other_write_errors_surface() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(write_stdout(Full, "x").is_err());
    }
}

//! Line-oriented status output for builds.
//!
//! The pipeline reports progress as human-readable lines prefixed with
//! `(Info)` or `(Error)`. A `LogSink` receives each line as it is produced;
//! the CLI uses `ConsoleSink`, while an embedding shell (or a test) can use
//! `BufferSink` to capture the lines for its own log panel.

/// Receiver for pipeline status lines.
pub trait LogSink {
    /// Report an informational line, e.g. build progress.
    fn info(&mut self, message: &str);

    /// Report a diagnostic line, e.g. a failed asset import.
    fn error(&mut self, message: &str);
}

/// Format a message as an info line.
pub fn info_line(message: &str) -> String {
    format!("(Info) {}", message)
}

/// Format a message as an error line.
pub fn error_line(message: &str) -> String {
    format!("(Error) {}", message)
}

/// Sink that prints info lines to stdout and error lines to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn info(&mut self, message: &str) {
        println!("{}", info_line(message));
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", error_line(message));
    }
}

/// Sink that collects formatted lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines captured so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the captured lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LogSink for BufferSink {
    fn info(&mut self, message: &str) {
        self.lines.push(info_line(message));
    }

    fn error(&mut self, message: &str) {
        self.lines.push(error_line(message));
    }
}

//! Output destinations for `say` and for evaluation diagnostics.
//!
//! Two channels:
//! - **output**: values written by `say`, and the REPL's result lines
//! - **diagnostics**: evaluation errors and syntax error reports
//!
//! Native runs write them to stdout and stderr. Tests capture both into
//! separate buffers so the order of lines within each channel can be
//! asserted.
//!
//! # Performance
//! Uses enum dispatch instead of trait objects for static dispatch.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Handler that writes output to stdout and diagnostics to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without newline, flushing so prompts appear before input.
    pub fn print(&self, msg: &str) {
        print!("{msg}");
        // A closed stdout leaves nothing useful to report to.
        let _ = std::io::stdout().flush();
    }

    /// Print a diagnostic line to stderr.
    pub fn eprintln(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Handler that captures both channels into buffers.
pub struct BufferPrintHandler {
    output: Mutex<String>,
    diagnostics: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            output: Mutex::new(String::new()),
            diagnostics: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.output.lock().push_str(msg);
    }

    pub fn eprintln(&self, msg: &str) {
        let mut buf = self.diagnostics.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed on the output channel so far.
    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    /// Everything printed on the diagnostic channel so far.
    pub fn get_diagnostics(&self) -> String {
        self.diagnostics.lock().clone()
    }

    /// Clear both buffers.
    pub fn clear(&self) {
        self.output.lock().clear();
        self.diagnostics.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// stdout / stderr (default).
    Stdout(StdoutPrintHandler),
    /// Captured to buffers (testing).
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line on the output channel.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Print on the output channel without a newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Print a line on the diagnostic channel.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.eprintln(msg),
            Self::Buffer(h) => h.eprintln(msg),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostics. Empty for handlers that don't capture.
    pub fn get_diagnostics(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_diagnostics(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Clear captured text. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a stdout/stderr print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a capturing print handler.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a print handler that discards everything.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

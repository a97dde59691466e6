// CLASSIFICATION: COMMUNITY
// Filename: report.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! User-facing console messages.
//!
//! Fatal and error messages go to stderr, info and warning to stdout, each
//! prefixed with the `lfc: ` header. Reporting never ends the process;
//! callers decide what happens after a fatal message.

use std::io::{self, Write};

const RED_BOLD: &str = "\x1b[1;31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const HEADER: &str = "lfc: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Fatal,
    Error,
    Info,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Fatal => "fatal error: ",
            Level::Error => "error: ",
            Level::Info => "info: ",
            Level::Warning => "warning: ",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Fatal | Level::Error)
    }
}

pub struct Reporter {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    styled: bool,
}

impl Reporter {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, styled: bool) -> Self {
        Reporter { out, err, styled }
    }

    /// Reporter bound to the process streams; styling is off when `NO_COLOR` is set.
    pub fn stdio() -> Self {
        let styled = std::env::var_os("NO_COLOR").is_none();
        Reporter::new(Box::new(io::stdout()), Box::new(io::stderr()), styled)
    }

    pub fn fatal(&mut self, message: &str) {
        self.emit(Level::Fatal, message);
    }

    pub fn error(&mut self, message: &str) {
        self.emit(Level::Error, message);
    }

    pub fn info(&mut self, message: &str) {
        self.emit(Level::Info, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Echo raw text (build output, issues, usage) on stderr without a header.
    pub fn detail(&mut self, text: &str) {
        let _ = writeln!(self.err, "{text}");
    }

    /// Plain line on stdout.
    pub fn plain(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn emit(&mut self, level: Level, message: &str) {
        let header = self.bold(HEADER);
        let label = match level {
            Level::Fatal | Level::Error => self.red_bold(level.label()),
            Level::Info | Level::Warning => self.bold(level.label()),
        };
        let stream = if level.to_stderr() {
            &mut self.err
        } else {
            &mut self.out
        };
        // A closed console is not worth aborting a compilation for.
        let _ = writeln!(stream, "{header}{label}{message}");
        let _ = stream.flush();
    }

    fn bold(&self, s: &str) -> String {
        if self.styled {
            format!("{BOLD}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    fn red_bold(&self, s: &str) -> String {
        if self.styled {
            format!("{RED_BOLD}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Clonable in-memory sink, handy for capturing a [`Reporter`]'s output.
#[derive(Clone, Default)]
pub struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut buf) => buf.extend_from_slice(data),
            Err(poisoned) => poisoned.into_inner().extend_from_slice(data),
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Reporter {
    /// Unstyled reporter writing into two captures (stdout, stderr).
    pub fn captured() -> (Self, Capture, Capture) {
        let out = Capture::default();
        let err = Capture::default();
        let reporter = Reporter::new(Box::new(out.clone()), Box::new(err.clone()), false);
        (reporter, out, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_route_to_their_streams() {
        let (mut rep, out, err) = Reporter::captured();
        rep.fatal("boom");
        rep.error("bad");
        rep.info("hello");
        rep.warning("careful");
        assert_eq!(err.contents(), "lfc: fatal error: boom\nlfc: error: bad\n");
        assert_eq!(out.contents(), "lfc: info: hello\nlfc: warning: careful\n");
    }

    #[test]
    fn styled_output_wraps_labels() {
        let out = Capture::default();
        let err = Capture::default();
        let mut rep = Reporter::new(Box::new(out.clone()), Box::new(err.clone()), true);
        rep.fatal("x");
        let text = err.contents();
        assert!(text.starts_with("\x1b[1mlfc: \x1b[0m"));
        assert!(text.contains("\x1b[1;31mfatal error: \x1b[0mx"));
    }

    #[test]
    fn detail_is_unprefixed() {
        let (mut rep, _out, err) = Reporter::captured();
        rep.detail("raw line");
        assert_eq!(err.contents(), "raw line\n");
    }
}

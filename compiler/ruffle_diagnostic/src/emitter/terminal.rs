//! Terminal Emitter
//!
//! Human-readable, rustc-style diagnostic output with optional ANSI colors:
//!
//! ```text
//! error[E1002]: ambiguous error union chain
//!   --> src/main.rf:1:20
//!    |
//!  1 | let x: i32!(Error?)!(Error?!Error)?;
//!    |                    ^ second `!` here
//!    |           - first `!` here
//!    = help: parenthesize the error type
//! ```

use std::io::{self, Write};

use ruffle_ir::{LineIndex, Span};

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text the emitter renders snippets from.
struct SourceFile {
    path: String,
    text: String,
    lines: LineIndex,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Create a terminal emitter with a boolean color flag.
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter {
            writer,
            colors,
            source: None,
        }
    }

    /// Render snippets from `text`, reported under `path`.
    ///
    /// Without a source the emitter prints only `line:col` locations.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineIndex::build(&text),
            text,
        });
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_location(&mut self, span: Span) {
        let _ = write!(self.writer, "  ");
        self.write_colored("-->", colors::SECONDARY);
        match &self.source {
            Some(source) => {
                let _ = writeln!(
                    self.writer,
                    " {}:{}:{}",
                    source.path, span.line, span.column
                );
            }
            None => {
                let _ = writeln!(self.writer, " {span}");
            }
        }
    }

    /// Render every label under its source line.
    fn write_snippet(&mut self, labels: &[Label]) {
        let Some(source) = self.source.take() else {
            for label in labels.iter().filter(|l| !l.is_primary) {
                let _ = write!(self.writer, "      {}: ", label.span);
                self.write_colored(&label.message, colors::SECONDARY);
                let _ = writeln!(self.writer);
            }
            return;
        };

        let mut lines: Vec<u32> = labels.iter().map(|l| l.span.line).collect();
        lines.sort_unstable();
        lines.dedup();
        let width = lines.last().map_or(1, |max| max.to_string().len());

        self.write_blank_gutter_line(width);
        for line in lines {
            let text = source.lines.line_text(&source.text, line).unwrap_or("");
            self.write_gutter(width, Some(line));
            let _ = writeln!(self.writer, " {text}");

            for label in labels.iter().filter(|l| l.span.line == line) {
                self.write_underline(width, text, label);
            }
        }
        self.write_blank_gutter_line(width);

        self.source = Some(source);
    }

    /// Write ` NN |` (or a blank `   |`) without a newline.
    fn write_gutter(&mut self, width: usize, line: Option<u32>) {
        let number = line.map_or_else(String::new, |n| n.to_string());
        let _ = write!(self.writer, " ");
        self.write_colored(&format!("{number:>width$} |"), colors::SECONDARY);
    }

    fn write_blank_gutter_line(&mut self, width: usize) {
        self.write_gutter(width, None);
        let _ = writeln!(self.writer);
    }

    fn write_underline(&mut self, width: usize, line_text: &str, label: &Label) {
        let indent = label.span.column.saturating_sub(1) as usize;
        let start = line_text
            .char_indices()
            .nth(indent)
            .map_or(line_text.len(), |(i, _)| i);
        let end = (start + label.span.len() as usize).min(line_text.len());
        let carets = line_text.get(start..end).map_or(0, |t| t.chars().count()).max(1);

        let (mark, color) = if label.is_primary {
            ('^', colors::ERROR)
        } else {
            ('-', colors::SECONDARY)
        };

        self.write_gutter(width, None);
        let marks: String = std::iter::repeat(mark).take(carets).collect();
        let _ = write!(self.writer, " {:indent$}", "");
        self.write_colored(&format!("{marks} {}", label.message), color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(span) = diagnostic.primary_span() {
            self.write_location(span);
        }
        if !diagnostic.labels.is_empty() {
            self.write_snippet(&diagnostic.labels);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "   = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "   = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {}", suggestion.message);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);

            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {} warning{} emitted",
                    warning_count,
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {} warning{} emitted",
                warning_count,
                plural_s(warning_count)
            );
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

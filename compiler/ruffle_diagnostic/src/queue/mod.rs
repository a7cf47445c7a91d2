//! Diagnostic queue: the per-unit sink every phase reports into.
//!
//! Features:
//! - Append-only while a unit is processed
//! - Error limit with a single "too many errors" note
//! - Deduplication of identical errors
//! - Source-order flushing

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

use crate::{Diagnostic, ErrorCode};
use ruffle_ir::Span;

/// Hash a message for dedup comparison without keeping a copy of it.
#[inline]
fn message_hash(msg: &str) -> u64 {
    let mut hasher = FxHasher::default();
    msg.hash(&mut hasher);
    hasher.finish()
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept per unit (0 = unlimited).
    pub error_limit: usize,
    /// Drop errors identical in code, message and span to a queued one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 100,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }

    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }
}

/// Queued diagnostic with its sort position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Line number (1-based) for sorting.
    line: u32,
    /// Column number (1-based) for sorting within a line.
    column: u32,
}

/// Sink for the diagnostics of one translation unit.
///
/// Positions come from the primary label's span, which already carries its
/// line and column, so the queue never needs the source text. Diagnostics
/// without a primary span sort after everything else.
///
/// # Example
///
/// ```
/// use ruffle_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
/// use ruffle_ir::Span;
///
/// let mut queue = DiagnosticQueue::new();
/// queue.push(
///     Diagnostic::error(ErrorCode::E2001)
///         .with_message("unknown type `Foo`")
///         .with_label(Span::new(7, 10, 1, 8), "not declared"),
/// );
/// assert_eq!(queue.error_count(), 1);
/// let sorted = queue.flush();
/// assert_eq!(sorted.len(), 1);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    warning_count: usize,
    /// Whether the "too many errors" note has been queued.
    limit_noted: bool,
    /// (code, span, message hash) of every queued error.
    seen_errors: FxHashSet<(ErrorCode, Option<Span>, u64)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was recorded, `false` if it was
    /// dropped by the error limit or as a duplicate.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if diag.is_error() {
            if self.limit_reached() {
                self.note_limit(diag.primary_span());
                return false;
            }

            if self.config.deduplicate {
                let key = (diag.code, diag.primary_span(), message_hash(&diag.message));
                if !self.seen_errors.insert(key) {
                    tracing::trace!(code = %diag.code, "dropping duplicate diagnostic");
                    return false;
                }
            }

            self.error_count += 1;
        } else if diag.is_warning() {
            self.warning_count += 1;
        }

        self.enqueue(diag);
        true
    }

    /// Record a plain error with one primary label.
    pub fn push_error(
        &mut self,
        code: ErrorCode,
        span: Span,
        message: impl Into<String>,
        label: impl Into<String>,
    ) -> bool {
        self.push(
            Diagnostic::error(code)
                .with_message(message)
                .with_label(span, label),
        )
    }

    fn enqueue(&mut self, diagnostic: Diagnostic) {
        let (line, column) = diagnostic
            .primary_span()
            .map_or((u32::MAX, u32::MAX), |span| (span.line, span.column));
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic,
            line,
            column,
        });
    }

    fn note_limit(&mut self, at: Option<Span>) {
        if self.limit_noted {
            return;
        }
        self.limit_noted = true;
        tracing::debug!(limit = self.config.error_limit, "error limit reached");
        self.enqueue(too_many_errors(self.config.error_limit, at));
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors recorded.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the number of warnings recorded.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over queued diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue so it can be reused for the next unit. The sort is
    /// stable: diagnostics at the same position keep their insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column));

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| (d.line, d.column));
        }

        let result: Vec<Diagnostic> = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        self.error_count = 0;
        self.warning_count = 0;
        self.limit_noted = false;
        self.seen_errors.clear();

        result
    }
}

impl Extend<Diagnostic> for DiagnosticQueue {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diag in iter {
            self.push(diag);
        }
    }
}

/// Create a "too many errors" note.
#[cold]
fn too_many_errors(limit: usize, at: Option<Span>) -> Diagnostic {
    let diag = Diagnostic::note(ErrorCode::E9002)
        .with_message(format!("too many errors, stopped reporting after {limit}"));
    match at {
        Some(span) => diag.with_label(span, "error limit reached here"),
        None => diag,
    }
}

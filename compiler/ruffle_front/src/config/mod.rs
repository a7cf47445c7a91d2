//! Front-end configuration.

use ruffle_diagnostic::DiagnosticConfig;

/// Settings for one front-end invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontEndConfig {
    /// Limits and deduplication for each unit's diagnostic queue.
    pub diagnostics: DiagnosticConfig,
    /// Emit W2101 for `T??` and similar.
    pub warn_redundant_optional: bool,
    /// ANSI colors when rendering reports.
    pub colored_output: bool,
    /// Worker threads for [`check_units`](crate::check_units); 0 uses the
    /// global rayon pool.
    pub num_threads: usize,
}

impl Default for FrontEndConfig {
    fn default() -> Self {
        FrontEndConfig {
            diagnostics: DiagnosticConfig::default(),
            warn_redundant_optional: true,
            colored_output: false,
            num_threads: 0,
        }
    }
}

impl FrontEndConfig {
    /// Single-threaded, unlimited diagnostics.
    pub fn for_tests() -> Self {
        FrontEndConfig {
            diagnostics: DiagnosticConfig::unlimited(),
            num_threads: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn with_redundant_optional_warnings(mut self, enabled: bool) -> Self {
        self.warn_redundant_optional = enabled;
        self
    }

    #[must_use]
    pub fn with_colored_output(mut self, colored: bool) -> Self {
        self.colored_output = colored;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }
}

//! Per-unit and batch pipelines.

use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;
use ruffle_diagnostic::{Diagnostic, DiagnosticEmitter, DiagnosticQueue, TerminalEmitter};
use ruffle_ir::{Name, Span, StringInterner};
use ruffle_lexer::LexError;
use ruffle_parse::{skim, AnnotationSite, DeclKind, Declaration, SkimOutput};
use ruffle_types::{CanonicalType, Normalizer, SemanticError, SymbolTable, TypeKind, TypeResolver};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{FrontEndConfig, FrontEndError, SourceUnit};

/// One annotation after normalization.
///
/// Annotations that failed to parse or normalize carry
/// [`CanonicalType::error_placeholder`]; the failure is in the report's
/// diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoweredAnnotation {
    pub site: AnnotationSite,
    pub owner: Option<Name>,
    pub binding: Option<Name>,
    pub span: Span,
    pub ty: CanonicalType,
}

/// Everything the front end learned about one unit.
#[derive(Clone, Debug)]
pub struct UnitReport {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
    pub lowered: Vec<LoweredAnnotation>,
    /// In source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Write the diagnostics rustc-style, with snippets from `unit`.
    pub fn render<W: Write>(&self, unit: &SourceUnit, writer: W, colors: bool) -> W {
        let mut emitter =
            TerminalEmitter::new(writer, colors).with_source(unit.display_path(), unit.source.as_str());
        emitter.emit_all(&self.diagnostics);
        emitter.emit_summary(self.error_count(), self.warning_count());
        emitter.flush();
        emitter.into_inner()
    }
}

/// Lexer and skimmer output, kept between the two passes.
struct ParsedUnit {
    lex_errors: Vec<LexError>,
    skimmed: SkimOutput,
}

#[tracing::instrument(level = "trace", skip_all, fields(path = %unit.path.display()))]
fn parse_unit(unit: &SourceUnit, interner: &StringInterner) -> ParsedUnit {
    let lexed = ruffle_lexer::lex(&unit.source, interner);
    let skimmed = skim(lexed.tokens.as_slice());
    ParsedUnit {
        lex_errors: lexed.errors,
        skimmed,
    }
}

fn type_kind(kind: DeclKind) -> TypeKind {
    match kind {
        DeclKind::Struct => TypeKind::Struct,
        DeclKind::Enum => TypeKind::Enum,
        DeclKind::Class => TypeKind::Class,
    }
}

/// Declare every unit's types, in unit order.
///
/// Returns the duplicate-declaration diagnostics of each unit.
fn declare(
    units: &[SourceUnit],
    parsed: &[ParsedUnit],
    symbols: &mut SymbolTable,
    interner: &StringInterner,
) -> Vec<Vec<Diagnostic>> {
    // Which unit declared each name first.
    let mut declared_in: FxHashMap<Name, usize> = FxHashMap::default();
    parsed
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let mut diagnostics = Vec::new();
            for decl in &unit.skimmed.declarations {
                match symbols.declare(decl.name, type_kind(decl.kind), decl.span) {
                    Ok(()) => {
                        declared_in.insert(decl.name, index);
                    }
                    Err(err) => diagnostics.push(duplicate_diagnostic(
                        &err,
                        declared_in.get(&decl.name).copied(),
                        index,
                        units,
                        interner,
                    )),
                }
            }
            diagnostics
        })
        .collect()
}

/// A duplicate declared first in another unit cannot point at that unit's
/// source; name the file instead.
fn duplicate_diagnostic(
    err: &SemanticError,
    first_unit: Option<usize>,
    current: usize,
    units: &[SourceUnit],
    interner: &StringInterner,
) -> Diagnostic {
    let mut diag = err.to_diagnostic(interner);
    if let Some(first) = first_unit.filter(|&first| first != current) {
        diag.labels.retain(|label| label.is_primary);
        if let Some(unit) = units.get(first) {
            diag = diag.with_note(format!("first declared in `{}`", unit.display_path()));
        }
    }
    diag
}

fn lower_unit(
    unit: &SourceUnit,
    parsed: ParsedUnit,
    declare_diagnostics: Vec<Diagnostic>,
    symbols: &dyn TypeResolver,
    interner: &StringInterner,
    config: &FrontEndConfig,
) -> UnitReport {
    let mut queue = DiagnosticQueue::with_config(config.diagnostics.clone());
    for err in &parsed.lex_errors {
        queue.push(err.to_diagnostic());
    }
    // Parse errors on lexer `Error` tokens were already reported above.
    for err in parsed.skimmed.errors.iter().filter(|e| !e.is_from_lex_error()) {
        queue.push(err.to_diagnostic());
    }
    queue.extend(declare_diagnostics);

    let normalizer = Normalizer::new(symbols, interner)
        .with_redundant_optional_warnings(config.warn_redundant_optional);
    let placeholder = CanonicalType::error_placeholder(interner);

    let mut lowered = Vec::with_capacity(parsed.skimmed.annotations.len());
    for annotation in parsed.skimmed.annotations {
        let ty = match &annotation.ty {
            Ok(expr) => match normalizer.normalize(expr, &mut queue) {
                Ok(ty) => ty,
                Err(err) => {
                    queue.push(err.to_diagnostic(interner));
                    placeholder.clone()
                }
            },
            Err(err) => {
                if !err.is_from_lex_error() {
                    queue.push(err.to_diagnostic());
                }
                placeholder.clone()
            }
        };
        lowered.push(LoweredAnnotation {
            site: annotation.site,
            owner: annotation.owner,
            binding: annotation.binding,
            span: annotation.span,
            ty,
        });
    }

    debug!(
        path = %unit.path.display(),
        lowered = lowered.len(),
        errors = queue.error_count(),
        warnings = queue.warning_count(),
        "checked unit"
    );
    UnitReport {
        path: unit.path.clone(),
        declarations: parsed.skimmed.declarations,
        lowered,
        diagnostics: queue.flush(),
    }
}

/// Check a single unit on its own: its declarations plus the built-ins are
/// the whole symbol table.
#[tracing::instrument(level = "trace", skip_all, fields(path = %unit.path.display()))]
pub fn check_unit(unit: &SourceUnit, interner: &StringInterner, config: &FrontEndConfig) -> UnitReport {
    let parsed = parse_unit(unit, interner);
    let mut symbols = SymbolTable::new(interner);
    let declare_diagnostics = declare(
        std::slice::from_ref(unit),
        std::slice::from_ref(&parsed),
        &mut symbols,
        interner,
    )
    .pop()
    .unwrap_or_default();
    let symbols = symbols.freeze();
    lower_unit(unit, parsed, declare_diagnostics, &symbols, interner, config)
}

/// Check a batch of units that share one symbol table.
///
/// Reports come back in the order of `units`.
#[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
pub fn check_units(
    units: &[SourceUnit],
    interner: &StringInterner,
    config: &FrontEndConfig,
) -> Result<Vec<UnitReport>, FrontEndError> {
    let run = || -> Vec<UnitReport> {
        let parsed: Vec<ParsedUnit> = units.par_iter().map(|unit| parse_unit(unit, interner)).collect();

        let mut symbols = SymbolTable::new(interner);
        let declare_diagnostics = declare(units, &parsed, &mut symbols, interner);
        let symbols = symbols.freeze();
        debug!(symbols = symbols.len(), "declare pass done");

        units
            .par_iter()
            .zip(parsed)
            .zip(declare_diagnostics)
            .map(|((unit, parsed), diagnostics)| {
                lower_unit(unit, parsed, diagnostics, &symbols, interner, config)
            })
            .collect()
    };

    if config.num_threads == 0 {
        return Ok(run());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build()?;
    Ok(pool.install(run))
}

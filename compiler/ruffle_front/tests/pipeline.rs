//! End-to-end tests: several units through lex, skim, declare and
//! normalize.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use ruffle_diagnostic::{ErrorCode, Label};
use ruffle_front::{check_units, FrontEndConfig, SourceUnit, UnitReport};
use ruffle_ir::{SharedInterner, Span};

fn units() -> Vec<SourceUnit> {
    ruffle_front::init_tracing();
    vec![
        SourceUnit::new(
            "net.rf",
            "class Socket : Stream {\n    addr: IpAddr?\n    fn close(self) !Error {}\n}\nstruct IpAddr { octets: String }\n",
        ),
        SourceUnit::new(
            "geo.rf",
            "struct Point { x: f64, y: f64 }\nfn dial(p: Point) -> Socket!Error {}\n",
        ),
        SourceUnit::new(
            "main.rf",
            "fn main() {\n    let s: Sokcet = dial(origin);\n    let p: Point? = none;\n}\n",
        ),
    ]
}

fn codes(report: &UnitReport) -> Vec<ErrorCode> {
    report.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn declarations_are_visible_across_units() {
    let interner = SharedInterner::new();
    let units = units();
    let reports = check_units(&units, &interner, &FrontEndConfig::for_tests()).unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].path.to_str(), Some("net.rf"));
    assert!(reports[0].diagnostics.is_empty(), "{:?}", reports[0].diagnostics);
    assert!(reports[1].diagnostics.is_empty(), "{:?}", reports[1].diagnostics);

    assert_eq!(codes(&reports[2]), vec![ErrorCode::E2001]);
    let unknown = &reports[2].diagnostics[0];
    assert_eq!(unknown.suggestions[0].message, "did you mean `Socket`?");
    assert_eq!(unknown.primary_span(), Some(Span::new(23, 29, 2, 12)));

    let shown: Vec<String> = reports[1]
        .lowered
        .iter()
        .map(|l| l.ty.to_source(&interner))
        .collect();
    assert_eq!(shown, vec!["f64", "f64", "Point", "Socket!Error"]);
}

#[test]
fn parallel_and_sequential_agree() {
    let interner = SharedInterner::new();
    let units = units();
    let one = check_units(&units, &interner, &FrontEndConfig::for_tests()).unwrap();
    let many = check_units(
        &units,
        &interner,
        &FrontEndConfig::for_tests().with_threads(4),
    )
    .unwrap();
    for (a, b) in one.iter().zip(&many) {
        assert_eq!(a.lowered, b.lowered);
        assert_eq!(a.diagnostics, b.diagnostics);
    }
}

#[test]
fn duplicate_across_units_names_first_file() {
    let interner = SharedInterner::new();
    let units = vec![
        SourceUnit::new("a.rf", "struct Config {}"),
        SourceUnit::new("b.rf", "enum Config { On, Off }"),
    ];
    let reports = check_units(&units, &interner, &FrontEndConfig::default()).unwrap();
    assert!(reports[0].diagnostics.is_empty());
    assert_eq!(codes(&reports[1]), vec![ErrorCode::E2004]);
    let duplicate = &reports[1].diagnostics[0];
    assert_eq!(
        duplicate.labels,
        vec![Label::primary(Span::new(5, 11, 1, 6), "redeclared here")]
    );
    assert_eq!(duplicate.notes, vec!["first declared in `a.rf`".to_owned()]);
}

#[test]
fn boss_case_reports_second_bang() {
    let interner = SharedInterner::new();
    let units = vec![SourceUnit::new(
        "boss.rf",
        "let x: i32!(Error?)!(Error?!Error)?;\nlet y: i32!((Error?)!(Error?!Error))?;\n",
    )];
    let reports = check_units(&units, &interner, &FrontEndConfig::for_tests()).unwrap();
    let report = &reports[0];
    assert_eq!(codes(report), vec![ErrorCode::E1002]);
    assert_eq!(
        report.diagnostics[0].primary_span(),
        Some(Span::new(19, 20, 1, 20))
    );
    assert!(report.lowered[0].ty.is_error_placeholder(&interner));
    assert_eq!(
        report.lowered[1].ty.to_source(&interner),
        "i32!(Error?!(Error?!Error))?"
    );
}

#[test]
fn each_broken_annotation_reports_once() {
    let interner = SharedInterner::new();
    let units = vec![SourceUnit::new(
        "broken.rf",
        "fn f(a: i32!, b: bool) -> (u8 {\n\
         \x20   let c: i32!(Error?);\n\
         \x20   let d: Nope;\n\
         \x20   let e: u64?;\n\
         }\n",
    )];
    let reports = check_units(&units, &interner, &FrontEndConfig::for_tests()).unwrap();
    let report = &reports[0];
    assert_eq!(
        codes(report),
        vec![
            ErrorCode::E1001,
            ErrorCode::E1003,
            ErrorCode::E2002,
            ErrorCode::E2001
        ]
    );
    let valid: Vec<String> = report
        .lowered
        .iter()
        .filter(|l| !l.ty.is_error_placeholder(&interner))
        .map(|l| l.ty.to_source(&interner))
        .collect();
    assert_eq!(valid, vec!["bool", "u64?"]);

    let rendered = report.render(&units[0], Vec::new(), false);
    let text = String::from_utf8(rendered).unwrap();
    assert!(text.contains("error[E1003]"), "{text}");
    assert!(text.ends_with("error: aborting due to 4 previous errors\n"), "{text}");
}

#[test]
fn missing_file_is_an_error() {
    let err = SourceUnit::from_path("/nonexistent/ruffle/unit.rf").unwrap_err();
    assert!(err.to_string().contains("unit.rf"));
}

#[test]
fn deeply_stacked_optionals_are_rejected_not_overflowed() {
    let mut annotation = "(".repeat(250);
    annotation.push_str("i32");
    for level in 0..250 {
        annotation.push_str(&"?".repeat(254 - level));
        annotation.push(')');
    }
    let source = format!("let x: {annotation};\nlet y: bool;\n");

    let interner = SharedInterner::new();
    let units = vec![SourceUnit::new("deep.rf", source)];
    let reports = check_units(&units, &interner, &FrontEndConfig::for_tests()).unwrap();
    let report = &reports[0];
    assert_eq!(codes(report), vec![ErrorCode::E1004]);
    assert!(report.lowered[0].ty.is_error_placeholder(&interner));
    assert_eq!(report.lowered[1].ty.to_source(&interner), "bool");
}

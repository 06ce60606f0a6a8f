use std::fs;
use std::path::PathBuf;

use exprtree::errors::{ExprError, ExprResult};
use exprtree::eval::evaluate;
use exprtree::render::render_tree;
use exprtree::report::{Failure, Options, Report};
use exprtree::{parse, read};

fn write_input(name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = std::env::temp_dir().join(format!("exprtree-{}-{}.txt", name, std::process::id()));
    fs::write(&path, contents).expect("temp file should be writable");
    path
}

#[test]
fn test_read_parse_evaluate() -> ExprResult<()> {
    let path = write_input("pipeline", "{5*6}/2+5\n");
    let source = read(&path)?;
    fs::remove_file(&path)?;

    let tree = parse(&source)?;
    assert!(render_tree(&tree).starts_with("/\n"));
    assert_eq!(evaluate(&tree)?, 4);
    Ok(())
}

#[test]
fn test_missing_input_file() {
    let path = std::env::temp_dir().join("exprtree-does-not-exist.txt");
    let result = read(&path);
    if let Err(e @ ExprError::InputNotFound { .. }) = result {
        assert_eq!(e.kind(), "InputNotFound");
        assert!(e.to_string().contains("exprtree-does-not-exist.txt"));
    } else {
        panic!("Expected InputNotFound, but got: {:?}", result);
    }
}

#[test]
fn test_directory_is_an_io_failure() {
    let result = read(&std::env::temp_dir());
    if let Err(e) = result {
        assert_eq!(e.kind(), "IOFailure");
    } else {
        panic!("Expected an I/O error reading a directory");
    }
}

#[test]
fn test_error_kinds_and_positions() {
    let cases = [
        ("", "UnexpectedEndOfInput", Some(1)),
        ("3+a", "UnexpectedSymbol", Some(3)),
        ("{1*2", "MalformedGrouping", Some(5)),
    ];
    for (source, kind, position) in cases {
        let err = parse(source).expect_err(source);
        assert_eq!(err.kind(), kind, "source {:?}", source);
        assert_eq!(err.position(), position, "source {:?}", source);
    }
}

#[test]
fn test_evaluation_errors_have_no_position() -> ExprResult<()> {
    let err = evaluate(&parse("1/0")?).expect_err("division by zero");
    assert_eq!(err.kind(), "DivisionByZero");
    assert_eq!(err.position(), None);
    assert_eq!(err.to_string(), "division by zero");
    Ok(())
}

#[test]
fn test_invalid_utf8_after_the_expression_is_ignored() -> ExprResult<()> {
    let path = write_input("trailing-bytes", b"1+2\n\xff\xfe");
    let source = read(&path);
    fs::remove_file(&path)?;

    assert_eq!(evaluate(&parse(&source?)?)?, 3);
    Ok(())
}

#[test]
fn test_invalid_utf8_inside_the_expression_is_a_symbol_error() -> ExprResult<()> {
    let path = write_input("leading-bytes", b"1+\xff");
    let source = read(&path);
    fs::remove_file(&path)?;

    let err = parse(&source?).expect_err("undecodable byte where a digit belongs");
    assert_eq!(err.kind(), "UnexpectedSymbol");
    assert_eq!(err.position(), Some(3));
    Ok(())
}

#[test]
fn test_report_prints_blank_line_between_tree_and_value() -> ExprResult<()> {
    let report = Report::from_source("2+3*4", Options::default())?;
    let expected = "\
*
├── 4
└── +
    ├── 3
    └── 2

20
";
    assert_eq!(report.to_string(), expected);
    Ok(())
}

#[test]
fn test_report_without_tree() -> ExprResult<()> {
    let options = Options {
        tree: false,
        ..Options::default()
    };
    let report = Report::from_source("{7}/2", options)?;
    assert!(report.diagram.is_none());
    assert_eq!(report.to_string(), "3\n");
    Ok(())
}

#[test]
fn test_report_of_leaf() -> ExprResult<()> {
    let report = Report::from_source("8", Options::default())?;
    assert_eq!(report.to_string(), "8\n\n8\n");
    Ok(())
}

#[test]
fn test_report_fails_as_a_whole() {
    let result = Report::from_source("5/{3-3}", Options::default());
    if let Err(e) = result {
        assert_eq!(Failure(&e).to_string(), "Error [DivisionByZero]: division by zero");
    } else {
        panic!("Expected DivisionByZero, but got: {:?}", result);
    }
}

#[test]
fn test_report_respects_depth_option() {
    let options = Options {
        max_depth: 3,
        ..Options::default()
    };
    let result = Report::from_source("{1}", options);
    assert!(matches!(
        result,
        Err(ExprError::NestingTooDeep { limit: 3, .. })
    ));
}

#[test]
fn test_failure_line_names_the_class() {
    let err = parse("{5+3").expect_err("unclosed group");
    let line = Failure(&err).to_string();
    assert!(line.starts_with("Error [MalformedGrouping]: "), "got {:?}", line);
    assert!(line.contains("position 5"), "got {:?}", line);
}

#[test]
fn test_report_from_missing_file() {
    let path = std::env::temp_dir().join("exprtree-report-missing.txt");
    let result = Report::from_file(&path, Options::default());
    assert!(matches!(result, Err(ExprError::InputNotFound { .. })));
}

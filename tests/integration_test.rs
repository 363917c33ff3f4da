// Integration tests for the syntax checker

use ejs::constants::{Limits, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use ejs::engine::Engine;
use ejs::memory::Value;
use ejs::parser::{ErrorKind, Parser};

#[test]
fn test_declaration_with_addition() {
    let mut engine = Engine::new();
    assert!(engine.exec("var x = 10 + 20;"));
}

#[test]
fn test_assignment_without_declaration() {
    let mut engine = Engine::new();
    assert!(engine.exec("x = 5 * (2 + 3);"));
}

#[test]
fn test_missing_initializer() {
    let mut engine = Engine::new();
    assert!(!engine.exec("var x = ;"));
    assert!(!engine.error_message().is_empty());
}

#[test]
fn test_bare_call_statement() {
    let mut engine = Engine::new();
    assert!(!engine.exec("foo(1, 2);"));
    assert_eq!(
        engine.last_error().map(|e| e.kind.clone()),
        Some(ErrorKind::UnexpectedCharacter { expected: '=' })
    );

    // Calls are fine inside expressions
    assert!(engine.exec("r = foo(1, 2);"));
}

#[test]
fn test_comment_only_program() {
    let mut engine = Engine::new();
    assert!(engine.exec("// just a comment\n"));
    assert!(engine.exec("// one\n// two\n"));
    assert!(engine.exec(""));
    assert!(engine.exec(" \t\r\n"));
}

#[test]
fn test_multiple_declarations() {
    let mut engine = Engine::new();
    assert!(engine.exec("var a = 1, b = a + 2;"));
}

#[test]
fn test_full_program() {
    let source = r#"
        // setup
        var width = 40, height = 3 * (width - 2);
        area = width * height;   // product
        scaled = area / scale(width, height, 2) + 1;
        (area - 1) * 2;
    "#;
    let mut engine = Engine::new();
    assert!(engine.exec(source), "unexpected error: {}", engine.error_message());
}

#[test]
fn test_repeated_exec_is_independent() {
    let mut engine = Engine::new();
    assert!(engine.exec("var a = 1;\nb = 2;\n"));
    assert!(engine.exec("c = (3);"));
    assert_eq!(engine.line(), 1);

    assert!(!engine.exec("\n\nd = ;"));
    assert_eq!(engine.last_error().map(|e| e.line), Some(3));

    // The failed run does not poison the next one
    assert!(engine.exec("e = 5;"));
}

#[test]
fn test_semicolon_required() {
    let mut engine = Engine::new();
    assert!(!engine.exec("x = 1"));
    assert!(!engine.exec("var a = 1, b = 2"));
    assert!(!engine.exec("x = 1;\ny = 2"));
    assert_eq!(engine.last_error().map(|e| e.line), Some(2));
}

#[test]
fn test_parenthesis_balance() {
    let mut engine = Engine::new();
    assert!(engine.exec("x = ((1 + 2) * (3 - (4 / 5)));"));
    assert!(!engine.exec("x = ((1 + 2);"));
    assert!(!engine.exec("x = (1 + 2));"));
    assert!(!engine.exec("x = f(1;"));
    assert!(!engine.exec(")"));
}

#[test]
fn test_error_position_and_snippet() {
    let mut engine = Engine::new();
    let err = engine.check("a = 1;\n  b = 2 +\n  * 3;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidNumber);
    assert_eq!(err.line, 3);
    assert_eq!(err.column, 3);
    assert_eq!(err.snippet, "* 3;");
    assert_eq!(engine.error_message(), "[* 3;]: expected digit");
    assert_eq!(
        err.to_string(),
        "Syntax error at line 3, column 3: [* 3;]: expected digit"
    );
}

#[test]
fn test_non_ascii_is_invalid() {
    let mut engine = Engine::new();
    assert!(!engine.exec("x = é;"));
    assert!(!engine.exec("x = 1;\u{00a0}"));
    assert!(!engine.exec(b"x = 1;\x00".as_slice()));
    assert!(!engine.exec(b"\xff".as_slice()));
}

#[test]
fn test_message_is_bounded() {
    let mut engine = Engine::new();
    assert!(!engine.exec("x = ;"));
    assert!(!engine.message_truncated());
    assert!(engine.error_message().len() <= 99);

    let deep = Limits::new(usize::MAX / 2);
    let mut engine = Engine::with_limits(deep);
    let err = engine.check("x = (1;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter { expected: ')' });

    let mut engine = Engine::with_limits(Limits::new(1));
    assert!(!engine.exec("x = (1);"));
    assert_eq!(engine.error_message(), "[1);]: nesting depth exceeds 1");
}

#[test]
fn test_nesting_at_default_limit() {
    let mut engine = Engine::new();
    let depth = DEFAULT_MAX_DEPTH - 1;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert!(engine.exec(&source), "{}", engine.error_message());

    let depth = DEFAULT_MAX_DEPTH;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let err = engine.check(&source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NestingTooDeep { limit: DEFAULT_MAX_DEPTH });
}

#[test]
fn test_pathological_nesting_fails_cleanly() {
    let mut engine = Engine::new();
    let source = format!("x = {}1;", "(".repeat(100_000));
    let err = engine.check(&source).unwrap_err();
    assert!(err.is_limit());
    assert_eq!(err.offset, 4 + DEFAULT_MAX_DEPTH);

    assert!(engine.exec("y = 1;"));
}

#[test]
fn test_requested_depth_is_capped() {
    let mut engine = Engine::with_limits(Limits::new(usize::MAX / 2));
    assert_eq!(engine.limits().max_depth, MAX_DEPTH_LIMIT);

    let source = format!("x = {}1;", "(".repeat(1_000_000));
    let err = engine.check(&source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NestingTooDeep { limit: MAX_DEPTH_LIMIT });
    assert_eq!(err.offset, 4 + MAX_DEPTH_LIMIT);
}

#[test]
fn test_symbol_table_survives_runs() {
    let mut engine = Engine::new();
    engine.symbols_mut().insert("ratio", Value::Double(2.5));
    engine.symbols_mut().insert("name", Value::Str("ejs".to_string()));

    assert!(engine.exec("var ratio = 3;"));
    assert!(!engine.exec("ratio = ;"));

    let names: Vec<&str> = engine.symbols().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["ratio", "name"]);
    assert_eq!(
        engine.symbols().get("ratio").and_then(|v| v.value.as_double()),
        Some(2.5)
    );
}

#[test]
fn test_parser_tracks_lines() {
    let mut parser = Parser::new(b"a = 1;\n// c\nb = 2;\n");
    assert!(parser.parse_program().is_ok());
    assert_eq!(parser.line(), 4);
    assert_eq!(parser.position(), 19);
}

#[test]
fn test_independent_engines_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut engine = Engine::new();
                let ok = engine.exec(format!("v{} = {} * (2 + {});", i, i, i));
                let bad = engine.exec(format!("v{} = ;", i));
                (ok, bad)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false));
    }
}

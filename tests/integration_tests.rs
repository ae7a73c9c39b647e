//! Integration tests for end-to-end lexical analysis.
//!
//! These tests drive the public API from source text to rendered reports and
//! check the scanning properties that must hold for any input.

use lexan::{
    analyze, display_error,
    lexer::tokens::RESERVED_LOOKUP,
    output::output::{render, OutputFormat},
    tokenize, tokens_as_strings, Lexer, Position, TokenKind,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PROGRAM: &str = r#"// factorial
function fact(int n) {
    if (n <= 1) { return 1; }
    return n * fact(n - 1); /* recursive */
}

float ratio = 45.67 / 2;
bool ok = not (ratio >= 10.5) and true;
string name = "it's \"done\"";
int xs[3];
"#;

#[test]
fn test_analyze_program() {
    let tokens = analyze(PROGRAM, false).unwrap();

    assert_eq!(
        tokens_as_strings(&tokens[..17]),
        vec![
            "NEWLINE",
            "FUNCTION",
            "IDENTIFIER(fact)",
            "LEFT_PAREN",
            "INT",
            "IDENTIFIER(n)",
            "RIGHT_PAREN",
            "LEFT_BRACE",
            "NEWLINE",
            "IF",
            "LEFT_PAREN",
            "IDENTIFIER(n)",
            "LESS_EQUAL",
            "NUMBER(1)",
            "RIGHT_PAREN",
            "LEFT_BRACE",
            "RETURN",
        ]
    );

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.position, Position::new(11, 1));

    let string = tokens
        .iter()
        .find(|token| token.kind == TokenKind::StringLiteral)
        .unwrap();
    assert_eq!(string.value, r#""it's \"done\"""#);
    assert_eq!(string.position, Position::new(9, 15));

    assert!(tokens.iter().all(|token| token.kind != TokenKind::Comment));
}

#[test]
fn test_analyze_program_verbose() {
    let tokens = analyze(PROGRAM, true).unwrap();
    let comments: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Comment)
        .map(|token| token.value.as_str())
        .collect();

    assert_eq!(comments, vec!["// factorial", "/* recursive */"]);
}

#[test]
fn test_error_report() {
    let source = "int a = 1;\nint b = a # 2;\n";
    let error = analyze(source, false).unwrap_err();

    assert_eq!(*error.get_position(), Position::new(2, 11));
    assert_eq!(
        display_error(&error, source, "main.lang"),
        "Error: UnrecognisedToken\n-> main.lang\n  |\n2 | int b = a # 2;\n  | ----------^\n"
    );
}

#[test]
fn test_render_report_formats() {
    let tokens = analyze("int x = 10 + 5;", false).unwrap();

    let simple = render(&tokens, OutputFormat::Simple).unwrap();
    assert!(simple.starts_with("Tokens:\n  INT\n  IDENTIFIER(x)\n"));
    assert!(simple.ends_with("Total tokens: 7\n  Lines processed: 1"));

    let json = render(&tokens, OutputFormat::Json).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains("\"type\": \"NUMBER\""));
    assert!(!json.contains("EOF"));
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "int", "x", "_y1", "true", "while", "and", "42", "3.14", "\"s\\\"q\"", "'c'",
            "==", "!=", "<=", ">=", "<", ">", "=", "+", "-", "*", "/", "%", ";", ",", "(",
            ")", "{", "}", "[", "]", " ", "\t", "\n", "// note\n", "/* block */",
        ]),
        0..40,
    )
    .prop_map(|pieces| pieces.join(" "))
}

fn char_index_to_byte(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset: usize = source[line_start..]
        .chars()
        .take(column - 1)
        .map(char::len_utf8)
        .sum();

    line_start + offset
}

proptest! {
    #[test]
    fn test_tokenize_is_deterministic(source in source_strategy()) {
        let first = tokenize(source.as_str(), false, false);
        let second = tokenize(source.as_str(), false, false);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_covered_input_always_scans(source in source_strategy()) {
        let tokens = tokenize(source.as_str(), true, true).unwrap();
        let eofs = tokens.iter().filter(|token| token.kind == TokenKind::Eof).count();

        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_verbose_tokens_cover_source(source in source_strategy()) {
        let tokens = tokenize(source.as_str(), false, false).unwrap();
        let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();

        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_positions_are_monotonic(source in source_strategy()) {
        let tokens = tokenize(source.as_str(), false, false).unwrap();

        for pair in tokens.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);

            if previous.kind == TokenKind::Newline {
                prop_assert_eq!(next.line(), previous.line() + 1);
                prop_assert_eq!(next.column(), 1);
            } else {
                prop_assert_eq!(next.line(), previous.line());
                prop_assert!(next.column() > previous.column());
            }
        }
    }

    #[test]
    fn test_literal_text_round_trips(source in source_strategy()) {
        let tokens = tokenize(source.as_str(), true, true).unwrap();

        for token in &tokens {
            if token.is_one_of_many(&[TokenKind::Number, TokenKind::StringLiteral, TokenKind::Identifier]) {
                let start = char_index_to_byte(&source, token.line(), token.column());
                prop_assert_eq!(&source[start..start + token.value.len()], token.value.as_str());
            }
        }
    }

    #[test]
    fn test_identifier_shaped_words(word in "[a-zA-Z_][a-zA-Z0-9_]{0,8}") {
        let tokens = tokenize(word.as_str(), true, true).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        match RESERVED_LOOKUP.get(word.as_str()) {
            Some(kind) => prop_assert_eq!(tokens[0].kind, *kind),
            None => prop_assert_eq!(tokens[0].kind, TokenKind::Identifier),
        }
        prop_assert_eq!(&tokens[0].value, &word);
    }
}

#[test]
fn test_every_keyword_alone() {
    for (word, kind) in RESERVED_LOOKUP.iter() {
        let tokens = tokenize(*word, true, true).unwrap();

        assert_eq!(tokens.len(), 2, "{word}");
        assert_eq!(tokens[0].kind, *kind, "{word}");
        assert_ne!(tokens[0].kind, TokenKind::Identifier, "{word}");
    }
    assert_eq!(RESERVED_LOOKUP.len(), 15);
}

#[test]
fn test_lexer_instances_share_rules_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("int v{i} = {i};");
                Lexer::new(source).tokenize(true, true).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}

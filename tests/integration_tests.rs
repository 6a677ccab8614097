//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the lexer the way a parser would: pull tokens until
//! end-of-input, then inspect kinds, lexemes, lines and diagnostics.

use houselang::{
    config::LexerConfig,
    format_error,
    lexer::{
        lexer::{diagnose, tokenize, Lexer},
        tokens::TokenKind,
    },
};

const PROGRAM: &str = "\
blueprint area(tile w, tile h) {
    /* multiply the sides
       and hand it back */
    home w * h;
}

room main() {
    tile total = area(3, -4);
    while (total >= 0 && total != 10) {
        total -= 1; // count down
        total++;
    }
    view(total);
}
";

#[test]
fn test_lex_program() {
    let tokens = tokenize(PROGRAM.to_string(), Some("area.house".to_string()));

    assert!(diagnose(&tokens).is_empty());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(tokens.last().unwrap().line, 15);

    let home = tokens.iter().find(|t| t.kind == TokenKind::Home).unwrap();
    assert_eq!(home.line, 4);

    let room = tokens.iter().find(|t| t.kind == TokenKind::Room).unwrap();
    assert_eq!(room.line, 7);

    let negative = tokens.iter().find(|t| t.lexeme == "-4").unwrap();
    assert_eq!(negative.kind, TokenKind::Number);
    assert_eq!(negative.line, 8);

    let kinds: Vec<TokenKind> = tokens
        .iter()
        .filter(|t| t.line == 10)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::MinusAssign,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );

    let view = tokens.iter().find(|t| t.kind == TokenKind::View).unwrap();
    assert_eq!(view.line, 13);
}

#[test]
fn test_pull_loop() {
    let mut lexer = Lexer::new("beam num = 50 + 20;".to_string(), None);
    let mut kinds = vec![];

    loop {
        let token = lexer.next_token();
        kinds.push(token.kind);
        if token.kind == TokenKind::Eof {
            break;
        }
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::Beam,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_diagnostics_render() {
    let source = "tile a = 1;\ntile b = a ~ 2;\n";
    let tokens = tokenize(source.to_string(), Some("bad.house".to_string()));
    let errors = diagnose(&tokens);

    assert_eq!(errors.len(), 1);

    let unknown = tokens.iter().find(|t| t.kind == TokenKind::Unknown).unwrap();
    assert_eq!(unknown.lexeme, "~");
    assert_eq!(unknown.line, 2);

    let rendered = format_error(&errors[0], source, "bad.house");
    assert!(rendered.starts_with("Error: UnrecognisedToken (Unrecognised character `~`)\n"));
    assert!(rendered.contains("2 | tile b = a ~ 2;\n"));
    assert!(rendered.ends_with("  | -----------^\n"));
}

#[test]
fn test_wider_lexeme_bound() {
    let config = LexerConfig::default().with_max_lexeme_len(64);
    let mut lexer = Lexer::with_config(
        "tile a_really_long_identifier;".to_string(),
        None,
        config,
    );

    lexer.next_token();
    let ident = lexer.next_token();

    assert_eq!(ident.lexeme, "a_really_long_identifier");
    assert!(!ident.is_truncated());
}

use std::rc::Rc;

use tracing::{debug, trace};

use crate::{config::LexerConfig, errors::errors::Error, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Pull-based scanner over one source text.
///
/// The cursor is a byte offset that never moves backwards and never passes
/// the end of the text. `line` counts every `\n` consumed so far, including
/// the ones inside comments.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    config: LexerConfig,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        Lexer::with_config(source, file, LexerConfig::default())
    }

    pub fn with_config(source: String, file: Option<String>, config: LexerConfig) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            file: file_name,
            config,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The current, not yet consumed byte.
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// The byte immediately following the current one, without consuming
    /// anything. `None` when either of them is past the end of the text.
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&predicate) {
            self.pos += 1;
        }
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        let scanned = &self.source[start..self.pos];
        let lexeme = self.config.clamp_lexeme(scanned);

        if lexeme.len() < scanned.len() {
            trace!(
                line = self.line,
                length = scanned.len(),
                kept = lexeme.len(),
                "lexeme truncated"
            );
        }

        MK_TOKEN!(
            kind,
            lexeme.to_string(),
            self.line,
            Span {
                start: self.position(start),
                end: self.position(self.pos),
            }
        )
    }

    /// Produces the next token.
    ///
    /// Once the end of the text is reached every further call returns an
    /// `Eof` token at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start = self.pos;
        let token = match self.current() {
            None => MK_TOKEN!(
                TokenKind::Eof,
                String::from("EOF"),
                self.line,
                Span {
                    start: self.position(start),
                    end: self.position(start),
                }
            ),
            Some(c) if c.is_ascii_alphabetic() || c == b'_' => self.scan_word(start),
            Some(c) if c.is_ascii_digit() => self.scan_number(start),
            Some(c) => self.scan_symbol(c, start),
        };

        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        token
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.current() {
            match c {
                b' ' | b'\t' | b'\r' => self.advance_n(1),
                b'\n' => {
                    self.line += 1;
                    self.advance_n(1);
                }
                b'/' => match self.peek() {
                    Some(b'/') => self.skip_line_comment(),
                    Some(b'*') => self.skip_block_comment(),
                    // A lone slash is the division operator.
                    _ => return,
                },
                _ => return,
            }
        }
    }

    /// Skips `//` up to, not including, the terminating newline so the newline
    /// is still counted by the caller.
    fn skip_line_comment(&mut self) {
        self.advance_while(|c| c != b'\n');
    }

    /// Skips a `/* ... */` comment. An unterminated comment swallows the rest
    /// of the text.
    fn skip_block_comment(&mut self) {
        let opened_at = self.line;
        self.advance_n(2);

        while let Some(c) = self.current() {
            if c == b'*' && self.peek() == Some(b'/') {
                self.advance_n(2);
                return;
            }
            if c == b'\n' {
                self.line += 1;
            }
            self.advance_n(1);
        }

        debug!(line = opened_at, file = %self.file, "unterminated block comment runs to end of input");
    }

    fn scan_word(&mut self, start: usize) -> Token {
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == b'_');

        let kind = TokenKind::reserved(&self.source[start..self.pos]).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, start)
    }

    /// Scans a decimal integer literal. `start` may point at a leading `-`
    /// that has already been consumed.
    fn scan_number(&mut self, start: usize) -> Token {
        self.advance_while(|c| c.is_ascii_digit());
        self.make_token(TokenKind::Number, start)
    }

    /// Picks the two-character operator if the next byte completes one,
    /// otherwise the single-character fallback.
    fn digraph(&mut self, start: usize, pairs: &[(u8, TokenKind)], single: TokenKind) -> Token {
        let next = self.peek();
        let kind = match pairs.iter().find(|(second, _)| Some(*second) == next) {
            Some((_, kind)) => {
                self.advance_n(2);
                *kind
            }
            None => {
                self.advance_n(1);
                single
            }
        };

        self.make_token(kind, start)
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.advance_n(1);
        self.make_token(kind, start)
    }

    fn scan_symbol(&mut self, c: u8, start: usize) -> Token {
        match c {
            b'(' => self.single(start, TokenKind::OpenParen),
            b')' => self.single(start, TokenKind::CloseParen),
            b'{' => self.single(start, TokenKind::OpenCurly),
            b'}' => self.single(start, TokenKind::CloseCurly),
            b'[' => self.single(start, TokenKind::OpenBracket),
            b']' => self.single(start, TokenKind::CloseBracket),
            b';' => self.single(start, TokenKind::Semicolon),
            b':' => self.single(start, TokenKind::Colon),
            b',' => self.single(start, TokenKind::Comma),
            b'.' => self.single(start, TokenKind::Period),
            b'%' => self.single(start, TokenKind::Percent),
            b'\'' => self.single(start, TokenKind::SingleQuote),
            b'"' => self.single(start, TokenKind::DoubleQuote),

            b'!' => self.digraph(start, &[(b'=', TokenKind::NotEquals)], TokenKind::Not),
            b'=' => self.digraph(start, &[(b'=', TokenKind::Equals)], TokenKind::Assign),
            b'+' => self.digraph(
                start,
                &[(b'+', TokenKind::Increment), (b'=', TokenKind::PlusAssign)],
                TokenKind::Plus,
            ),
            // A minus directly followed by a digit is the sign of a literal,
            // so `a-5` lexes as `a`, `-5`.
            b'-' if self.peek().is_some_and(|next| next.is_ascii_digit()) => {
                self.advance_n(1);
                self.scan_number(start)
            }
            b'-' => self.digraph(
                start,
                &[(b'-', TokenKind::Decrement), (b'=', TokenKind::MinusAssign)],
                TokenKind::Minus,
            ),
            b'*' => self.digraph(start, &[(b'=', TokenKind::StarAssign)], TokenKind::Star),
            b'/' => self.digraph(start, &[(b'=', TokenKind::SlashAssign)], TokenKind::Slash),
            b'<' => self.digraph(start, &[(b'=', TokenKind::LessEquals)], TokenKind::Less),
            b'>' => self.digraph(start, &[(b'=', TokenKind::GreaterEquals)], TokenKind::Greater),

            b'&' => self.digraph(start, &[(b'&', TokenKind::And)], TokenKind::Ampersand),
            // There is no bitwise-or token: a bare `|` is unknown.
            b'|' => self.digraph(start, &[(b'|', TokenKind::Or)], TokenKind::Unknown),

            _ => self.scan_unknown(start),
        }
    }

    /// Consumes one whole character, which may span several bytes.
    fn scan_unknown(&mut self, start: usize) -> Token {
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);

        self.advance_n(width);
        self.make_token(TokenKind::Unknown, start)
    }
}

/// Lexes `source` to completion. The returned tokens end with exactly one
/// `Eof` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    tokenize_with_config(source, file, LexerConfig::default())
}

pub fn tokenize_with_config(source: String, file: Option<String>, config: LexerConfig) -> Vec<Token> {
    let mut lex = Lexer::with_config(source, file, config);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            break;
        }
    }

    debug!(count = tokens.len(), lines = lex.line(), file = %lex.file(), "tokenized");
    tokens
}

/// Collects the diagnostics carried by a token stream: unrecognised
/// characters and truncated lexemes, in source order.
pub fn diagnose(tokens: &[Token]) -> Vec<Error> {
    tokens.iter().filter_map(Error::from_token).collect()
}

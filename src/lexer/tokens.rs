use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // Data types
        map.insert("tile", TokenKind::Tile);
        map.insert("glass", TokenKind::Glass);
        map.insert("brick", TokenKind::Brick);
        map.insert("beam", TokenKind::Beam);
        map.insert("space", TokenKind::Space);
        map.insert("wall", TokenKind::Wall);
        map.insert("house", TokenKind::House);
        // Control flow
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("room", TokenKind::Room);
        map.insert("door", TokenKind::Door);
        map.insert("ground", TokenKind::Ground);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("crack", TokenKind::Crack);
        // Others
        map.insert("blueprint", TokenKind::Blueprint);
        map.insert("view", TokenKind::View);
        map.insert("write", TokenKind::Write);
        map.insert("home", TokenKind::Home);
        map.insert("solid", TokenKind::Solid);
        map.insert("fragile", TokenKind::Fragile);
        map.insert("cement", TokenKind::Cement);
        map.insert("roof", TokenKind::Roof);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Unknown,

    Number,
    Identifier,

    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %

    Increment, // ++
    Decrement, // --

    Assign,      // =
    PlusAssign,  // +=
    MinusAssign, // -=
    StarAssign,  // *=
    SlashAssign, // /=

    Greater,       // >
    Less,          // <
    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=

    And, // &&
    Or,  // ||
    Not, // !

    Semicolon,
    Colon,
    Comma,
    Period,
    Ampersand,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    SingleQuote,
    DoubleQuote,

    // Reserved: data types
    Tile,
    Glass,
    Brick,
    Beam,
    Space,
    Wall,
    House,

    // Reserved: control flow
    If,
    Else,
    Room,
    Door,
    Ground,
    For,
    While,
    Do,
    Crack,

    // Reserved: others
    Blueprint,
    View,
    Write,
    Home,
    Solid,
    Fragile,
    Cement,
    Roof,
}

impl TokenKind {
    /// Looks up a whole word in the reserved-word table.
    ///
    /// Matching is exact and case-sensitive: `beam` is reserved, `Beam` and
    /// `beams` are not.
    pub fn reserved(word: &str) -> Option<TokenKind> {
        RESERVED_LOOKUP.get(word).copied()
    }

    /// Stable name used by the driver's token listing and by log output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "TOK_EOF",
            TokenKind::Unknown => "TOK_UNKNOWN",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Plus => "TOK_PLUS",
            TokenKind::Minus => "TOK_MINUS",
            TokenKind::Star => "TOK_MULTIPLY",
            TokenKind::Slash => "TOK_DIVIDE",
            TokenKind::Percent => "TOK_MODULO",
            TokenKind::Increment => "TOK_INCREMENT",
            TokenKind::Decrement => "TOK_DECREMENT",
            TokenKind::Assign => "TOK_ASSIGN",
            TokenKind::PlusAssign => "TOK_ADD_ASSIGN",
            TokenKind::MinusAssign => "TOK_SUB_ASSIGN",
            TokenKind::StarAssign => "TOK_MUL_ASSIGN",
            TokenKind::SlashAssign => "TOK_DIV_ASSIGN",
            TokenKind::Greater => "TOK_GREATER_THAN",
            TokenKind::Less => "TOK_LESS_THAN",
            TokenKind::Equals => "TOK_EQUALS",
            TokenKind::NotEquals => "TOK_NOT_EQUAL",
            TokenKind::LessEquals => "TOK_LT_EQUAL",
            TokenKind::GreaterEquals => "TOK_GT_EQUAL",
            TokenKind::And => "TOK_AND",
            TokenKind::Or => "TOK_OR",
            TokenKind::Not => "TOK_NOT",
            TokenKind::Semicolon => "TOK_SEMICOLON",
            TokenKind::Colon => "TOK_COLON",
            TokenKind::Comma => "TOK_COMMA",
            TokenKind::Period => "TOK_PERIOD",
            TokenKind::Ampersand => "TOK_AMPERSAND",
            TokenKind::OpenCurly => "TOK_OP_BRACE",
            TokenKind::CloseCurly => "TOK_CL_BRACE",
            TokenKind::OpenBracket => "TOK_OP_BRACKET",
            TokenKind::CloseBracket => "TOK_CL_BRACKET",
            TokenKind::OpenParen => "TOK_OP_PARENTHESES",
            TokenKind::CloseParen => "TOK_CL_PARENTHESES",
            TokenKind::SingleQuote => "TOK_SNGL_QUOTE",
            TokenKind::DoubleQuote => "TOK_DBL_QUOTE",
            TokenKind::Tile => "TOK_TILE",
            TokenKind::Glass => "TOK_GLASS",
            TokenKind::Brick => "TOK_BRICK",
            TokenKind::Beam => "TOK_BEAM",
            TokenKind::Space => "TOK_SPACE",
            TokenKind::Wall => "TOK_WALL",
            TokenKind::House => "TOK_HOUSE",
            TokenKind::If => "TOK_IF",
            TokenKind::Else => "TOK_ELSE",
            TokenKind::Room => "TOK_ROOM",
            TokenKind::Door => "TOK_DOOR",
            TokenKind::Ground => "TOK_GROUND",
            TokenKind::For => "TOK_FOR",
            TokenKind::While => "TOK_WHILE",
            TokenKind::Do => "TOK_DO",
            TokenKind::Crack => "TOK_CRACK",
            TokenKind::Blueprint => "TOK_BLUEPRINT",
            TokenKind::View => "TOK_VIEW",
            TokenKind::Write => "TOK_WRITE",
            TokenKind::Home => "TOK_HOME",
            TokenKind::Solid => "TOK_SOLID",
            TokenKind::Fragile => "TOK_FRAGILE",
            TokenKind::Cement => "TOK_CEMENT",
            TokenKind::Roof => "TOK_ROOF",
        }
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Tile
                | TokenKind::Glass
                | TokenKind::Brick
                | TokenKind::Beam
                | TokenKind::Space
                | TokenKind::Wall
                | TokenKind::House
        )
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Number)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Byte range of the source text the token was scanned from. This covers
    /// the whole scanned text even when `lexeme` was truncated.
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type: {:<20} Lexeme: '{}'\t(Line: {})",
            self.kind.name(),
            self.lexeme,
            self.line
        )
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Number of source bytes the token covers.
    pub fn source_len(&self) -> usize {
        (self.span.end.0 - self.span.start.0) as usize
    }

    /// Whether the lexeme was cut short of the scanned source text.
    pub fn is_truncated(&self) -> bool {
        !self.is_eof() && self.source_len() > self.lexeme.len()
    }
}

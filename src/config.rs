//! Lexer configuration.
//!
//! The only tunable is the lexeme bound. Tokens whose source text is longer
//! than the bound keep a truncated lexeme; the token's span still covers the
//! full text.

/// Capacity of the language's historical fixed lexeme buffer (15 bytes
/// including the terminator).
pub const DEFAULT_MAX_LEXEME_LEN: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Maximum lexeme length in bytes, at least 1.
    max_lexeme_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
        }
    }
}

impl LexerConfig {
    pub fn max_lexeme_len(&self) -> usize {
        self.max_lexeme_len
    }

    /// Sets the lexeme bound. A bound of 0 is raised to 1.
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len.max(1);
        self
    }

    /// Cuts `text` down to the lexeme bound, keeping the longest prefix that
    /// ends on a character boundary. The first character is always kept, even
    /// when it alone is wider than the bound.
    pub fn clamp_lexeme<'a>(&self, text: &'a str) -> &'a str {
        if text.len() <= self.max_lexeme_len {
            return text;
        }

        let mut end = self.max_lexeme_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = text.chars().next().map_or(0, char::len_utf8);
        }
        &text[..end]
    }
}

//! Error types for lexical diagnostics.
//!
//! The lexer never fails: every problem it meets is represented in the token
//! stream itself. This module turns the interesting tokens back into
//! structured errors with a source position, for callers that want to report
//! them:
//!
//! - Unrecognised characters (`TokenKind::Unknown`)
//! - Lexemes cut short by the configured bound

pub mod errors;

#[cfg(test)]
mod tests;

//! Lexical analysis for the house language.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for a parser. It handles:
//!
//! - Reserved words, identifiers and signed integer literals
//! - One- and two-character operators with one byte of lookahead
//! - Line (`//`) and block (`/* */`) comments, and line tracking
//! - Unrecognised characters, passed on as `Unknown` tokens

pub mod lexer;
pub mod tokens;

//! Lexical analysis module for the tokenizer.
//!
//! This module contains the scanner that turns a character stream into
//! classified tokens. It handles:
//!
//! - A cursor with lookahead, line tracking and snapshot/restore
//! - Independent recognizers, one per token class, tried in registry order
//! - Recovery from unterminated strings, brackets and comments
//! - Token position tracking for error reporting

pub mod classes;
pub mod lexer;
pub mod recognizers;
pub mod tokens;

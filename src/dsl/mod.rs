//! Parser for the scheme-description language.
//!
//! This module provides a small line-oriented language for describing
//! named logic schemes built from instructions wired through named
//! input/output ports.
//!
//! # Grammar Overview
//!
//! ```text
//! module      = { scheme }
//! scheme      = "SCHEME" ident ident_list "->" ident_list newline*
//!               { instruction } "END" newline*
//! instruction = ident ident_list "->" ident_list newline*
//! ident_list  = { ident }
//!
//! ident       = letter { letter | digit }
//! comment     = ';' { any_char }   (to end of line)
//! ```
//!
//! Keywords are case-sensitive: `SCHEME` and `END` are reserved, while
//! `scheme` or `SCHEMES` are ordinary identifiers. Newlines are optional
//! statement separators — blank lines and comment-only lines may appear
//! freely between statements. Port lists may be empty on either side of
//! the arrow.
//!
//! # Example
//!
//! ```text
//! ; half adder over gate primitives
//! SCHEME adder a b -> s c
//!   XOR a b -> s
//!   AND a b -> c
//! END
//! ```
//!
//! An instruction's name is either a primitive operation or a reference
//! to another scheme; the grammar does not distinguish the two. Binding
//! names across schemes is left to downstream passes such as
//! [`crate::flatten`].

mod ast;
mod lexer;
mod parser;

pub use ast::{Instruction, Module, Scheme};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a scheme-description string into a module.
#[tracing::instrument(skip_all, fields(source_len = input.len()))]
pub fn parse(input: &str) -> Result<Module> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a scheme-description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Module> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::ElogicError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}

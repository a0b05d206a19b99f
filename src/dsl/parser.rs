//! Parser for the scheme-description DSL.
//!
//! A one-token-lookahead recursive descent over the token stream. Each
//! completed scheme is appended to the module under construction and
//! each completed instruction to its scheme's body, in source order.
//! The first token that matches no expected grammar continuation aborts
//! the parse; there is no recovery and no partial module is returned.

use super::ast::{Instruction, Module, Scheme};
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{ElogicError, Result};

/// Parser for the scheme-description DSL.
///
/// All parse state lives in this value, so independent parses are
/// reentrant and may run concurrently.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parse the entire input into a module.
    pub fn parse(&mut self) -> Result<Module> {
        let mut module = Module::new();

        self.skip_newlines();
        while self.current.kind != TokenKind::Eof {
            let scheme = self.parse_scheme()?;
            module.schemes.push(scheme);
        }

        Ok(module)
    }

    /// SchemeDecl := "SCHEME" Ident IdentList "->" IdentList Newline*
    ///               Instruction* "END" Newline*
    fn parse_scheme(&mut self) -> Result<Scheme> {
        self.expect(TokenKind::Scheme)?;
        let name = self.expect(TokenKind::Ident)?.text;
        let inputs = self.parse_ident_list();
        self.expect(TokenKind::Arrow)?;
        let outputs = self.parse_ident_list();
        self.skip_newlines();

        let mut scheme = Scheme::new(name, inputs, outputs);
        while self.current.kind == TokenKind::Ident {
            scheme.body.push(self.parse_instruction()?);
        }

        self.expect(TokenKind::End)?;
        self.skip_newlines();

        Ok(scheme)
    }

    /// Instruction := Ident IdentList "->" IdentList Newline*
    fn parse_instruction(&mut self) -> Result<Instruction> {
        let name = self.expect(TokenKind::Ident)?.text;
        let inputs = self.parse_ident_list();
        self.expect(TokenKind::Arrow)?;
        let outputs = self.parse_ident_list();
        self.skip_newlines();

        Ok(Instruction::new(name, inputs, outputs))
    }

    /// IdentList := Ident*
    ///
    /// Zero identifiers is a valid, empty list. The list ends at the
    /// first non-identifier token, typically `->` or a newline.
    fn parse_ident_list(&mut self) -> Vec<String> {
        let mut idents = Vec::new();
        while self.current.kind == TokenKind::Ident {
            idents.push(self.current.text.clone());
            self.advance();
        }
        idents
    }

    /// Newlines are optional statement separators; any run of them is
    /// skipped at statement boundaries.
    fn skip_newlines(&mut self) {
        while self.current.kind == TokenKind::Newline {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance();
            Ok(tok)
        } else {
            Err(ElogicError::syntax(
                self.current.line,
                self.current.column,
                format!("expected {}, got {}", describe(kind), found(&self.current)),
            ))
        }
    }
}

fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Scheme => "'SCHEME'",
        TokenKind::End => "'END'",
        TokenKind::Ident => "an identifier",
        TokenKind::Arrow => "'->'",
        TokenKind::Newline => "end of line",
        TokenKind::Eof => "end of input",
        TokenKind::Unknown => "unknown token",
    }
}

fn found(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Newline => "end of line".to_string(),
        _ => format!("'{}'", token.text),
    }
}

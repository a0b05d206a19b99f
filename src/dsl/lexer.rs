//! Lexer (tokenizer) for the scheme-description DSL.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The `SCHEME` keyword
    Scheme,
    /// The `END` keyword
    End,
    /// An identifier (scheme name, operation name, port name)
    Ident,
    /// The arrow `->` separating input ports from output ports
    Arrow,
    /// Newline
    Newline,
    /// End of input
    Eof,
    /// A character sequence matching no lexical rule. The lexer never
    /// fails; the parser reports this as a syntax error when it next
    /// checks the grammar.
    Unknown,
}

/// Lexer for tokenizing scheme-description input.
///
/// Identifiers are a letter followed by letters or digits. Keyword
/// recognition is by exact, case-sensitive match against the accumulated
/// identifier text, so `scheme` and `SCHEMES` are ordinary identifiers.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token. Once the input is exhausted, every further
    /// call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let ch = match self.chars.peek().copied() {
            Some((_, ch)) => ch,
            None => {
                return Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: self.line,
                    column: self.column,
                };
            }
        };

        let start_line = self.line;
        let start_column = self.column;

        let token = match ch {
            '\n' => {
                self.advance();
                Token {
                    kind: TokenKind::Newline,
                    text: "\n".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            '-' => {
                self.advance();
                if let Some(&(_, '>')) = self.chars.peek() {
                    self.advance();
                    Token {
                        kind: TokenKind::Arrow,
                        text: "->".to_string(),
                        line: start_line,
                        column: start_column,
                    }
                } else {
                    // A lone '-' is not a token; the following character
                    // is left for the next call.
                    Token {
                        kind: TokenKind::Unknown,
                        text: "-".to_string(),
                        line: start_line,
                        column: start_column,
                    }
                }
            }
            _ if ch.is_alphabetic() => {
                let text = self.read_identifier();
                let kind = match text.as_str() {
                    "SCHEME" => TokenKind::Scheme,
                    "END" => TokenKind::End,
                    _ => TokenKind::Ident,
                };
                Token {
                    kind,
                    text,
                    line: start_line,
                    column: start_column,
                }
            }
            _ => {
                self.advance();
                Token {
                    kind: TokenKind::Unknown,
                    text: ch.to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
        };

        token
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((_, ch)) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == ';' {
                // Skip comment until end of line; the newline itself is
                // left to be tokenized.
                while let Some(&(_, c)) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let kind = tok.kind;
            out.push(kind);
            if kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn test_lexer_basic() {
        let input = "XOR a b -> s";
        let mut lexer = Lexer::new(input);

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.text, "XOR");
        assert_eq!((tok.line, tok.column), (1, 1));

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.text, "a");

        let tok = lexer.next_token();
        assert_eq!(tok.text, "b");

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Arrow);

        let tok = lexer.next_token();
        assert_eq!(tok.text, "s");

        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_lexer_keywords_exact() {
        let mut lexer = Lexer::new("SCHEME END scheme SCHEMES End");
        assert_eq!(lexer.next_token().kind, TokenKind::Scheme);
        assert_eq!(lexer.next_token().kind, TokenKind::End);
        // Case-sensitive: these are all identifiers
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_lexer_lone_dash() {
        let mut lexer = Lexer::new("a - b");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Unknown);
        assert_eq!(tok.text, "-");

        // The character after the dash is not consumed
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.text, "b");
    }

    #[test]
    fn test_lexer_comments_and_newlines() {
        let input = "a ; trailing comment\n; full-line comment\nb";
        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_positions() {
        let mut lexer = Lexer::new("ab\n  cd");
        assert_eq!(lexer.next_token().column, 1);
        assert_eq!(lexer.next_token().kind, TokenKind::Newline);

        let tok = lexer.next_token();
        assert_eq!(tok.text, "cd");
        assert_eq!((tok.line, tok.column), (2, 3));
    }

    #[test]
    fn test_lexer_unknown_char() {
        let mut lexer = Lexer::new("a @ b");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);

        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Unknown);
        assert_eq!(tok.text, "@");

        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_lexer_ident_with_digits() {
        let mut lexer = Lexer::new("t0 x2y");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.text, "t0");
        assert_eq!(lexer.next_token().text, "x2y");
    }
}

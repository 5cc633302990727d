use std::fmt::{self, Display};

use phf::phf_map;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "fn" => TokenKind::Function,
    "let" => TokenKind::Let,
};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) literal: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, literal: S) -> Self {
        Token { kind, literal: literal.into() }
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub(crate) fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Illegal, EndOfInput,

    Identifier, Integer,

    Assign, Plus, Minus, Bang, Asterisk, Slash,
    LessThan, GreaterThan, Equal, NotEqual,

    Comma, Semicolon,
    LParen, RParen, LBrace, RBrace,

    Function, Let,
}

impl TokenKind {
    /// Resolves an identifier-shaped literal against the keyword table.
    pub fn lookup_identifier(text: &str) -> TokenKind {
        KEYWORDS.get(text).copied().unwrap_or(TokenKind::Identifier)
    }

    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Illegal => "ILLEGAL",
            EndOfInput => "EOF",
            Identifier => "IDENT",
            Integer => "INT",
            Assign => "=",
            Plus => "+",
            Minus => "-",
            Bang => "!",
            Asterisk => "*",
            Slash => "/",
            LessThan => "<",
            GreaterThan => ">",
            Equal => "==",
            NotEqual => "!=",
            Comma => ",",
            Semicolon => ";",
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            Function => "FUNCTION",
            Let => "LET",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve_to_their_kinds() {
        assert_eq!(TokenKind::Function, TokenKind::lookup_identifier("fn"));
        assert_eq!(TokenKind::Let, TokenKind::lookup_identifier("let"));
    }

    #[test]
    fn other_words_are_identifiers() {
        for word in ["letter", "fun", "x", "_", "LET"].iter() {
            assert_eq!(TokenKind::Identifier, TokenKind::lookup_identifier(word));
        }
    }

    #[test]
    fn kinds_display_with_diagnostic_names() {
        assert_eq!("IDENT", TokenKind::Identifier.to_string());
        assert_eq!("INT", TokenKind::Integer.to_string());
        assert_eq!("EOF", TokenKind::EndOfInput.to_string());
        assert_eq!("==", TokenKind::Equal.to_string());
        assert_eq!("FUNCTION", TokenKind::Function.to_string());
    }

    #[test]
    fn end_of_input_has_empty_literal() {
        let token = Token::end_of_input();
        assert_eq!(&TokenKind::EndOfInput, token.kind());
        assert_eq!("", token.literal());
    }
}

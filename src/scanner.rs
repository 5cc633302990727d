use crate::token::{Token, TokenKind};
use peekmore::{PeekMore, PeekMoreIterator};
use std::str::Chars;
use tracing::trace;

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    literal_buffer: String,
    finished: bool,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Token;

    /// Yields every token up to and including the first end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.finished { return None }

        let token = self.next_token();
        if token.is(&TokenKind::EndOfInput) {
            self.finished = true;
        }
        Some(token)
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            literal_buffer: String::new(),
            finished: false,
        }
    }

    /// Produces exactly one token per call. Once the input is exhausted
    /// every further call returns an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let kind = self.next_token_kind();

        let literal = self.literal_buffer.clone();
        self.literal_buffer.clear();

        let token = Token::new(kind, literal);
        trace!(kind = %token.kind, literal = %token.literal, "scanned token");
        token
    }

    fn next_token_kind(&mut self) -> TokenKind {
        let next_char = match self.src.next() {
            Some(c) => c,
            None => return TokenKind::EndOfInput,
        };
        self.literal_buffer.push(next_char);

        use TokenKind::*;
        match next_char {
            '+' => Plus,
            '-' => Minus,
            '*' => Asterisk,
            '/' => Slash,
            '<' => LessThan,
            '>' => GreaterThan,
            '(' => LParen,
            ')' => RParen,
            '{' => LBrace,
            '}' => RBrace,
            ',' => Comma,
            ';' => Semicolon,
            '=' => if self.does_next_match('=') { Equal } else { Assign },
            '!' => if self.does_next_match('=') { NotEqual } else { Bang },
            c if is_letter(&c) => self.extract_identifier(),
            c if c.is_ascii_digit() => self.extract_integer(),
            _ => Illegal,
        }
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.literal_buffer.push(c);
                self.src.next();
                true
            }
            _ => false,
        }
    }

    fn extract_identifier(&mut self) -> TokenKind {
        self.advance_while(is_letter);
        TokenKind::lookup_identifier(self.literal_buffer.as_str())
    }

    fn extract_integer(&mut self) -> TokenKind {
        self.advance_while(char::is_ascii_digit);
        TokenKind::Integer
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.src.peek() {
            if !is_whitespace(c) { break }
            self.src.next();
        }
    }

    fn advance_while(&mut self, should_continue: impl Fn(&char) -> bool) {
        while let Some(&c) = self.src.peek() {
            if !should_continue(&c) { break }
            self.literal_buffer.push(c);
            self.src.next();
        }
    }
}

fn is_letter(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_whitespace(c: &char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

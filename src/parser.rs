use tracing::{debug, trace};

use crate::{
    ast::Program,
    expr::{Expr, Identifier},
    scanner::Scanner,
    stmt::Stmt,
    token::*,
};

/// Binding power of operators, weakest first.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    #[allow(dead_code)]
    Call,
}

impl From<&TokenKind> for Precedence {
    fn from(kind: &TokenKind) -> Self {
        use TokenKind::*;
        match kind {
            Equal | NotEqual => Precedence::Equals,
            LessThan | GreaterThan => Precedence::LessGreater,
            Plus | Minus => Precedence::Sum,
            Slash | Asterisk => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// Deepest expression the parser will build. Evaluation and printing
/// recurse over the tree, so anything deeper is rejected up front.
const MAX_NESTING: usize = 128;

type PrefixParseFn<T> = fn(&mut Parser<T>) -> Option<Expr>;
type InfixParseFn<T> = fn(&mut Parser<T>, Expr) -> Option<Expr>;

pub struct Parser<T> {
    tokens: T,
    current: Token,
    peek: Token,
    errors: Vec<String>,
    depth: usize,
}

impl <'a> From<&'a str> for Parser<Scanner<'a>> {
    fn from(src: &'a str) -> Self {
        Parser::new(Scanner::new(src))
    }
}

impl <T: Iterator<Item = Token>> Parser<T> {
    pub fn new(tokens: T) -> Self {
        let mut parser = Parser {
            tokens,
            current: Token::end_of_input(),
            peek: Token::end_of_input(),
            errors: Vec::new(),
            depth: 0,
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parses statements until end of input. Malformed statements are
    /// logged to `errors` and left out of the returned program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.current.is(&TokenKind::EndOfInput) {
            match self.statement() {
                Some(statement) => statements.push(statement),
                None => self.synchronise(),
            }
            self.advance();
        }

        debug!(statements = statements.len(), errors = self.errors.len(), "parsed program");
        Program { statements }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.let_statement(),
            _ => self.expression_statement(),
        }
    }

    fn let_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        let name = Identifier::new(self.consume(TokenKind::Identifier)?);
        self.consume(TokenKind::Assign)?;
        self.advance();

        let value = self.expression(Precedence::Lowest)?;
        self.match_peek(&TokenKind::Semicolon);

        Some(Stmt::new_let(token, name, value))
    }

    fn expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let expression = self.expression(Precedence::Lowest)?;
        self.match_peek(&TokenKind::Semicolon);
        Some(Stmt::new_expression(token, expression))
    }

    fn expression(&mut self, precedence: Precedence) -> Option<Expr> {
        if self.depth >= MAX_NESTING {
            self.record(String::from("expression nested too deeply"));
            return None
        }
        self.depth += 1;
        let expression = self.climb(precedence);
        self.depth -= 1;
        expression
    }

    fn climb(&mut self, precedence: Precedence) -> Option<Expr> {
        let prefix = match Self::prefix_parse_fn(&self.current.kind) {
            Some(prefix) => prefix,
            None => {
                let message = format!("no prefix parse function for {} found", self.current.kind);
                self.record(message);
                return None
            }
        };

        let mut left = prefix(self)?;

        while !self.peek.is(&TokenKind::Semicolon) && precedence < self.peek_precedence() {
            trace!(?precedence, peek = %self.peek.kind, "climbing");
            let infix = match Self::infix_parse_fn(&self.peek.kind) {
                Some(infix) => infix,
                None => return Some(left),
            };
            self.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn prefix_parse_fn(kind: &TokenKind) -> Option<PrefixParseFn<T>> {
        let f: PrefixParseFn<T> = match kind {
            TokenKind::Identifier => Self::identifier,
            TokenKind::Integer => Self::integer_literal,
            TokenKind::Bang | TokenKind::Minus => Self::prefix_expression,
            TokenKind::LParen => Self::grouped_expression,
            _ => return None,
        };
        Some(f)
    }

    fn infix_parse_fn(kind: &TokenKind) -> Option<InfixParseFn<T>> {
        use TokenKind::*;
        let f: InfixParseFn<T> = match kind {
            Plus | Minus | Slash | Asterisk
            | Equal | NotEqual | LessThan | GreaterThan => Self::infix_expression,
            _ => return None,
        };
        Some(f)
    }

    fn identifier(&mut self) -> Option<Expr> {
        Some(Expr::from(Identifier::new(self.current.clone())))
    }

    fn integer_literal(&mut self) -> Option<Expr> {
        match parse_integer(&self.current.literal) {
            Some(value) => Some(Expr::new_integer_literal(self.current.clone(), value)),
            None => {
                let message = format!("could not parse {:?} as integer", self.current.literal);
                self.record(message);
                None
            }
        }
    }

    fn prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        self.advance();
        let right = self.expression(Precedence::Prefix)?;
        self.bounded(Expr::new_prefix(token, right))
    }

    fn infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let precedence = Precedence::from(&token.kind);
        self.advance();
        let right = self.expression(precedence)?;
        self.bounded(Expr::new_infix(left, token, right))
    }

    /// Left-associative chains grow the tree without recursing, so their
    /// height is checked as each operator node is built.
    fn bounded(&mut self, expression: Expr) -> Option<Expr> {
        if expression.depth() > MAX_NESTING {
            self.record(String::from("expression nested too deeply"));
            return None
        }
        Some(expression)
    }

    fn grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expression = self.expression(Precedence::Lowest)?;
        self.consume(TokenKind::RParen)?;
        Some(expression)
    }

    fn advance(&mut self) {
        let next = self.tokens.next().unwrap_or_else(Token::end_of_input);
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances onto the peek token if it has the given kind, logging a
    /// diagnostic otherwise.
    fn consume(&mut self, kind: TokenKind) -> Option<Token> {
        if self.match_peek(&kind) {
            Some(self.current.clone())
        } else {
            let message = format!(
                "expected next token to be {}, got {} instead",
                kind,
                self.peek.kind
            );
            self.record(message);
            None
        }
    }

    fn match_peek(&mut self, kind: &TokenKind) -> bool {
        if self.peek.is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::from(&self.peek.kind)
    }

    /// Skips the rest of a malformed statement.
    fn synchronise(&mut self) {
        while !self.current.is(&TokenKind::Semicolon) && !self.current.is(&TokenKind::EndOfInput) {
            self.advance();
        }
    }

    fn record(&mut self, message: String) {
        debug!(%message, "syntax error");
        self.errors.push(message);
    }
}

/// Converts an integer literal, honouring `0x`, `0o` and `0b` prefixes
/// and treating other leading zeros as octal.
fn parse_integer(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x") | Some("0X") => (&literal[2..], 16),
        Some("0o") | Some("0O") => (&literal[2..], 8),
        Some("0b") | Some("0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None
    }
    i64::from_str_radix(digits, radix).ok()
}

use tracing::debug;

use crate::ast::{Node, Operator};
use crate::config::parser::MAX_NESTING_DEPTH;
use crate::errors::{ExprError, ExprResult};
use crate::frontend::lexer::Lexer;
use crate::frontend::token::Symbol;

/// Recursive descent parser over the four grammar rules.
///
/// Every rule starts on the first symbol of its construct and returns with the
/// lexer positioned just after it. `+`/`-` bind tighter than `*`/`/` and both
/// levels are right-associative.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_max_depth(source, MAX_NESTING_DEPTH)
    }

    pub fn with_max_depth(source: &'a str, max_depth: usize) -> Self {
        Self {
            lexer: Lexer::new(source),
            depth: 0,
            max_depth,
        }
    }

    /// Parse the first complete expression of the input. Anything after it is
    /// left unread.
    pub fn parse(mut self) -> ExprResult<Node> {
        let root = self.expression()?;
        if !self.lexer.is_at_end() {
            let position = self.lexer.position();
            let rest = self.lexer.remaining();
            debug!(
                position,
                ignored = rest.chars().count() + 1,
                "input continues past the expression, ignoring trailing content"
            );
        }
        Ok(root)
    }

    fn nested<T>(&mut self, rule: fn(&mut Self) -> ExprResult<T>) -> ExprResult<T> {
        if self.depth >= self.max_depth {
            return Err(ExprError::NestingTooDeep {
                limit: self.max_depth,
                position: self.lexer.position(),
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn expression(&mut self) -> ExprResult<Node> {
        self.nested(Self::parse_expression)
    }

    fn factor(&mut self) -> ExprResult<Node> {
        self.nested(Self::parse_factor)
    }

    fn term(&mut self) -> ExprResult<Node> {
        self.nested(Self::parse_term)
    }

    // <expression> ::= <factor> (* | /) <expression> | <factor>
    fn parse_expression(&mut self) -> ExprResult<Node> {
        let factor = self.factor()?;
        let op = match self.lexer.current() {
            Symbol::Star => Operator::Mul,
            Symbol::Slash => Operator::Div,
            _ => return Ok(factor),
        };
        self.lexer.advance();
        let rest = self.expression()?;
        Ok(Node::binary(op, factor, rest))
    }

    // <factor> ::= <term> (+ | -) <factor> | <term>
    fn parse_factor(&mut self) -> ExprResult<Node> {
        let term = self.term()?;
        let op = match self.lexer.current() {
            Symbol::Plus => Operator::Add,
            Symbol::Minus => Operator::Sub,
            _ => return Ok(term),
        };
        self.lexer.advance();
        let rest = self.factor()?;
        Ok(Node::binary(op, term, rest))
    }

    // <term> ::= { <expression> } | <literal>
    fn parse_term(&mut self) -> ExprResult<Node> {
        if self.lexer.current() != Symbol::LBrace {
            return self.literal();
        }
        let opened_at = self.lexer.position();
        self.lexer.advance();
        let inner = self.expression()?;
        match self.lexer.current() {
            Symbol::RBrace => {
                self.lexer.advance();
                Ok(inner)
            }
            found => Err(ExprError::MalformedGrouping {
                opened_at,
                found: found.to_string(),
                position: self.lexer.position(),
            }),
        }
    }

    // <literal> ::= 0|1|2|3|4|5|6|7|8|9
    fn literal(&mut self) -> ExprResult<Node> {
        let position = self.lexer.position();
        match self.lexer.current() {
            Symbol::Digit(d) => {
                self.lexer.advance();
                Ok(Node::literal(d))
            }
            other => match other.as_char() {
                Some(found) => Err(ExprError::unexpected_symbol("digit or '{'", found, position)),
                None => Err(ExprError::end_of_input("digit or '{'", position)),
            },
        }
    }
}

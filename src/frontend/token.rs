use std::fmt;

use crate::ast::Digit;
use crate::config::parser::{GROUP_CLOSE, GROUP_OPEN};

/// One input character as the grammar sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(Digit),
    Plus,
    Minus,
    Star,
    Slash,
    LBrace,
    RBrace,
    Other(char),
    End,
}

impl Symbol {
    pub fn classify(ch: Option<char>) -> Self {
        let Some(c) = ch else {
            return Symbol::End;
        };
        if let Some(digit) = Digit::from_char(c) {
            return Symbol::Digit(digit);
        }
        match c {
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' => Symbol::Star,
            '/' => Symbol::Slash,
            GROUP_OPEN => Symbol::LBrace,
            GROUP_CLOSE => Symbol::RBrace,
            c => Symbol::Other(c),
        }
    }

    /// The source character, `None` for the end-of-stream sentinel.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Symbol::Digit(d) => Some(d.as_char()),
            Symbol::Plus => Some('+'),
            Symbol::Minus => Some('-'),
            Symbol::Star => Some('*'),
            Symbol::Slash => Some('/'),
            Symbol::LBrace => Some(GROUP_OPEN),
            Symbol::RBrace => Some(GROUP_CLOSE),
            Symbol::Other(c) => Some(c),
            Symbol::End => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "'{}'", c),
            None => write!(f, "end of input"),
        }
    }
}

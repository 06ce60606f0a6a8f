use std::str::Chars;

use crate::frontend::token::Symbol;

/// Single-symbol lookahead cursor over the input text.
///
/// The cursor only moves forward; `current` always holds the most recently
/// read character or [`Symbol::End`] once the input is exhausted.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    current: Symbol,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            chars: source.chars(),
            current: Symbol::End,
            position: 0,
        };
        lexer.advance();
        lexer
    }

    pub fn current(&self) -> Symbol {
        self.current
    }

    pub fn current_char(&self) -> Option<char> {
        self.current.as_char()
    }

    /// 1-based column of the current symbol. At the end of input this is one
    /// past the last character.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.current == Symbol::End
    }

    pub fn advance(&mut self) {
        if self.is_at_end() && self.position > 0 {
            return;
        }
        self.current = Symbol::classify(self.chars.next());
        self.position += 1;
    }

    /// Input not yet read, excluding the current symbol.
    pub fn remaining(&self) -> &'a str {
        self.chars.as_str()
    }
}

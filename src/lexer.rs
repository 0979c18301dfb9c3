use std::iter::Peekable;

use crate::token::{self, Op, Token};

pub const SUGGESTED_TOKENS_CAPACITY: usize = 8_192;

/// Strips every character that isn't one of the eight operators.
///
/// Never fails; comments, whitespace and any other text simply vanish.
pub fn normalize(src: &str) -> String {
    src.chars().filter(|&c| token::is_operator(c)).collect()
}

/// Folds the normalized operator string, producing the tokens into the
/// provided buffer.
pub fn fold(ops: &str, tokens: &mut Vec<Token>) {
    Folder::new(ops, tokens).fold();
}

/// A convenience function that allocates a new buffer per folded input and
/// returns it.
pub fn fold_in_new(ops: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(ops.len().min(SUGGESTED_TOKENS_CAPACITY));
    fold(ops, &mut tokens);
    tokens
}

/// The run-length folder.
struct Folder<'src, 'tok> {
    iter: Peekable<std::str::Chars<'src>>,
    tokens: &'tok mut Vec<Token>,
}

impl Folder<'_, '_> {
    /// Scans the operator string until the input is exhausted.
    ///
    /// Tokens are written into the provided tokens buffer.
    fn fold(mut self) {
        assert_eq!(self.tokens.len(), 0, "must pass clean tokens buffer");
        while let Some(c) = self.advance() {
            // Anything that survived normalization is an operator. Stray
            // characters are still skipped so unnormalized input can't panic.
            let Some(op) = Op::from_char(c) else {
                continue;
            };
            let token = if op.is_foldable() {
                self.run(c, op)
            } else {
                // Loops and I/O stay as singletons, even when repeated.
                Token::single(op)
            };
            self.tokens.push(token);
        }
    }

    /// Consumes the rest of a run of `c`, whose first character was already
    /// taken.
    fn run(&mut self, c: char, op: Op) -> Token {
        let mut count = 1;
        while self.peek() == Some(c) {
            self.advance();
            count += 1;
        }
        Token::new(op, count)
    }
}

impl Folder<'_, '_> {
    fn new<'src, 'tok>(ops: &'src str, tokens: &'tok mut Vec<Token>) -> Folder<'src, 'tok> {
        Folder {
            iter: ops.chars().peekable(),
            tokens,
        }
    }

    /// Returns the next character and advances the iterator.
    fn advance(&mut self) -> Option<char> {
        self.iter.next()
    }

    /// Returns the next character without advancing the iterator.
    fn peek(&mut self) -> Option<char> {
        self.iter.peek().copied()
    }
}

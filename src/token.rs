use std::fmt;

/// A folded operator and how many times it repeats.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Token {
    pub op: Op,
    count: usize,
}

impl Token {
    /// The token a `[-]` loop collapses into.
    pub const CLEAR: Token = Token {
        op: Op::Clear,
        count: 1,
    };

    pub fn new(op: Op, count: usize) -> Token {
        assert!(count >= 1, "token count must be positive");
        Token { op, count }
    }

    /// Constructs a token with a count of one.
    pub fn single(op: Op) -> Token {
        Token { op, count: 1 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The count reduced to the cell's modular range.
    ///
    /// Only meaningful for [`Op::Inc`] and [`Op::Dec`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn byte_amount(&self) -> u8 {
        (self.count % 256) as u8
    }

    pub fn is(&self, op: Op, count: usize) -> bool {
        self.op == op && self.count == count
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}, {})", self.op, self.count)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    /// `>`
    Right,
    /// `<`
    Left,
    /// `+`
    Inc,
    /// `-`
    Dec,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
    /// Sets the current cell to zero. Has no source character; only the
    /// desugarer produces it.
    Clear,
}

impl Op {
    /// Maps a source character to its operator, if it is one of the eight.
    pub const fn from_char(c: char) -> Option<Op> {
        Some(match c {
            '>' => Op::Right,
            '<' => Op::Left,
            '+' => Op::Inc,
            '-' => Op::Dec,
            '.' => Op::Output,
            ',' => Op::Input,
            '[' => Op::LoopStart,
            ']' => Op::LoopEnd,
            _ => return None,
        })
    }

    /// Whether consecutive runs of this operator fold into a single token.
    pub const fn is_foldable(self) -> bool {
        matches!(self, Op::Right | Op::Left | Op::Inc | Op::Dec)
    }
}

pub fn is_operator(c: char) -> bool {
    Op::from_char(c).is_some()
}

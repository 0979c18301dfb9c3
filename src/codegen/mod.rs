use std::{
    fmt::{self, Write},
    marker::PhantomData,
};

use crate::token::{Op, Token};

pub mod interface;
pub mod lang;

#[cfg(test)]
mod tests;

pub use interface::{generate, generate_all, Selection, Target, TargetDescriptor, UnknownTarget};

const DEFAULT_CODE_CAPACITY: usize = 4 * 1024; // 4 KiB

/// Program-wide facts the prologue and epilogue depend on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Features {
    /// Whether any input token exists. Without one, no input-reading
    /// facility is emitted.
    pub reads_input: bool,
}

impl Features {
    pub fn of(tokens: &[Token]) -> Features {
        Features {
            reads_input: tokens.iter().any(|token| token.op == Op::Input),
        }
    }
}

/// The textual rendering rules of one target language.
///
/// Every generated program must honor the same contract: a tape of
/// [`TAPE_SIZE`](crate::TAPE_SIZE) zeroed byte cells, a pointer starting at
/// the first cell without bounds checks, modulo-256 cell arithmetic, one
/// byte written per output, and `0` stored when input is exhausted.
///
/// Implementors only say how each token kind is spelled; [`Generator`] owns
/// nesting, indentation and repetition.
pub trait Lang {
    /// One level of indentation.
    const INDENT: &'static str = "    ";

    /// Depth of the statements that make up the program body.
    const BASE_DEPTH: usize;

    /// A statement for loop bodies that would otherwise be empty, for
    /// languages that don't allow them.
    const EMPTY_BODY: Option<&'static str> = None;

    /// Writes one byte from the current cell.
    const OUTPUT: &'static str;

    /// Reads one byte into the current cell.
    const INPUT: &'static str;

    const CLEAR: &'static str;

    const LOOP_START: &'static str;

    /// `None` for indentation-delimited blocks.
    const LOOP_END: Option<&'static str>;

    /// Everything before the program body, at depth zero.
    fn prologue(code: &mut Code, features: Features);

    /// Everything after the program body, at depth zero.
    fn epilogue(code: &mut Code, features: Features);

    fn move_right(code: &mut Code, n: usize);

    fn move_left(code: &mut Code, n: usize);

    fn add(code: &mut Code, n: u8);

    fn sub(code: &mut Code, n: u8);

    /// Runs `stmt` exactly `n` times.
    fn repeat(code: &mut Code, n: usize, stmt: &str);
}

/// Drives a [`Lang`] over a token sequence.
///
/// Loop balance is never validated. A loop end with no open loop renders
/// nothing; loops still open at the end of the program are left unclosed.
pub struct Generator<L> {
    code: Code,
    features: Features,
    /// Number of currently open loops.
    open_loops: usize,
    /// Whether nothing was rendered since the last loop start.
    fresh_block: bool,
    _lang: PhantomData<L>,
}

impl<L> Generator<L>
where
    L: Lang,
{
    pub fn new(features: Features) -> Generator<L> {
        Generator {
            code: Code::new(L::INDENT),
            features,
            open_loops: 0,
            fresh_block: false,
            _lang: PhantomData,
        }
    }

    pub fn generate(mut self, tokens: &[Token]) -> String {
        L::prologue(&mut self.code, self.features);

        self.code.depth = L::BASE_DEPTH;
        for &token in tokens {
            self.g_token(token);
        }
        if self.fresh_block {
            self.g_empty_body();
        }

        self.code.depth = 0;
        L::epilogue(&mut self.code, self.features);

        self.code.finish()
    }

    fn g_token(&mut self, token: Token) {
        let n = token.count();
        match token.op {
            Op::Right => L::move_right(&mut self.code, n),
            Op::Left => L::move_left(&mut self.code, n),
            Op::Inc => L::add(&mut self.code, token.byte_amount()),
            Op::Dec => L::sub(&mut self.code, token.byte_amount()),
            Op::Output => self.g_repeated(n, L::OUTPUT),
            Op::Input => self.g_repeated(n, L::INPUT),
            Op::Clear => self.code.line(L::CLEAR),
            Op::LoopStart => {
                self.code.line(L::LOOP_START);
                self.code.depth += 1;
                self.open_loops += 1;
                self.fresh_block = true;
                return;
            }
            Op::LoopEnd => {
                // Nothing to close at the floor.
                if self.open_loops == 0 {
                    return;
                }
                if self.fresh_block {
                    self.g_empty_body();
                }
                self.code.depth -= 1;
                self.open_loops -= 1;
                if let Some(end) = L::LOOP_END {
                    self.code.line(end);
                }
            }
        }
        self.fresh_block = false;
    }

    fn g_repeated(&mut self, n: usize, stmt: &str) {
        if n == 1 {
            self.code.line(stmt);
        } else {
            L::repeat(&mut self.code, n, stmt);
        }
    }

    fn g_empty_body(&mut self) {
        if let Some(filler) = L::EMPTY_BODY {
            self.code.line(filler);
        }
    }
}

/// An indentation-aware program text buffer.
pub struct Code {
    buf: String,
    indent: &'static str,
    depth: usize,
}

impl Code {
    fn new(indent: &'static str) -> Code {
        Code {
            buf: String::with_capacity(DEFAULT_CODE_CAPACITY),
            indent,
            depth: 0,
        }
    }

    /// Writes a line at the current depth.
    pub fn line(&mut self, f: impl fmt::Display) {
        for _ in 0..self.depth {
            self.buf.push_str(self.indent);
        }
        writeln!(self.buf, "{f}").expect("code emit should be infallible");
    }

    /// Writes a line one level deeper than the current depth.
    pub fn nested(&mut self, f: impl fmt::Display) {
        self.depth += 1;
        self.line(f);
        self.depth -= 1;
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Runs `f` one level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Code)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn finish(self) -> String {
        self.buf
    }
}

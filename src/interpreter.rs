use std::io::{self, BufWriter, Read, Write};

use crate::{
    token::{Op, Token},
    TAPE_SIZE,
};

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// The generated programs leave this undefined; in-process it is an
    /// error instead.
    #[error("data pointer left the tape at cell {from} moving {op:?} by {count}")]
    PointerOutOfBounds { from: usize, op: Op, count: usize },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Executes `tokens` against the given byte streams.
///
/// Loops are nested the way the generators render them: a loop end with no
/// open loop is ignored, and loops still open at the end of the program run
/// up to its end.
pub fn execute<R, W>(tokens: &[Token], input: R, output: W) -> Result<(), ExecutionError>
where
    R: Read,
    W: Write,
{
    let program = link(tokens);
    let mut machine = Machine {
        tape: vec![0; TAPE_SIZE].into_boxed_slice(),
        dp: 0,
        input,
        output: BufWriter::new(output),
    };
    machine.run(&program)?;
    machine.output.flush()?;
    Ok(())
}

/// A convenience function that runs `tokens` over an in-memory input and
/// returns everything written.
pub fn execute_bytes(tokens: &[Token], input: &[u8]) -> Result<Vec<u8>, ExecutionError> {
    let mut output = Vec::new();
    execute(tokens, input, &mut output)?;
    Ok(output)
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Instr {
    Token(Token),
    /// Jumps to the given index if the current cell is zero.
    LoopStart(usize),
    /// Jumps back to the given index (the loop body) if the current cell is
    /// nonzero.
    LoopEnd(usize),
}

/// Flattens `tokens`, resolving every loop to its jump targets.
fn link(tokens: &[Token]) -> Vec<Instr> {
    let mut program = Vec::with_capacity(tokens.len());
    let mut open = Vec::new();
    for &token in tokens {
        match token.op {
            Op::LoopStart => {
                open.push(program.len());
                // Patched once the loop is closed.
                program.push(Instr::LoopStart(0));
            }
            Op::LoopEnd => {
                if let Some(start) = open.pop() {
                    close(&mut program, start);
                }
            }
            _ => program.push(Instr::Token(token)),
        }
    }
    while let Some(start) = open.pop() {
        close(&mut program, start);
    }
    program
}

fn close(program: &mut Vec<Instr>, start: usize) {
    program.push(Instr::LoopEnd(start + 1));
    program[start] = Instr::LoopStart(program.len());
}

struct Machine<R, W: Write> {
    tape: Box<[u8]>,
    dp: usize,
    input: R,
    output: BufWriter<W>,
}

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    fn run(&mut self, program: &[Instr]) -> Result<(), ExecutionError> {
        let mut pc = 0;
        while let Some(&instr) = program.get(pc) {
            match instr {
                Instr::Token(token) => self.step(token)?,
                Instr::LoopStart(end) if self.tape[self.dp] == 0 => {
                    pc = end;
                    continue;
                }
                Instr::LoopEnd(body) if self.tape[self.dp] != 0 => {
                    pc = body;
                    continue;
                }
                Instr::LoopStart(_) | Instr::LoopEnd(_) => (),
            }
            pc += 1;
        }
        Ok(())
    }

    fn step(&mut self, token: Token) -> Result<(), ExecutionError> {
        let n = token.count();
        match token.op {
            Op::Right => {
                self.dp = self
                    .dp
                    .checked_add(n)
                    .filter(|&dp| dp < TAPE_SIZE)
                    .ok_or_else(|| self.out_of_bounds(token))?;
            }
            Op::Left => {
                self.dp = self
                    .dp
                    .checked_sub(n)
                    .ok_or_else(|| self.out_of_bounds(token))?;
            }
            Op::Inc => {
                let cell = &mut self.tape[self.dp];
                *cell = cell.wrapping_add(token.byte_amount());
            }
            Op::Dec => {
                let cell = &mut self.tape[self.dp];
                *cell = cell.wrapping_sub(token.byte_amount());
            }
            Op::Output => {
                for _ in 0..n {
                    self.output.write_all(&[self.tape[self.dp]])?;
                }
            }
            Op::Input => {
                for _ in 0..n {
                    self.tape[self.dp] = self.getchar()?;
                }
            }
            Op::Clear => self.tape[self.dp] = 0,
            Op::LoopStart | Op::LoopEnd => unreachable!("loops are linked before execution"),
        }
        Ok(())
    }

    /// Reads one byte, or `0` once the input is exhausted.
    fn getchar(&mut self) -> io::Result<u8> {
        let mut byte = [0];
        match self.input.read_exact(&mut byte) {
            Ok(()) => Ok(byte[0]),
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => Ok(0),
            Err(error) => Err(error),
        }
    }

    fn out_of_bounds(&self, token: Token) -> ExecutionError {
        ExecutionError::PointerOutOfBounds {
            from: self.dp,
            op: token.op,
            count: token.count(),
        }
    }
}

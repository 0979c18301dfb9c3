use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

pub struct Python;

impl Lang for Python {
    const BASE_DEPTH: usize = 0;
    const EMPTY_BODY: Option<&'static str> = Some("pass");

    const OUTPUT: &'static str = "out.append(tape[dp])";
    const INPUT: &'static str = "tape[dp] = getchar()";
    const CLEAR: &'static str = "tape[dp] = 0";
    const LOOP_START: &'static str = "while tape[dp] != 0:";
    const LOOP_END: Option<&'static str> = None;

    fn prologue(code: &mut Code, features: Features) {
        code.line("import sys");
        code.blank();
        code.line(f!("tape = bytearray({TAPE_SIZE})"));
        code.line("dp = 0");
        code.line("out = bytearray()");
        code.blank();
        if features.reads_input {
            code.line("def getchar():");
            code.nested("b = sys.stdin.buffer.read(1)");
            code.nested("return b[0] if b else 0");
            code.blank();
        }
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.line("sys.stdout.buffer.write(out)");
        code.line("sys.stdout.buffer.flush()");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp += {n}"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp -= {n}"));
    }

    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] + {n}) & 255"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] - {n}) & 255"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("for _ in range({n}): {stmt}"));
    }
}

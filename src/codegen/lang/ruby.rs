use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

pub struct Ruby;

impl Lang for Ruby {
    const INDENT: &'static str = "  ";
    const BASE_DEPTH: usize = 0;

    const OUTPUT: &'static str = "out << tape[dp]";
    const INPUT: &'static str = "tape[dp] = getchar";
    const CLEAR: &'static str = "tape[dp] = 0";
    const LOOP_START: &'static str = "while tape[dp] != 0";
    const LOOP_END: Option<&'static str> = Some("end");

    fn prologue(code: &mut Code, features: Features) {
        if features.reads_input {
            code.line("$stdin.binmode");
        }
        code.line("$stdout.binmode");
        code.line(f!("tape = Array.new({TAPE_SIZE}, 0)"));
        code.line("dp = 0");
        code.line("out = []");
        code.blank();
        if features.reads_input {
            code.line("def getchar");
            code.nested("$stdin.getbyte || 0");
            code.line("end");
            code.blank();
        }
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.line("$stdout.write(out.pack(\"C*\"))");
        code.line("$stdout.flush");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp += {n}"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp -= {n}"));
    }

    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] + {n}) & 0xFF"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] - {n}) & 0xFF"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("{n}.times {{ {stmt} }}"));
    }
}

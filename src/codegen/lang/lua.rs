use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

/// Lua tables are one-based, so the pointer starts at `1`.
pub struct Lua;

impl Lang for Lua {
    const BASE_DEPTH: usize = 0;

    const OUTPUT: &'static str = "out[#out + 1] = string.char(tape[dp])";
    const INPUT: &'static str = "tape[dp] = getchar()";
    const CLEAR: &'static str = "tape[dp] = 0";
    const LOOP_START: &'static str = "while tape[dp] ~= 0 do";
    const LOOP_END: Option<&'static str> = Some("end");

    fn prologue(code: &mut Code, features: Features) {
        code.line("local tape = {}");
        code.line(f!("for i = 1, {TAPE_SIZE} do tape[i] = 0 end"));
        code.line("local dp = 1");
        code.line("local out = {}");
        code.blank();
        if features.reads_input {
            code.line("local function getchar()");
            code.indented(|code| {
                code.line("local c = io.read(1)");
                code.line("if c == nil then return 0 end");
                code.line("return string.byte(c)");
            });
            code.line("end");
            code.blank();
        }
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.line("io.write(table.concat(out))");
        code.line("io.flush()");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp = dp + {n}"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp = dp - {n}"));
    }

    // `%` floors, so negative intermediates wrap correctly.
    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] + {n}) % 256"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] - {n}) % 256"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("for _ = 1, {n} do {stmt} end"));
    }
}

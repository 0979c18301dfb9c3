use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

pub struct Rust;

impl Lang for Rust {
    const BASE_DEPTH: usize = 1;

    const OUTPUT: &'static str = "out.write_all(&[tape[dp]]).unwrap();";
    const INPUT: &'static str = "tape[dp] = getchar();";
    const CLEAR: &'static str = "tape[dp] = 0;";
    const LOOP_START: &'static str = "while tape[dp] != 0 {";
    const LOOP_END: Option<&'static str> = Some("}");

    fn prologue(code: &mut Code, features: Features) {
        code.line("#![allow(unused)]");
        code.blank();
        if features.reads_input {
            code.line("use std::io::{self, Read, Write};");
        } else {
            code.line("use std::io::{self, Write};");
        }
        code.blank();
        code.line("fn main() {");
        code.indented(|code| {
            code.line(f!("let mut tape = vec![0u8; {TAPE_SIZE}];"));
            code.line("let mut dp: usize = 0;");
            code.line("let mut out = io::BufWriter::new(io::stdout().lock());");
            if features.reads_input {
                code.line("let mut stdin = io::stdin().lock();");
                code.line("let mut getchar = || -> u8 {");
                code.indented(|code| {
                    code.line("let mut buf = [0u8; 1];");
                    code.line("match stdin.read(&mut buf) {");
                    code.nested("Ok(1) => buf[0],");
                    code.nested("_ => 0,");
                    code.line("}");
                });
                code.line("};");
            }
        });
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.nested("out.flush().unwrap();");
        code.line("}");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp += {n};"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp -= {n};"));
    }

    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = tape[dp].wrapping_add({n});"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = tape[dp].wrapping_sub({n});"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("for _ in 0..{n} {{"));
        code.nested(stmt);
        code.line("}");
    }
}

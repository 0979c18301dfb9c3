use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

pub struct CSharp;

impl Lang for CSharp {
    const BASE_DEPTH: usize = 2;

    const OUTPUT: &'static str = "stdout.WriteByte(tape[dp]);";
    const INPUT: &'static str = "{ int c = stdin.ReadByte(); tape[dp] = (byte)(c == -1 ? 0 : c); }";
    const CLEAR: &'static str = "tape[dp] = 0;";
    const LOOP_START: &'static str = "while (tape[dp] != 0) {";
    const LOOP_END: Option<&'static str> = Some("}");

    fn prologue(code: &mut Code, features: Features) {
        code.line("using System;");
        code.line("using System.IO;");
        code.blank();
        code.line("class Program {");
        code.indented(|code| {
            code.line("static void Main() {");
            code.indented(|code| {
                code.line(f!("byte[] tape = new byte[{TAPE_SIZE}];"));
                code.line("int dp = 0;");
                if features.reads_input {
                    code.line("Stream stdin = Console.OpenStandardInput();");
                }
                code.line("Stream stdout = new BufferedStream(Console.OpenStandardOutput());");
            });
        });
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.indented(|code| {
            code.nested("stdout.Flush();");
            code.line("}");
        });
        code.line("}");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp += {n};"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp -= {n};"));
    }

    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (byte)((tape[dp] + {n}) & 255);"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (byte)((tape[dp] - {n}) & 255);"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("for (int i = 0; i < {n}; i++) {{"));
        code.nested(stmt);
        code.line("}");
    }
}

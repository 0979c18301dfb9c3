use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

pub struct Go;

impl Lang for Go {
    const INDENT: &'static str = "\t";
    const BASE_DEPTH: usize = 1;

    const OUTPUT: &'static str = "out.WriteByte(tape[dp])";
    const INPUT: &'static str = "tape[dp] = getchar()";
    const CLEAR: &'static str = "tape[dp] = 0";
    const LOOP_START: &'static str = "for tape[dp] != 0 {";
    const LOOP_END: Option<&'static str> = Some("}");

    fn prologue(code: &mut Code, features: Features) {
        code.line("package main");
        code.blank();
        code.line("import (");
        code.nested("\"bufio\"");
        code.nested("\"os\"");
        code.line(")");
        code.blank();
        code.line("func main() {");
        code.indented(|code| {
            code.line(f!("tape := make([]byte, {TAPE_SIZE})"));
            code.line("dp := 0");
            // Keeps programs that never touch the tape compiling.
            code.line("_, _ = tape, dp");
            code.line("out := bufio.NewWriter(os.Stdout)");
            code.line("defer out.Flush()");
            if features.reads_input {
                code.line("in := bufio.NewReader(os.Stdin)");
                code.line("getchar := func() byte {");
                code.indented(|code| {
                    code.line("b, err := in.ReadByte()");
                    code.line("if err != nil {");
                    code.nested("return 0");
                    code.line("}");
                    code.line("return b");
                });
                code.line("}");
            }
        });
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.line("}");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp += {n}"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp -= {n}"));
    }

    // Byte arithmetic wraps natively; `n` always fits a byte constant.
    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] += {n}"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] -= {n}"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("for i := 0; i < {n}; i++ {{"));
        code.nested(stmt);
        code.line("}");
    }
}

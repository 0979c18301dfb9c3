use std::format_args as f;

use crate::{
    codegen::{Code, Features, Lang},
    TAPE_SIZE,
};

pub struct Cpp;

impl Lang for Cpp {
    const BASE_DEPTH: usize = 1;

    const OUTPUT: &'static str = "std::cout.put(static_cast<char>(tape[dp]));";
    // Scoped so that consecutive reads don't redeclare `c`.
    const INPUT: &'static str = "{ int c = std::cin.get(); tape[dp] = c == EOF ? 0 : static_cast<unsigned char>(c); }";
    const CLEAR: &'static str = "tape[dp] = 0;";
    const LOOP_START: &'static str = "while (tape[dp] != 0) {";
    const LOOP_END: Option<&'static str> = Some("}");

    fn prologue(code: &mut Code, features: Features) {
        if features.reads_input {
            code.line("#include <cstdio>");
        }
        code.line("#include <cstddef>");
        code.line("#include <iostream>");
        code.blank();
        code.line("int main() {");
        code.indented(|code| {
            code.line(f!("static unsigned char tape[{TAPE_SIZE}] = {{0}};"));
            code.line("std::size_t dp = 0;");
            code.line("std::ios::sync_with_stdio(false);");
            if features.reads_input {
                code.line("std::cin.tie(nullptr);");
            }
        });
    }

    fn epilogue(code: &mut Code, _features: Features) {
        code.nested("std::cout.flush();");
        code.nested("return 0;");
        code.line("}");
    }

    fn move_right(code: &mut Code, n: usize) {
        code.line(f!("dp += {n};"));
    }

    fn move_left(code: &mut Code, n: usize) {
        code.line(f!("dp -= {n};"));
    }

    fn add(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] + {n}) & 255;"));
    }

    fn sub(code: &mut Code, n: u8) {
        code.line(f!("tape[dp] = (tape[dp] - {n}) & 255;"));
    }

    fn repeat(code: &mut Code, n: usize, stmt: &str) {
        code.line(f!("for (int i = 0; i < {n}; ++i) {{"));
        code.nested(stmt);
        code.line("}");
    }
}

use crate::{
    codegen::{generate, Target},
    compile,
    token::{Op, Token},
    util::test_utils::codegen_tests,
};

codegen_tests!(
    fn test_python_program() {
        let target = Python;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        import sys

        tape = bytearray(300000)
        dp = 0
        out = bytearray()

        def getchar():
            b = sys.stdin.buffer.read(1)
            return b[0] if b else 0

        tape[dp] = (tape[dp] + 2) & 255
        dp += 1
        tape[dp] = getchar()
        tape[dp] = 0
        dp -= 1
        while tape[dp] != 0:
            tape[dp] = (tape[dp] - 1) & 255
            dp += 1
            tape[dp] = (tape[dp] + 1) & 255
            dp -= 1
        dp += 1
        out.append(tape[dp])
        sys.stdout.buffer.write(out)
        sys.stdout.buffer.flush()
    "#;
    }

    fn test_go_program() {
        let target = Go;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        package main

        import (
            "bufio"
            "os"
        )

        func main() {
            tape := make([]byte, 300000)
            dp := 0
            _, _ = tape, dp
            out := bufio.NewWriter(os.Stdout)
            defer out.Flush()
            in := bufio.NewReader(os.Stdin)
            getchar := func() byte {
                b, err := in.ReadByte()
                if err != nil {
                    return 0
                }
                return b
            }
            tape[dp] += 2
            dp += 1
            tape[dp] = getchar()
            tape[dp] = 0
            dp -= 1
            for tape[dp] != 0 {
                tape[dp] -= 1
                dp += 1
                tape[dp] += 1
                dp -= 1
            }
            dp += 1
            out.WriteByte(tape[dp])
        }
    "#;
    }

    fn test_cpp_program() {
        let target = Cpp;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        #include <cstdio>
        #include <cstddef>
        #include <iostream>

        int main() {
            static unsigned char tape[300000] = {0};
            std::size_t dp = 0;
            std::ios::sync_with_stdio(false);
            std::cin.tie(nullptr);
            tape[dp] = (tape[dp] + 2) & 255;
            dp += 1;
            { int c = std::cin.get(); tape[dp] = c == EOF ? 0 : static_cast<unsigned char>(c); }
            tape[dp] = 0;
            dp -= 1;
            while (tape[dp] != 0) {
                tape[dp] = (tape[dp] - 1) & 255;
                dp += 1;
                tape[dp] = (tape[dp] + 1) & 255;
                dp -= 1;
            }
            dp += 1;
            std::cout.put(static_cast<char>(tape[dp]));
            std::cout.flush();
            return 0;
        }
    "#;
    }

    fn test_csharp_program() {
        let target = CSharp;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        using System;
        using System.IO;

        class Program {
            static void Main() {
                byte[] tape = new byte[300000];
                int dp = 0;
                Stream stdin = Console.OpenStandardInput();
                Stream stdout = new BufferedStream(Console.OpenStandardOutput());
                tape[dp] = (byte)((tape[dp] + 2) & 255);
                dp += 1;
                { int c = stdin.ReadByte(); tape[dp] = (byte)(c == -1 ? 0 : c); }
                tape[dp] = 0;
                dp -= 1;
                while (tape[dp] != 0) {
                    tape[dp] = (byte)((tape[dp] - 1) & 255);
                    dp += 1;
                    tape[dp] = (byte)((tape[dp] + 1) & 255);
                    dp -= 1;
                }
                dp += 1;
                stdout.WriteByte(tape[dp]);
                stdout.Flush();
            }
        }
    "#;
    }

    fn test_lua_program() {
        let target = Lua;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        local tape = {}
        for i = 1, 300000 do tape[i] = 0 end
        local dp = 1
        local out = {}

        local function getchar()
            local c = io.read(1)
            if c == nil then return 0 end
            return string.byte(c)
        end

        tape[dp] = (tape[dp] + 2) % 256
        dp = dp + 1
        tape[dp] = getchar()
        tape[dp] = 0
        dp = dp - 1
        while tape[dp] ~= 0 do
            tape[dp] = (tape[dp] - 1) % 256
            dp = dp + 1
            tape[dp] = (tape[dp] + 1) % 256
            dp = dp - 1
        end
        dp = dp + 1
        out[#out + 1] = string.char(tape[dp])
        io.write(table.concat(out))
        io.flush()
    "#;
    }

    fn test_ruby_program() {
        let target = Ruby;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        $stdin.binmode
        $stdout.binmode
        tape = Array.new(300000, 0)
        dp = 0
        out = []

        def getchar
          $stdin.getbyte || 0
        end

        tape[dp] = (tape[dp] + 2) & 0xFF
        dp += 1
        tape[dp] = getchar
        tape[dp] = 0
        dp -= 1
        while tape[dp] != 0
          tape[dp] = (tape[dp] - 1) & 0xFF
          dp += 1
          tape[dp] = (tape[dp] + 1) & 0xFF
          dp -= 1
        end
        dp += 1
        out << tape[dp]
        $stdout.write(out.pack("C*"))
        $stdout.flush
    "#;
    }

    fn test_rust_program() {
        let target = Rust;
        let src = "++>,[-]<[->+<]>.";
        let code_ok = r#"
        #![allow(unused)]

        use std::io::{self, Read, Write};

        fn main() {
            let mut tape = vec![0u8; 300000];
            let mut dp: usize = 0;
            let mut out = io::BufWriter::new(io::stdout().lock());
            let mut stdin = io::stdin().lock();
            let mut getchar = || -> u8 {
                let mut buf = [0u8; 1];
                match stdin.read(&mut buf) {
                    Ok(1) => buf[0],
                    _ => 0,
                }
            };
            tape[dp] = tape[dp].wrapping_add(2);
            dp += 1;
            tape[dp] = getchar();
            tape[dp] = 0;
            dp -= 1;
            while tape[dp] != 0 {
                tape[dp] = tape[dp].wrapping_sub(1);
                dp += 1;
                tape[dp] = tape[dp].wrapping_add(1);
                dp -= 1;
            }
            dp += 1;
            out.write_all(&[tape[dp]]).unwrap();
            out.flush().unwrap();
        }
    "#;
    }

    fn test_python_empty_program() {
        let target = Python;
        let src = "";
        let code_ok = r#"
        import sys

        tape = bytearray(300000)
        dp = 0
        out = bytearray()

        sys.stdout.buffer.write(out)
        sys.stdout.buffer.flush()
    "#;
    }

    fn test_go_empty_program() {
        let target = Go;
        let src = "";
        let code_ok = r#"
        package main

        import (
            "bufio"
            "os"
        )

        func main() {
            tape := make([]byte, 300000)
            dp := 0
            _, _ = tape, dp
            out := bufio.NewWriter(os.Stdout)
            defer out.Flush()
        }
    "#;
    }

    fn test_cpp_empty_program() {
        let target = Cpp;
        let src = "";
        let code_ok = r#"
        #include <cstddef>
        #include <iostream>

        int main() {
            static unsigned char tape[300000] = {0};
            std::size_t dp = 0;
            std::ios::sync_with_stdio(false);
            std::cout.flush();
            return 0;
        }
    "#;
    }

    fn test_rust_empty_program() {
        let target = Rust;
        let src = "";
        let code_ok = r#"
        #![allow(unused)]

        use std::io::{self, Write};

        fn main() {
            let mut tape = vec![0u8; 300000];
            let mut dp: usize = 0;
            let mut out = io::BufWriter::new(io::stdout().lock());
            out.flush().unwrap();
        }
    "#;
    }

    fn test_python_empty_loop_body() {
        let target = Python;
        let src = "+[[]>].";
        let code_ok = r#"
        import sys

        tape = bytearray(300000)
        dp = 0
        out = bytearray()

        tape[dp] = (tape[dp] + 1) & 255
        while tape[dp] != 0:
            while tape[dp] != 0:
                pass
            dp += 1
        out.append(tape[dp])
        sys.stdout.buffer.write(out)
        sys.stdout.buffer.flush()
    "#;
    }

    fn test_ruby_unmatched_loop_end() {
        let target = Ruby;
        let src = "+].";
        let code_ok = r#"
        $stdout.binmode
        tape = Array.new(300000, 0)
        dp = 0
        out = []

        tape[dp] = (tape[dp] + 1) & 0xFF
        out << tape[dp]
        $stdout.write(out.pack("C*"))
        $stdout.flush
    "#;
    }

    fn test_lua_wraparound_amounts() {
        let target = Lua;
        let src = &"+".repeat(300);
        let code_ok = r#"
        local tape = {}
        for i = 1, 300000 do tape[i] = 0 end
        local dp = 1
        local out = {}

        tape[dp] = (tape[dp] + 44) % 256
        io.write(table.concat(out))
        io.flush()
    "#;
    }
);

#[test]
fn test_repeated_io_renders_counted_loops() {
    let tokens = [
        Token::new(Op::Input, 2),
        Token::new(Op::Output, 3),
    ];
    let expectations = [
        (
            Target::Python,
            "for _ in range(2): tape[dp] = getchar()",
            "for _ in range(3): out.append(tape[dp])",
        ),
        (
            Target::Go,
            "for i := 0; i < 2; i++ {\n\t\ttape[dp] = getchar()\n\t}",
            "for i := 0; i < 3; i++ {\n\t\tout.WriteByte(tape[dp])\n\t}",
        ),
        (
            Target::Cpp,
            "for (int i = 0; i < 2; ++i) {\n        { int c = std::cin.get();",
            "for (int i = 0; i < 3; ++i) {\n        std::cout.put(",
        ),
        (
            Target::CSharp,
            "for (int i = 0; i < 2; i++) {\n            { int c = stdin.ReadByte();",
            "for (int i = 0; i < 3; i++) {\n            stdout.WriteByte(tape[dp]);",
        ),
        (
            Target::Lua,
            "for _ = 1, 2 do tape[dp] = getchar() end",
            "for _ = 1, 3 do out[#out + 1] = string.char(tape[dp]) end",
        ),
        (
            Target::Ruby,
            "2.times { tape[dp] = getchar }",
            "3.times { out << tape[dp] }",
        ),
        (
            Target::Rust,
            "for _ in 0..2 {\n        tape[dp] = getchar();\n    }",
            "for _ in 0..3 {\n        out.write_all(&[tape[dp]]).unwrap();\n    }",
        ),
    ];
    for (target, input, output) in expectations {
        let code = generate(target, &tokens);
        assert!(code.contains(input), "{target}: missing {input:?} in\n{code}");
        assert!(code.contains(output), "{target}: missing {output:?} in\n{code}");
    }
}

#[test]
fn test_input_facility_is_omitted_without_input() {
    let tokens = compile("++[->+<]>.");
    let markers = [
        (Target::Python, "getchar"),
        (Target::Go, "getchar"),
        (Target::Cpp, "std::cin.get"),
        (Target::CSharp, "OpenStandardInput"),
        (Target::Lua, "getchar"),
        (Target::Ruby, "getchar"),
        (Target::Rust, "getchar"),
    ];
    for (target, marker) in markers {
        let without = generate(target, &tokens);
        assert!(!without.contains(marker), "{target} reads input:\n{without}");
        let with = generate(target, &compile(",."));
        assert!(with.contains(marker), "{target} can't read input:\n{with}");
    }
}

#[test]
fn test_clear_emits_no_loop() {
    for &target in Target::ALL {
        let code = generate(target, &compile("+++++[-]"));
        assert!(!code.contains("while"), "{target}:\n{code}");
        // Go spells its loops with `for`.
        assert!(!code.contains("for tape"), "{target}:\n{code}");
    }
}

#[test]
fn test_cell_amounts_stay_in_byte_range() {
    // 513 is 1 modulo 256.
    let tokens = compile(&"-".repeat(513));
    let expected = [
        (Target::Python, "tape[dp] = (tape[dp] - 1) & 255"),
        (Target::Go, "tape[dp] -= 1"),
        (Target::Cpp, "tape[dp] = (tape[dp] - 1) & 255;"),
        (Target::CSharp, "tape[dp] = (byte)((tape[dp] - 1) & 255);"),
        (Target::Lua, "tape[dp] = (tape[dp] - 1) % 256"),
        (Target::Ruby, "tape[dp] = (tape[dp] - 1) & 0xFF"),
        (Target::Rust, "tape[dp] = tape[dp].wrapping_sub(1);"),
    ];
    assert_eq!(expected.len(), Target::ALL.len());
    for (target, line) in expected {
        let code = generate(target, &tokens);
        assert!(!code.contains("513"), "{target}:\n{code}");
        assert!(code.lines().any(|l| l.trim() == line), "{target}:\n{code}");
    }
}

#[test]
fn test_pointer_moves_keep_full_count() {
    let tokens = compile(&">".repeat(1000));
    for &target in Target::ALL {
        let code = generate(target, &tokens);
        assert!(code.contains("1000"), "{target}:\n{code}");
    }
}

#[test]
fn test_unbalanced_loops_never_fail() {
    let sources = ["]", "]]]+.", "[", "[[[", "+[.]]", "][", "+[-]]"];
    for src in sources {
        for &target in Target::ALL {
            let code = generate(target, &compile(src));
            assert!(!code.is_empty());
        }
    }
}

#[test]
fn test_block_delimiters_match_for_balanced_input() {
    let tokens = compile(include_str!("../../demos/hello.bf"));
    let delimited = [
        (Target::Go, "{", "}"),
        (Target::Cpp, "{", "}"),
        (Target::CSharp, "{", "}"),
        (Target::Rust, "{", "}"),
    ];
    for (target, open, close) in delimited {
        let code = generate(target, &tokens);
        assert_eq!(
            code.matches(open).count(),
            code.matches(close).count(),
            "{target}:\n{code}"
        );
    }
    for target in [Target::Lua, Target::Ruby] {
        let code = generate(target, &tokens);
        let opens = code.lines().filter(|l| l.trim().starts_with("while")).count();
        let ends = code.lines().filter(|l| l.trim() == "end").count();
        assert_eq!(opens, ends, "{target}:\n{code}");
    }
}

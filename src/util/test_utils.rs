use crate::codegen::{self, Target};

/// Compiles `src` and compares the program generated for `target` with the
/// expected text, ignoring trailing whitespace. Tabs are compared as four
/// spaces so that expectations can be written with `indoc!`.
#[track_caller]
pub fn assert_generated(target: Target, src: &str, expected: &str) {
    let tokens = crate::compile(src);
    let actual = codegen::generate(target, &tokens).replace('\t', "    ");
    ::pretty_assertions::assert_eq!(actual.trim_end(), expected.trim_end());
}

macro_rules! codegen_tests {
    (
        $(
            fn $test_name:ident() {
                let target = $target:ident;
                let src = $src:expr;
                let code_ok = $expected:literal;
            }
        )*
    ) => {
        $(
            #[test]
            fn $test_name() {
                crate::util::test_utils::assert_generated(
                    crate::codegen::Target::$target,
                    $src,
                    ::indoc::indoc! { $expected },
                );
            }
        )*
    };
}
pub(crate) use codegen_tests;

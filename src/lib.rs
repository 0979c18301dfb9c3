use tracing::debug;

use crate::token::Token;

/// The lexer strips everything but the eight operators from the source and
/// folds runs of pointer and arithmetic operators into counted tokens.
pub mod lexer;

/// The desugarer rewrites the `[-]` idiom into a single clear token.
pub mod desugar;

/// The code generators map a token sequence into a standalone program in one
/// of the supported target languages.
pub mod codegen;

/// The interpreter executes a token sequence in-process, under the same
/// semantics every generated program follows.
pub mod interpreter;

pub mod token;

pub mod util {
    #[cfg(test)]
    pub(crate) mod test_utils;
}

/// Number of cells on the tape of every generated program.
pub const TAPE_SIZE: usize = 300_000;

/// Runs the front end: normalize, fold, desugar.
///
/// Never fails. Unbalanced loops are passed through untouched.
pub fn compile(src: &str) -> Vec<Token> {
    let ops = lexer::normalize(src);
    let folded = lexer::fold_in_new(&ops);
    let tokens = desugar::desugar(&folded);
    debug!(
        source = src.len(),
        ops = ops.len(),
        folded = folded.len(),
        desugared = tokens.len(),
        "compiled"
    );
    tokens
}

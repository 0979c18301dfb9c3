use crate::token::{Op, Token};

/// Rewrites every `[-]` idiom into a single [`Op::Clear`] token.
///
/// This is a single, non-overlapping, left-to-right pass. Tokens produced by
/// a rewrite are never scanned again, so the output is never longer than the
/// input and is not a fixed point.
pub fn desugar(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut rest = tokens;
    loop {
        match rest {
            [start, body, end, tail @ ..] if is_clear_idiom(start, body, end) => {
                out.push(Token::CLEAR);
                rest = tail;
            }
            [token, tail @ ..] => {
                out.push(*token);
                rest = tail;
            }
            [] => break,
        }
    }
    out
}

/// Only the exact `(LoopStart, 1) (Dec, 1) (LoopEnd, 1)` window qualifies.
fn is_clear_idiom(start: &Token, body: &Token, end: &Token) -> bool {
    start.is(Op::LoopStart, 1) && body.is(Op::Dec, 1) && end.is(Op::LoopEnd, 1)
}

// Trace to stderr when built with the 'debug' feature.
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

pub mod token;
pub mod skeleton;
pub mod parser;
pub mod deal;
mod rpneval;
mod rpnprint;

pub use parser::{ParseError, Postfix, ShuntingParser};
pub use rpneval::{check, eval, EvalErr, Verdict};
pub use rpnprint::decode;
pub use skeleton::{validate, Reject, Validity};
pub use deal::Hand;

/// Evaluate a postfix string, eg: "12+34+*" is 21.
pub fn eval_str(expr: &str) -> Result<f64, EvalErr> {
    eval(&Postfix::from(expr))
}

/// Render a postfix string as infix, eg: "12+3*" is "(1 + 2) * 3".
pub fn decode_str(expr: &str) -> Result<String, EvalErr> {
    decode(&Postfix::from(expr))
}

#[cfg(test)]
mod rpneval_test;

use crate::parser::Postfix;
use crate::rpneval::{check, eval, EvalErr, Verdict};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval_str(expr: &str) -> Result<f64, EvalErr> {
    eval(&Postfix::from(expr))
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval_str("12+34+*").unwrap(), 21.0);
    fuzzy_eq!(eval_str("12+34*+").unwrap(), 15.0);
    fuzzy_eq!(eval_str("12-34*+").unwrap(), 11.0);
}

#[test]
fn test_eval_operand_order() {
    fuzzy_eq!(eval_str("12-").unwrap(), -1.0);
    fuzzy_eq!(eval_str("12/").unwrap(), 0.5);
    fuzzy_eq!(eval_str("123--").unwrap(), 2.0);
    fuzzy_eq!(eval_str("82/2/").unwrap(), 2.0);
}

#[test]
fn test_eval_division_by_zero() {
    assert_eq!(eval_str("1233-/+").unwrap(), f64::INFINITY);
    assert!(eval_str("11-11-/").unwrap().is_nan());
}

#[test]
fn test_eval_precondition() {
    assert_eq!(eval_str("+12"), Err(EvalErr::StackUnderflow));
    assert_eq!(eval_str("1+"), Err(EvalErr::StackUnderflow));
    assert_eq!(eval_str("12"), Err(EvalErr::Unbalanced(2)));
    assert_eq!(eval_str(""), Err(EvalErr::Unbalanced(0)));
    assert_eq!(eval_str("12%"), Err(EvalErr::BadToken('%')));
}

#[test]
fn test_classify() {
    assert_eq!(Verdict::classify(10.0), Verdict::Ten);
    assert_eq!(Verdict::classify(10.0 + 1e-12), Verdict::Ten);
    assert_eq!(Verdict::classify(9.999999999999998), Verdict::Ten);
    assert_eq!(Verdict::classify(-10.0), Verdict::NotTen);
    assert_eq!(Verdict::classify(11.0), Verdict::NotTen);
    assert_eq!(Verdict::classify(1.4), Verdict::NotInteger);
    assert_eq!(Verdict::classify(10.000001), Verdict::NotInteger);
    assert_eq!(Verdict::classify(f64::INFINITY), Verdict::NotInteger);
    assert_eq!(Verdict::classify(f64::NAN), Verdict::NotInteger);
}

#[test]
fn test_verdict_strings() {
    assert_eq!(Verdict::Invalid.to_string(), "Invalid input");
    assert_eq!(Verdict::NotInteger.to_string(), "Not an integer");
    assert_eq!(Verdict::NotTen.to_string(), "Not 10");
    assert_eq!(Verdict::Ten.to_string(), "10");
}

#[test]
fn test_check_ten() {
    assert_eq!(check("1234+++"), Verdict::Ten);
    assert_eq!(check("12+3+4+"), Verdict::Ten);
    assert_eq!(check("12*3*4+"), Verdict::Ten);
    // 8 / (1 - 1/5) and (1 + 1/9) * 9 only hit 10 within tolerance
    assert_eq!(check("8115/-/"), Verdict::Ten);
    assert_eq!(check("119/+9*"), Verdict::Ten);
}

#[test]
fn test_check_not_ten() {
    assert_eq!(check("39*1-7*"), Verdict::NotTen);
    assert_eq!(check("11+8+8*"), Verdict::NotTen);
    assert_eq!(check("19+5-5*"), Verdict::NotTen);
    assert_eq!(check("55/19-*"), Verdict::NotTen);
    assert_eq!(check("12-34*+"), Verdict::NotTen);
}

#[test]
fn test_check_not_integer() {
    assert_eq!(check("1234/++"), Verdict::NotInteger);
    assert_eq!(check("1233-/+"), Verdict::NotInteger);
}

#[test]
fn test_check_invalid() {
    assert_eq!(check("34+5/"), Verdict::Invalid);
    assert_eq!(check("12+3*45"), Verdict::Invalid);
    assert_eq!(check("10+2+3+"), Verdict::Invalid);
    assert_eq!(check("1234567"), Verdict::Invalid);
}

#[test]
fn test_check_idempotent() {
    for expr in ["8115/-/", "1234/++", "12+3*45"] {
        assert_eq!(check(expr), check(expr));
        assert_eq!(eval_str(expr), eval_str(expr));
    }
}

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// Plain IEEE arithmetic, division by zero gives inf or NaN.
    pub fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            BinOp::Add => l + r,
            BinOp::Sub => l - r,
            BinOp::Mul => l * r,
            BinOp::Div => l / r,
        }
    }

    pub fn is_additive(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub)
    }

    // all four operators are left associative
    pub fn precedence(self) -> usize {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single character of a postfix stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PolishToken {
    Digit(u8),
    Op(BinOp),
    Unknown(char),
}

impl PolishToken {
    pub fn from_char(c: char) -> PolishToken {
        match c {
            '0'..='9' => PolishToken::Digit(c as u8 - b'0'),
            _ => match BinOp::from_char(c) {
                Some(op) => PolishToken::Op(op),
                None => PolishToken::Unknown(c),
            },
        }
    }

    /// Position class used by skeleton matching: 'x' operand, 'o' operator.
    pub fn skeleton(&self) -> char {
        match *self {
            PolishToken::Digit(_) => 'x',
            PolishToken::Op(_) => 'o',
            PolishToken::Unknown(_) => '?',
        }
    }
}

impl fmt::Display for PolishToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PolishToken::Digit(d) => write!(f, "{}", d),
            PolishToken::Op(op) => write!(f, "{}", op),
            PolishToken::Unknown(c) => write!(f, "{}", c),
        }
    }
}

pub fn tokenize(src: &str) -> impl Iterator<Item = PolishToken> + '_ {
    src.chars().map(PolishToken::from_char)
}

#[cfg(test)]
mod tests {
    use super::{tokenize, BinOp, PolishToken};

    #[test]
    fn tokenize_mixed() {
        let tokens: Vec<_> = tokenize("90/a").collect();
        assert_eq!(
            tokens,
            vec![
                PolishToken::Digit(9),
                PolishToken::Digit(0),
                PolishToken::Op(BinOp::Div),
                PolishToken::Unknown('a'),
            ]
        );
        let skel: String = tokens.iter().map(PolishToken::skeleton).collect();
        assert_eq!(skel, "xxo?");
    }

    #[test]
    fn operator_symbols() {
        for c in "+-*/".chars() {
            assert_eq!(BinOp::from_char(c).map(BinOp::symbol), Some(c));
        }
        assert_eq!(BinOp::from_char('%'), None);
        assert!(BinOp::Sub.is_additive());
        assert!(!BinOp::Div.is_additive());
    }
}

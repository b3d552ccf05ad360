//! Two-operand integer calculator used by the `calc` command.
//!
//! Input is fed one character at a time. Digits build the current operand;
//! the first operator character switches from the first operand to the
//! second. Anything else is ignored.

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` or `x`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Parses an operator character.
    pub fn from_byte(byte: u8) -> Option<Operator> {
        match byte {
            b'+' => Some(Operator::Add),
            b'-' => Some(Operator::Sub),
            b'*' | b'x' => Some(Operator::Mul),
            b'/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Applies the operator. Division truncates and dividing by zero gives 0.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs.wrapping_add(rhs),
            Operator::Sub => lhs.wrapping_sub(rhs),
            Operator::Mul => lhs.wrapping_mul(rhs),
            Operator::Div if rhs == 0 => 0,
            Operator::Div => lhs.wrapping_div(rhs),
        }
    }
}

/// Accumulated calculator input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    lhs: i64,
    rhs: i64,
    op: Option<Operator>,
}

impl Calculator {
    /// Empty input.
    pub const fn new() -> Self {
        Calculator {
            lhs: 0,
            rhs: 0,
            op: None,
        }
    }

    /// Feeds one input character.
    pub fn push(&mut self, byte: u8) {
        if byte.is_ascii_digit() {
            let operand = if self.op.is_some() {
                &mut self.rhs
            } else {
                &mut self.lhs
            };
            *operand = operand
                .saturating_mul(10)
                .saturating_add(i64::from(byte - b'0'));
        } else if self.op.is_none() {
            self.op = Operator::from_byte(byte);
        }
    }

    /// The operator entered so far.
    pub fn operator(&self) -> Option<Operator> {
        self.op
    }

    /// Result of the input so far; the first operand if no operator was given.
    pub fn result(&self) -> i64 {
        match self.op {
            Some(op) => op.apply(self.lhs, self.rhs),
            None => self.lhs,
        }
    }
}

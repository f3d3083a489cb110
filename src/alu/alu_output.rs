use std::fmt;

use serde::Serialize;

use crate::alu::Alu;
use crate::constants::*;

/// Represents an arithmetic or logic operation, and its result.
/// The purpose is to make the underlying operations pure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct AluOutput {
    pub value: u8,
    /// Carry-out on ADD, borrow on SUB.
    pub c: bool,
    pub z: bool,
    pub n: bool,
    /// Signed (two's-complement) overflow.
    pub v: bool,
}

impl AluOutput {
    /// Truncates `value` to a nibble and derives zero and negative from it.
    /// Carry and overflow must come from the untruncated computation.
    pub fn from_value(value: u8, c: bool, v: bool) -> Self {
        let value = value & NIBBLE_MASK;
        AluOutput {
            value,
            c,
            z: value == 0,
            n: value & SIGN_BIT != 0,
            v,
        }
    }

    /// Result of a logic operation, which never touches carry or overflow.
    fn logic(value: u8) -> Self {
        Self::from_value(value, false, false)
    }

    pub fn pretty_format_flags(&self) -> String {
        let mut string = String::new();
        string.push('[');

        let mut lambda = |flag: bool, letter: char| {
            if flag {
                string.push(letter);
            } else {
                string.push('-');
            }
        };

        lambda(self.c, 'C');
        lambda(self.z, 'Z');
        lambda(self.n, 'N');
        lambda(self.v, 'V');

        string.push(']');
        string
    }
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b} {}", self.value, self.pretty_format_flags())
    }
}

impl Alu for AluOutput {
    fn alu_add(a: u8, b: u8) -> Self {
        let (a, b) = (a & NIBBLE_MASK, b & NIBBLE_MASK);
        // At most 5 bits wide.
        let full = a + b;
        let res = full & NIBBLE_MASK;

        // Overflow: operands share a sign and the result's sign differs.
        let v_bit = (!(a ^ b) & (a ^ res)) & SIGN_BIT != 0;

        AluOutput::from_value(res, full > NIBBLE_MAX, v_bit)
    }

    fn alu_sub(a: u8, b: u8) -> Self {
        let (a, b) = (a & NIBBLE_MASK, b & NIBBLE_MASK);
        let res = a.wrapping_sub(b) & NIBBLE_MASK;

        // Carry (Borrow): set if the subtrahend is larger, unsigned.
        let c_bit = a < b;

        // Overflow: operand signs differ and the result's sign differs from A.
        let v_bit = ((a ^ b) & (a ^ res)) & SIGN_BIT != 0;

        AluOutput::from_value(res, c_bit, v_bit)
    }

    fn alu_and(a: u8, b: u8) -> Self {
        AluOutput::logic(a & b)
    }

    fn alu_or(a: u8, b: u8) -> Self {
        AluOutput::logic(a | b)
    }

    fn alu_xor(a: u8, b: u8) -> Self {
        AluOutput::logic(a ^ b)
    }

    fn alu_eq(a: u8, b: u8) -> Self {
        AluOutput::logic(((a & NIBBLE_MASK) == (b & NIBBLE_MASK)) as u8)
    }
}

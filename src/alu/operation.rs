use std::fmt;

use serde::Serialize;

use crate::constants::*;

/// The operations the 4-bit ALU defines.
/// Every other selector value is a don't-care.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    Add,
    Sub,
    And,
    Or,
    Xor,
    Eq,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Sub,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Eq,
    ];

    /// Decodes a selector, only the low nibble is considered.
    pub fn from_selector(sel: u8) -> Option<Self> {
        match sel & NIBBLE_MASK {
            SEL_ADD => Some(Operation::Add),
            SEL_SUB => Some(Operation::Sub),
            SEL_AND => Some(Operation::And),
            SEL_OR => Some(Operation::Or),
            SEL_XOR => Some(Operation::Xor),
            SEL_EQ => Some(Operation::Eq),
            _ => None,
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            Operation::Add => SEL_ADD,
            Operation::Sub => SEL_SUB,
            Operation::And => SEL_AND,
            Operation::Or => SEL_OR,
            Operation::Xor => SEL_XOR,
            Operation::Eq => SEL_EQ,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Sub => "SUB",
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::Eq => "EQ",
        }
    }

    /// Parses a mnemonic, case insensitive.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name.trim()))
    }

    /// Only ADD and SUB can ever raise carry or overflow.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Operation::Add | Operation::Sub)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::utils::to_bin;
use crate::vectors::TestVector;

/// The five outputs compared per vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Result,
    Carry,
    Zero,
    Negative,
    Overflow,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Result,
        Field::Carry,
        Field::Zero,
        Field::Negative,
        Field::Overflow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Result => "result",
            Field::Carry => "carry",
            Field::Zero => "zero",
            Field::Negative => "negative",
            Field::Overflow => "overflow",
        }
    }

    fn width(self) -> usize {
        match self {
            Field::Result => 4,
            _ => 1,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field of a single vector disagreeing with the golden model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VectorMismatch {
    /// Position of the vector in the run.
    pub index: usize,
    pub vector: TestVector,
    pub field: Field,
    pub actual: u8,
    pub expected: u8,
}

impl fmt::Display for VectorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.field.width();
        write!(
            f,
            "Vector #{} {}: {} was {}, expected {}",
            self.index,
            self.vector,
            self.field,
            to_bin(self.actual, width),
            to_bin(self.expected, width)
        )
    }
}

impl Error for VectorMismatch {}

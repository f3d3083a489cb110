use super::TestVector;
use crate::constants::*;

/// Hand-authored vectors. The result column was worked out by hand, the
/// runner cross-checks it while deriving flags from the model.
pub const VECTORS: &[TestVector] = &[
    // ADD
    TestVector::new(0b0011, 0b0001, SEL_ADD, 0b0100),
    TestVector::new(0b1000, 0b1000, SEL_ADD, 0b0000),
    TestVector::new(0b0000, 0b0000, SEL_ADD, 0b0000),
    TestVector::new(0b1111, 0b0001, SEL_ADD, 0b0000),
    TestVector::new(0b0111, 0b0001, SEL_ADD, 0b1000),
    TestVector::new(0b1111, 0b1111, SEL_ADD, 0b1110),
    TestVector::new(0b0101, 0b0010, SEL_ADD, 0b0111),
    // SUB
    TestVector::new(0b0100, 0b0010, SEL_SUB, 0b0010),
    TestVector::new(0b0010, 0b0100, SEL_SUB, 0b1110),
    TestVector::new(0b0000, 0b0001, SEL_SUB, 0b1111),
    TestVector::new(0b1000, 0b0001, SEL_SUB, 0b0111),
    TestVector::new(0b0111, 0b1000, SEL_SUB, 0b1111),
    TestVector::new(0b0101, 0b0101, SEL_SUB, 0b0000),
    // AND
    TestVector::new(0b1100, 0b1010, SEL_AND, 0b1000),
    TestVector::new(0b1111, 0b0000, SEL_AND, 0b0000),
    // OR
    TestVector::new(0b0101, 0b0011, SEL_OR, 0b0111),
    TestVector::new(0b0000, 0b0000, SEL_OR, 0b0000),
    // XOR
    TestVector::new(0b1010, 0b0101, SEL_XOR, 0b1111),
    TestVector::new(0b1001, 0b1001, SEL_XOR, 0b0000),
    // EQ
    TestVector::new(0b0111, 0b0111, SEL_EQ, 0b0001),
    TestVector::new(0b0011, 0b0100, SEL_EQ, 0b0000),
    TestVector::new(0b0000, 0b0000, SEL_EQ, 0b0001),
];

mod alu_output;
mod alu_trait;
mod operation;

pub use alu_output::AluOutput;
pub use alu_trait::Alu;
pub use operation::Operation;

use crate::constants::NIBBLE_MASK;

/// Golden model of the 4-bit ALU.
///
/// Operands and selector are masked to their low nibble, out of range input
/// is the caller's concern and never an error. The function is total: an
/// undefined selector drives a zero result with carry and overflow clear,
/// the same as the `default` arm of the hardware's case statement.
pub fn evaluate(a: u8, b: u8, sel: u8) -> AluOutput {
    let (a, b) = (a & NIBBLE_MASK, b & NIBBLE_MASK);
    match Operation::from_selector(sel) {
        Some(op) => execute(op, a, b),
        None => AluOutput::from_value(0, false, false),
    }
}

/// Runs a decoded operation through the model.
pub fn execute(op: Operation, a: u8, b: u8) -> AluOutput {
    match op {
        Operation::Add => AluOutput::alu_add(a, b),
        Operation::Sub => AluOutput::alu_sub(a, b),
        Operation::And => AluOutput::alu_and(a, b),
        Operation::Or => AluOutput::alu_or(a, b),
        Operation::Xor => AluOutput::alu_xor(a, b),
        Operation::Eq => AluOutput::alu_eq(a, b),
    }
}

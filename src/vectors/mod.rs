mod table;
mod test_vector;

pub use table::VECTORS;
pub use test_vector::TestVector;

use crate::alu::{Operation, execute};
use crate::constants::NIBBLE_MAX;

/// Every `(A, B)` pair for each of `ops`, in operation then A then B order.
/// Expected results come from the golden model.
pub fn exhaustive(ops: &[Operation]) -> Vec<TestVector> {
    let mut vectors = Vec::with_capacity(ops.len() * 256);
    for &op in ops {
        for a in 0..=NIBBLE_MAX {
            for b in 0..=NIBBLE_MAX {
                let expected = execute(op, a, b).value;
                vectors.push(TestVector::new(a, b, op.selector(), expected));
            }
        }
    }
    vectors
}

/// Exhaustive sweep over all six defined operations.
pub fn sweep_all() -> Vec<TestVector> {
    exhaustive(&Operation::ALL)
}

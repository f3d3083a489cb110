use std::fmt;

use serde::Serialize;

use crate::alu::Operation;
use crate::utils::to_bin;

/// One entry of the test corpus. `expected` is the oracle for the result
/// field only, flags are always derived from the golden model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestVector {
    pub a: u8,
    pub b: u8,
    pub sel: u8,
    pub expected: u8,
}

impl TestVector {
    pub const fn new(a: u8, b: u8, sel: u8, expected: u8) -> Self {
        Self { a, b, sel, expected }
    }

    pub fn operation(&self) -> Option<Operation> {
        Operation::from_selector(self.sel)
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self
            .operation()
            .map(|op| op.mnemonic())
            .unwrap_or("???");
        write!(
            f,
            "A={} B={} sel={} ({})",
            to_bin(self.a, 4),
            to_bin(self.b, 4),
            to_bin(self.sel, 4),
            op
        )
    }
}

use crate::alu::AluOutput;

/// A device under test, seen through its structured outputs.
///
/// The device is a single shared resource: the runner holds it mutably and
/// evaluates one vector at a time.
pub trait Device {
    fn evaluate(&mut self, a: u8, b: u8, sel: u8) -> AluOutput;
}

impl<F> Device for F
where
    F: FnMut(u8, u8, u8) -> AluOutput,
{
    fn evaluate(&mut self, a: u8, b: u8, sel: u8) -> AluOutput {
        self(a, b, sel)
    }
}

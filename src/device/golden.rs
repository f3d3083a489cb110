use std::time::Duration;

use super::wire::{WireDevice, pack_output, unpack_inputs};
use crate::alu::evaluate;
use crate::constants::NIBBLE_MASK;

/// Behavioural stand-in for the hardware: a wire-level device whose outputs
/// are computed by the golden model when the inputs are driven.
///
/// Used to exercise the adapter and runner without a simulator attached.
#[derive(Debug, Default)]
pub struct GoldenWire {
    ui_in: u8,
    uio_in: u8,
    uo_out: u8,
    settle_time: Option<Duration>,
    /// Number of drive/sample steps performed.
    pub steps: usize,
}

impl GoldenWire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps for `settle_time` between driving and sampling.
    pub fn with_settle_time(mut self, settle_time: Duration) -> Self {
        self.settle_time = Some(settle_time);
        self
    }

    pub fn inputs(&self) -> (u8, u8) {
        (self.ui_in, self.uio_in)
    }
}

impl WireDevice for GoldenWire {
    fn drive(&mut self, ui_in: u8, uio_in: u8) {
        self.ui_in = ui_in;
        self.uio_in = uio_in & NIBBLE_MASK;
        let (a, b) = unpack_inputs(ui_in);
        self.uo_out = pack_output(&evaluate(a, b, self.uio_in));
        self.steps += 1;
    }

    fn settle(&mut self) {
        if let Some(settle_time) = self.settle_time {
            std::thread::sleep(settle_time);
        }
    }

    fn sample(&self) -> u8 {
        self.uo_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_drive_latches_outputs() {
        let mut wire = GoldenWire::new();
        // A=8, B=8, ADD
        wire.drive(0x88, SEL_ADD);
        assert_eq!(wire.sample(), FLAG_C | FLAG_Z | FLAG_V);
        assert_eq!(wire.steps, 1);
        assert_eq!(wire.inputs(), (0x88, SEL_ADD));
    }

    #[test]
    fn test_sample_is_stable_until_next_drive() {
        let mut wire = GoldenWire::new().with_settle_time(Duration::from_nanos(1));
        wire.drive(0x24, SEL_SUB);
        wire.settle();
        let first = wire.sample();
        assert_eq!(first, wire.sample());
        assert_eq!(first, 0x02);
    }
}

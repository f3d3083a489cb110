use alu4_golden::constants::SEL_SUB;
use alu4_golden::device::wire::pack_output;
use alu4_golden::{AluOutput, Device, GoldenWire, WireDevice, evaluate};

/// A structured device with the classic bug: SUB raises carry as a genuine
/// carry-out (A >= B) instead of as a borrow.
#[derive(Default)]
pub struct InvertedBorrow {
    pub calls: usize,
}

impl Device for InvertedBorrow {
    fn evaluate(&mut self, a: u8, b: u8, sel: u8) -> AluOutput {
        self.calls += 1;
        let mut out = evaluate(a, b, sel);
        if sel == SEL_SUB {
            out.c = !out.c;
        }
        out
    }
}

/// A wire device with one output bit stuck high.
pub struct StuckBit {
    inner: GoldenWire,
    mask: u8,
}

impl StuckBit {
    pub fn new(mask: u8) -> Self {
        Self {
            inner: GoldenWire::new(),
            mask,
        }
    }
}

impl WireDevice for StuckBit {
    fn drive(&mut self, ui_in: u8, uio_in: u8) {
        self.inner.drive(ui_in, uio_in);
    }

    fn sample(&self) -> u8 {
        self.inner.sample() | self.mask
    }
}

/// Packs a structured output the way the bus would carry it.
pub fn packed(a: u8, b: u8, sel: u8) -> u8 {
    pack_output(&evaluate(a, b, sel))
}

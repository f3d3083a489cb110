//! Bit-packed view of the device.
//!
//! Inputs: `ui_in[3:0] = A`, `ui_in[7:4] = B`, `uio_in[3:0] = sel`.
//! Outputs: `uo_out[7] = C`, `[6] = Z`, `[5] = N`, `[4] = V`, `[3:0] = result`.

use log::trace;

use super::Device;
use crate::alu::AluOutput;
use crate::constants::*;

pub fn pack_inputs(a: u8, b: u8) -> u8 {
    ((b & NIBBLE_MASK) << OPERAND_B_SHIFT) | (a & NIBBLE_MASK)
}

/// Returns `(a, b)`.
pub fn unpack_inputs(ui_in: u8) -> (u8, u8) {
    (ui_in & NIBBLE_MASK, (ui_in >> OPERAND_B_SHIFT) & NIBBLE_MASK)
}

pub fn pack_output(out: &AluOutput) -> u8 {
    let mut byte = out.value & RESULT_MASK;
    let mut lambda = |flag: bool, mask: u8| {
        if flag {
            byte |= mask;
        }
    };
    lambda(out.c, FLAG_C);
    lambda(out.z, FLAG_Z);
    lambda(out.n, FLAG_N);
    lambda(out.v, FLAG_V);
    byte
}

/// Decodes `uo_out` as the device drove it. Zero and negative are read from
/// their own bits, never re-derived from the result.
pub fn unpack_output(uo_out: u8) -> AluOutput {
    AluOutput {
        value: uo_out & RESULT_MASK,
        c: uo_out & FLAG_C != 0,
        z: uo_out & FLAG_Z != 0,
        n: uo_out & FLAG_N != 0,
        v: uo_out & FLAG_V != 0,
    }
}

/// A device exposing the packed input and output buses.
pub trait WireDevice {
    /// Drives the input buses.
    fn drive(&mut self, ui_in: u8, uio_in: u8);
    /// Waits for the outputs to become valid after a drive.
    fn settle(&mut self) {}
    /// Samples the output bus.
    fn sample(&self) -> u8;
}

/// Adapts a [`WireDevice`] to the structured [`Device`] interface.
/// Each call is one drive, settle, sample step.
pub struct WireAdapter<W: WireDevice> {
    pub wire: W,
}

impl<W: WireDevice> WireAdapter<W> {
    pub fn new(wire: W) -> Self {
        Self { wire }
    }

    pub fn into_inner(self) -> W {
        self.wire
    }
}

impl<W: WireDevice> Device for WireAdapter<W> {
    fn evaluate(&mut self, a: u8, b: u8, sel: u8) -> AluOutput {
        let ui_in = pack_inputs(a, b);
        let uio_in = sel & NIBBLE_MASK;
        self.wire.drive(ui_in, uio_in);
        self.wire.settle();
        let uo_out = self.wire.sample();
        trace!(
            "ui_in={:08b} uio_in={:04b} uo_out={:08b}",
            ui_in, uio_in, uo_out
        );
        unpack_output(uo_out)
    }
}

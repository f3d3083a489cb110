use std::time::Duration;

// Selector codes, as driven on uio_in[3:0]
pub const SEL_ADD: u8 = 0b0000;
pub const SEL_SUB: u8 = 0b0001;
pub const SEL_AND: u8 = 0b1000;
pub const SEL_OR: u8 = 0b1001;
pub const SEL_XOR: u8 = 0b1010;
pub const SEL_EQ: u8 = 0b1111;

pub const NIBBLE_MASK: u8 = 0x0F;
/// Sign bit of a 4-bit two's-complement value.
pub const SIGN_BIT: u8 = 0b1000;
/// Largest value representable in 4 bits.
pub const NIBBLE_MAX: u8 = 0x0F;

// Constants for flags, as packed on uo_out
pub const FLAG_C: u8 = 0b1000_0000;
pub const FLAG_Z: u8 = 0b0100_0000;
pub const FLAG_N: u8 = 0b0010_0000;
pub const FLAG_V: u8 = 0b0001_0000;
pub const RESULT_MASK: u8 = NIBBLE_MASK;

/// ui_in[7:4] carries B, ui_in[3:0] carries A.
pub const OPERAND_B_SHIFT: u8 = 4;

/// Default delay between driving the inputs and sampling the outputs.
pub const SETTLE_TIME: Duration = Duration::from_nanos(10);

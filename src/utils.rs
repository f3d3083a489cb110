/// Zero-padded binary rendering, `width` digits wide.
pub fn to_bin<T: Into<u16>>(val: T, width: usize) -> String {
    format!("{:01$b}", val.into(), width)
}

/// Renders a flag the way the wire carries it.
pub fn bit(flag: bool) -> u8 {
    flag as u8
}

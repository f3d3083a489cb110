pub trait Alu {
    // Arithmetic
    fn alu_add(a: u8, b: u8) -> Self;
    fn alu_sub(a: u8, b: u8) -> Self;

    // Logical Operations
    fn alu_and(a: u8, b: u8) -> Self;
    fn alu_or(a: u8, b: u8) -> Self;
    fn alu_xor(a: u8, b: u8) -> Self;

    // Comparison
    fn alu_eq(a: u8, b: u8) -> Self;
}

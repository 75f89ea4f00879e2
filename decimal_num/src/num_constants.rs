pub type Digit = u8;

pub const RADIX: Digit = 10;

pub const DIGITS: [char; RADIX as usize] = [
    '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9',
];

/// Legacy marker stored at index 0 of a digit sequence to flag a negative magnitude.
pub const SIGN_SENTINEL: i8 = -1;

/// Extra leading digit reserved by addition for the final carry.
pub const SUM_MARGIN: usize = 1;

/// Extra digit reserved by long multiplication beyond `len(a) + len(b)`.
pub const PRODUCT_MARGIN: usize = 1;

/// Extra digits reserved when pre-sizing the result of exponentiation.
pub const POWER_MARGIN: usize = 3;

pub const MAX_EXPONENT: u32 = i32::MAX as u32;

pub const MAX_CONSTANT: usize = 10;

//! Decimal Num \
//! This crate provides:
//! - Digit sequence utilities: [`parse`], [`format`], [`pad_leading_zeros`], [`strip_leading_zeros`],
//!   [`equal_magnitude`] and [`greater_magnitude`].
//! - Grade-school arithmetic on decimal text: [`add`], [`subtract`], [`multiply`], [`divide`],
//!   [`modulate`] and [`exponentiate`].
//! - [`Natural`]: an owned non-negative integer with operator support.
//!
//! Factorial and prime factorization are not provided.

macro_rules! zero_digits {
    ($len: expr) => {
        vec![0 as $crate::num_constants::Digit; $len]
    };
}

mod arith;
mod digit_seq;
mod error;
mod natural;
mod num_cache;
mod num_constants;
mod signed;

pub use arith::{add, divide, exponentiate, modulate, multiply, subtract};
pub use digit_seq::{
    equal_magnitude, format, format_sentinel, greater_magnitude, pad_leading_zeros, parse,
    strip_leading_zeros,
};
pub use error::{Error, Result};
pub use natural::Natural;
pub use num_constants::{Digit, MAX_EXPONENT, SIGN_SENTINEL};
pub use signed::SignedDigits;

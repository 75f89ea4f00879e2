//! Math Sandbox \
//! Console front end for [`decimal_num`]: reads two operands of arbitrary length and prints
//! their sum, difference, product, quotient, remainder and power.

mod error;
mod sandbox;

pub use crate::error::{Result, SandboxError};
pub use crate::sandbox::{Options, Sandbox, DEFAULT_MAX_EXPONENT, DEFAULT_MAX_QUOTIENT_DIGITS};

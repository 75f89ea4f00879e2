//! # Natural
//! An owned non-negative integer that always holds a canonical digit sequence.
//! # Example
//! ```
//! use decimal_num::Natural;
//!
//! let a: Natural = "10000000000000".parse().unwrap();
//! let b: Natural = "900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", a.checked_div(&b).unwrap());
//! println!("a % b = {}", a.checked_rem(&b).unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};
use std::str::FromStr;

use crate::arith::{add_digits, compare_mag, div_digits, mod_digits, mul_digits, pow_digits, sub_digits};
use crate::digit_seq::{parse, strip_leading_zeros};
use crate::error::{Error, Result};
use crate::num_cache::small;
use crate::num_constants::*;
use crate::signed::SignedDigits;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Natural {
    digits: Vec<Digit>,
}

// 实现构造
impl Natural {
    pub fn zero() -> Self {
        Natural { digits: small(0) }
    }
    pub fn one() -> Self {
        Natural { digits: small(1) }
    }
    /// Builds a value from raw digits, dropping any leading zeros.
    pub fn from_digits(seq: &[Digit]) -> Result<Self> {
        Ok(Natural { digits: strip_leading_zeros(seq)? })
    }
    fn new(digits: Vec<Digit>) -> Self {
        debug_assert!(!digits.is_empty() && (digits == [0] || digits[0] != 0));
        Natural { digits }
    }
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }
    pub fn into_digits(self) -> Vec<Digit> {
        self.digits
    }
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
}

// 实现解析
impl FromStr for Natural {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Natural::from_digits(&parse(s)?)
    }
}

macro_rules! impl_unsigned_to_natural {
    ($($u: ty),*) => {
    $(
    impl From<$u> for Natural {
        fn from(val: $u) -> Self {
            Natural::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_natural!(u8, u16, u32, usize, u64);

impl Natural {
    fn value_of(mut val: u64) -> Natural {
        if val <= MAX_CONSTANT as u64 {
            return Natural::new(small(val as usize));
        }
        let mut digits = Vec::with_capacity(20);
        while val != 0 {
            digits.push((val % RADIX as u64) as Digit);
            val /= RADIX as u64;
        }
        digits.reverse();
        Natural::new(digits)
    }
}

// 实现打印
impl Display for Natural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits.iter().map(|d| DIGITS[*d as usize]).collect();
        f.pad_integral(true, "", &s)
    }
}

// 实现大小比较
impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_mag(&self.digits, &other.digits)
    }
}

// 实现加法
impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        Natural::new(add_digits(&self.digits, &rhs.digits))
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        *self = &*self + rhs;
    }
}

// 实现减法
impl Sub for Natural {
    type Output = SignedDigits;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub for &Natural {
    type Output = SignedDigits;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_digits(&self.digits, &rhs.digits)
    }
}

// 实现乘法
impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        Natural::new(mul_digits(&self.digits, &rhs.digits))
    }
}

impl MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        *self = &*self * rhs;
    }
}

// 除法, 求余和乘方可能失败, 不实现运算符
impl Natural {
    pub fn checked_div(&self, rhs: &Natural) -> Result<Natural> {
        div_digits(&self.digits, &rhs.digits).map(Natural::new)
    }
    pub fn checked_rem(&self, rhs: &Natural) -> Result<Natural> {
        mod_digits(&self.digits, &rhs.digits).map(Natural::new)
    }
    pub fn pow(&self, exponent: u32) -> Result<Natural> {
        pow_digits(&self.digits, exponent).map(Natural::new)
    }
}

//! # Arithmetic
//! Grade-school arithmetic over digit sequences.
//!
//! Every operation takes decimal text, parses it with [`parse`](crate::parse) and hands the
//! digits to a slice kernel. Results are canonical: no leading zeros, and zero is `[0]`.
//! # Example
//! ```
//! use decimal_num::{add, divide, format, modulate, subtract};
//!
//! assert_eq!(format(&add("999", "1").unwrap()).unwrap(), "1000");
//! assert_eq!(subtract("100", "999").unwrap().to_string(), "-899");
//! assert_eq!(format(&divide("100", "7").unwrap()).unwrap(), "14");
//! assert_eq!(format(&modulate("100", "7").unwrap()).unwrap(), "2");
//! ```
//!
//! Division searches for the quotient by trial multiplication and exponentiation multiplies
//! the base in one factor at a time, so both cost time linear in the *value* of the quotient
//! or exponent. Callers that accept untrusted operands should bound them first.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::digit_seq::{compare_same_len, pad, parse, trim};
use crate::error::{Error, Result};
use crate::num_cache::{one, zero};
use crate::num_constants::*;
use crate::signed::SignedDigits;

/// Right-aligns `seq` in a buffer of `width` digits.
fn align(seq: &[Digit], width: usize) -> Vec<Digit> {
    debug_assert!(seq.len() <= width);
    pad(seq, width - seq.len())
}

/// Compares two trimmed sequences: length first, then digit by digit.
pub(crate) fn compare_mag(a: &[Digit], b: &[Digit]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => compare_same_len(a, b),
        ord => ord,
    }
}

// 实现加法
/// `a + b`
pub fn add(a: &str, b: &str) -> Result<Vec<Digit>> {
    let a = parse(a)?;
    let b = parse(b)?;
    Ok(add_digits(&a, &b))
}

pub(crate) fn add_digits(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    let width = x.len().max(y.len()) + SUM_MARGIN;
    let x = align(x, width);
    let y = align(y, width);

    let mut sum = zero_digits!(width);
    let mut carry = 0;
    for i in (0..width).rev() {
        let s = x[i] + y[i] + carry;
        sum[i] = s % RADIX;
        carry = s / RADIX;
    }
    trim(&sum).to_vec()
}

// 实现减法
/// `minuend - subtrahend`, which is negative when the subtrahend is larger.
pub fn subtract(minuend: &str, subtrahend: &str) -> Result<SignedDigits> {
    let a = parse(minuend)?;
    let b = parse(subtrahend)?;
    Ok(sub_digits(&a, &b))
}

pub(crate) fn sub_digits(a: &[Digit], b: &[Digit]) -> SignedDigits {
    let a = trim(a);
    let b = trim(b);

    // always take the smaller magnitude from the larger one
    let (big, little, negative) = match compare_mag(a, b) {
        Ordering::Equal => return SignedDigits::new(false, zero()),
        Ordering::Greater => (a, b, false),
        Ordering::Less => (b, a, true),
    };
    let little = align(little, big.len());

    let mut diff = zero_digits!(big.len());
    // A borrow out of a zero digit leaves a 9 behind and keeps travelling left.
    let mut borrow = 0;
    for i in (0..big.len()).rev() {
        let mut d = big[i] as i8 - little[i] as i8 - borrow;
        if d < 0 {
            d += RADIX as i8;
            borrow = 1;
        } else {
            borrow = 0;
        }
        diff[i] = d as Digit;
    }
    debug_assert_eq!(borrow, 0);

    SignedDigits::new(negative, trim(&diff).to_vec())
}

// 实现乘法
/// `factor1 * factor2`
pub fn multiply(factor1: &str, factor2: &str) -> Result<Vec<Digit>> {
    let a = parse(factor1)?;
    let b = parse(factor2)?;
    Ok(mul_digits(&a, &b))
}

pub(crate) fn mul_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut long = trim(a);
    let mut short = trim(b);
    if long.len() < short.len() {
        std::mem::swap(&mut long, &mut short);
    }

    let width = long.len() + short.len() + PRODUCT_MARGIN;
    let long = align(long, width);

    let prod = if short.len() == 1 {
        mul_by_digit(&long, short[0])
    } else {
        mul_long(&long, short)
    };
    trim(&prod).to_vec()
}

/// Single pass of `long * digit`. `long` is already aligned to the product width.
fn mul_by_digit(long: &[Digit], digit: Digit) -> Vec<Digit> {
    let width = long.len();
    let mut prod = zero_digits!(width);
    let mut carry: u16 = 0;
    for i in (0..width).rev() {
        let p = long[i] as u16 * digit as u16;
        prod[i] = ((p % RADIX as u16 + carry) % RADIX as u16) as Digit;
        carry = (p + carry) / RADIX as u16;
    }
    prod
}

/// Long multiplication: one partial-product line per digit of `short`, each shifted to
/// its place value, then all lines summed column by column.
fn mul_long(long: &[Digit], short: &[Digit]) -> Vec<Digit> {
    let width = long.len();
    let rows = short.len();

    // Every line is kept, zero digits included, so line `z` always sits `rows - 1 - z`
    // places to the left.
    let mut lines: Vec<Vec<Digit>> = short.iter().map(|d| mul_by_digit(long, *d)).collect();
    for (z, line) in lines.iter_mut().enumerate() {
        let shift = rows - 1 - z;
        if shift > 0 {
            debug_assert!(line[..shift].iter().all(|d| *d == 0));
            line.copy_within(shift.., 0);
            line[width - shift..].fill(0);
        }
    }

    let mut prod = zero_digits!(width);
    let mut carry: usize = 0;
    for i in (0..width).rev() {
        let column: usize = lines.iter().map(|line| line[i] as usize).sum();
        prod[i] = ((column % RADIX as usize + carry) % RADIX as usize) as Digit;
        carry = (column + carry) / RADIX as usize;
    }
    prod
}

// 实现除法
/// Truncating `dividend / divisor`.
pub fn divide(dividend: &str, divisor: &str) -> Result<Vec<Digit>> {
    let a = parse(dividend)?;
    let b = parse(divisor)?;
    div_digits(&a, &b)
}

pub(crate) fn div_digits(dividend: &[Digit], divisor: &[Digit]) -> Result<Vec<Digit>> {
    let dividend = trim(dividend);
    let divisor = trim(divisor);

    if divisor == [0] {
        return Err(Error::DivisionByZero);
    }
    if divisor.len() > dividend.len() {
        return Ok(zero());
    }
    if divisor.len() == dividend.len() {
        match compare_mag(dividend, divisor) {
            Ordering::Equal => return Ok(one()),
            Ordering::Less => return Ok(zero()),
            Ordering::Greater => {}
        }
    }

    debug!(
        "trial division of a {}-digit dividend by a {}-digit divisor",
        dividend.len(),
        divisor.len()
    );

    // Walk the quotient up from zero until `divisor * quotient` passes the dividend,
    // then step back once.
    let step = one();
    let mut quotient = zero();
    let mut product = align(divisor, dividend.len());
    let mut trials: u64 = 0;
    while compare_mag(trim(&product), dividend) != Ordering::Greater {
        quotient = add_digits(&quotient, &step);
        product = mul_digits(divisor, &quotient);
        trials += 1;
        trace!("trial {}: product has {} digits", trials, product.len());
    }
    debug!("trial division finished after {} trials", trials);

    let (_, quotient) = sub_digits(&quotient, &step).into_parts();
    Ok(quotient)
}

// 实现求余
/// `dividend - divisor * (dividend / divisor)`.
///
/// A dividend smaller than the divisor comes back unchanged.
pub fn modulate(dividend: &str, divisor: &str) -> Result<Vec<Digit>> {
    let a = parse(dividend)?;
    let b = parse(divisor)?;
    mod_digits(&a, &b)
}

pub(crate) fn mod_digits(dividend: &[Digit], divisor: &[Digit]) -> Result<Vec<Digit>> {
    let quotient = div_digits(dividend, divisor)?;
    let whole = mul_digits(divisor, &quotient);
    let (negative, remainder) = sub_digits(dividend, &whole).into_parts();
    debug_assert!(!negative);
    Ok(remainder)
}

// 实现乘方
/// `base ^ exponent` by repeated multiplication. `exponent` may not exceed
/// [`MAX_EXPONENT`], and `base ^ 0` is `1`.
pub fn exponentiate(base: &str, exponent: u32) -> Result<Vec<Digit>> {
    let base = parse(base)?;
    pow_digits(&base, exponent)
}

pub(crate) fn pow_digits(base: &[Digit], exponent: u32) -> Result<Vec<Digit>> {
    if exponent > MAX_EXPONENT {
        return Err(Error::InvalidArgument(format!(
            "exponent {} exceeds the maximum of {}",
            exponent, MAX_EXPONENT
        )));
    }
    // The power never needs more than `exponent * len(base) + POWER_MARGIN` digits.
    let width = (exponent as usize)
        .checked_mul(base.len())
        .and_then(|w| w.checked_add(POWER_MARGIN))
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{}-digit base raised to {} does not fit in memory",
                base.len(),
                exponent
            ))
        })?;

    // x^0 is 1 for every base, including zero, rather than the base itself.
    if exponent == 0 {
        return Ok(one());
    }
    debug!("raising a {}-digit base to {} (at most {} digits)", base.len(), exponent, width);

    let base = trim(base);
    let mut power = base.to_vec();
    for _ in 1..exponent {
        power = mul_digits(&power, base);
    }
    debug_assert!(power.len() <= width);
    Ok(power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit_seq::format;

    fn text(seq: Vec<Digit>) -> String {
        format(&seq).unwrap()
    }

    #[test]
    fn test_add() {
        assert_eq!(text(add("999", "1").unwrap()), "1000");
        assert_eq!(text(add("1", "999").unwrap()), "1000");
        assert_eq!(text(add("123", "0").unwrap()), "123");
        assert_eq!(text(add("0", "0").unwrap()), "0");
        assert_eq!(text(add("0045", "005").unwrap()), "50");
        assert_eq!(
            text(add("99999999999999999999999999", "1").unwrap()),
            "100000000000000000000000000"
        );
        assert!(matches!(add("12", "x"), Err(Error::InvalidFormat(_))));
        assert!(matches!(add("", "1"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_subtract() {
        let diff = subtract("100", "999").unwrap();
        assert!(diff.is_negative());
        assert_eq!(diff.magnitude(), &[8, 9, 9]);
        assert_eq!(diff.to_string(), "-899");

        assert_eq!(subtract("1000", "1").unwrap().to_string(), "999");
        assert_eq!(subtract("10000", "9999").unwrap().to_string(), "1");
        assert_eq!(subtract("5", "12").unwrap().to_string(), "-7");
        assert_eq!(subtract("123", "123").unwrap().magnitude(), &[0]);
        assert!(!subtract("007", "7").unwrap().is_negative());
        assert_eq!(subtract("007", "7").unwrap().to_string(), "0");
        assert_eq!(subtract("0", "0").unwrap().to_string(), "0");
        assert!(matches!(subtract("1-", "1"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_subtract_borrow_chain() {
        // the borrow runs through every zero of the minuend
        assert_eq!(subtract("1000001", "2").unwrap().to_string(), "999999");
        assert_eq!(subtract("2", "1000001").unwrap().to_string(), "-999999");
        assert_eq!(subtract("90100", "199").unwrap().to_string(), "89901");
    }

    #[test]
    fn test_multiply() {
        assert_eq!(text(multiply("123", "456").unwrap()), "56088");
        assert_eq!(text(multiply("9", "9").unwrap()), "81");
        assert_eq!(text(multiply("12345", "6").unwrap()), "74070");
        assert_eq!(text(multiply("6", "12345").unwrap()), "74070");
        assert_eq!(text(multiply("105", "203").unwrap()), "21315");
        assert_eq!(text(multiply("1000", "1000").unwrap()), "1000000");
        assert_eq!(text(multiply("999", "0").unwrap()), "0");
        assert_eq!(text(multiply("0", "0").unwrap()), "0");
        assert_eq!(text(multiply("0042", "01").unwrap()), "42");
        assert_eq!(
            text(multiply("99999999999999999999", "99999999999999999999").unwrap()),
            "9999999999999999999800000000000000000001"
        );
        assert_eq!(
            text(multiply("12345678901234567890", "98765432109876543210").unwrap()),
            "1219326311370217952237463801111263526900"
        );
    }

    #[test]
    fn test_divide() {
        assert_eq!(text(divide("100", "7").unwrap()), "14");
        assert_eq!(text(divide("120", "13").unwrap()), "9");
        assert_eq!(text(divide("99", "9").unwrap()), "11");
        assert_eq!(text(divide("1000", "1000").unwrap()), "1");
        assert_eq!(text(divide("999", "1000").unwrap()), "0");
        assert_eq!(text(divide("500", "700").unwrap()), "0");
        assert_eq!(text(divide("0", "5").unwrap()), "0");
        assert_eq!(text(divide("00100", "007").unwrap()), "14");
        assert_eq!(text(divide("123456789012", "123456789").unwrap()), "1000");
        assert_eq!(divide("5", "0"), Err(Error::DivisionByZero));
        assert_eq!(divide("5", "000"), Err(Error::DivisionByZero));
        assert!(matches!(divide("5", "a"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_modulate() {
        assert_eq!(text(modulate("100", "7").unwrap()), "2");
        assert_eq!(text(modulate("12", "8").unwrap()), "4");
        assert_eq!(text(modulate("10000", "10").unwrap()), "0");
        assert_eq!(text(modulate("77", "77").unwrap()), "0");
        assert_eq!(text(modulate("5", "77").unwrap()), "5");
        assert_eq!(modulate("5", "0"), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_exponentiate() {
        assert_eq!(text(exponentiate("2", 10).unwrap()), "1024");
        assert_eq!(text(exponentiate("7", 1).unwrap()), "7");
        assert_eq!(text(exponentiate("7", 0).unwrap()), "1");
        assert_eq!(text(exponentiate("0", 0).unwrap()), "1");
        assert_eq!(text(exponentiate("123456789", 0).unwrap()), "1");
        assert_eq!(text(exponentiate("0", 3).unwrap()), "0");
        assert_eq!(text(exponentiate("010", 3).unwrap()), "1000");
        assert_eq!(
            text(exponentiate("2", 100).unwrap()),
            "1267650600228229401496703205376"
        );
        assert!(matches!(
            exponentiate("2", MAX_EXPONENT + 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(exponentiate("2.5", 2), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_compare_mag() {
        assert_eq!(compare_mag(&[1, 0], &[9]), Ordering::Greater);
        assert_eq!(compare_mag(&[9], &[1, 0]), Ordering::Less);
        assert_eq!(compare_mag(&[4, 2], &[4, 2]), Ordering::Equal);
        assert_eq!(compare_mag(&[4, 1], &[4, 2]), Ordering::Less);

        // same-length ordering agrees with the public comparators
        let (a, b) = ([3, 0, 7], [3, 1, 0]);
        assert_eq!(crate::digit_seq::greater_magnitude(&a, &b), Ok(false));
        assert_eq!(crate::digit_seq::equal_magnitude(&a, &b), Ok(false));
        assert_eq!(compare_mag(&a, &b), Ordering::Less);
        assert_eq!(align(&[4, 2], 5), crate::digit_seq::pad_leading_zeros(&[4, 2], 3).unwrap());
    }
}

//! # Digit sequences
//! A digit sequence is a slice of decimal digits, most significant digit first.
//! `[1, 0, 2, 4]` is the number `1024`. These helpers convert between sequences and
//! decimal text and line sequences up so the engine can walk them digit by digit.
//!
//! Leading zeros are legal here. `parse("007")` yields `[0, 0, 7]` and only
//! [`strip_leading_zeros`] removes them.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::num_cache::digit_of;
use crate::num_constants::*;

fn check_digits(seq: &[Digit]) -> Result<()> {
    if seq.is_empty() {
        return Err(Error::InvalidFormat(
            "a digit sequence must contain at least one digit".into(),
        ));
    }
    match seq.iter().position(|d| *d >= RADIX) {
        Some(pos) => Err(Error::InvalidFormat(format!(
            "element {} at index {} is not a single decimal digit",
            seq[pos], pos
        ))),
        None => Ok(()),
    }
}

fn check_same_len(a: &[Digit], b: &[Digit]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::InvalidArgument(format!(
            "digit sequences must have the same length, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

// 实现解析
/// Converts decimal text into one digit per character, preserving order.
pub fn parse(text: &str) -> Result<Vec<Digit>> {
    if text.is_empty() {
        return Err(Error::InvalidFormat("decimal text must not be empty".into()));
    }
    text.chars()
        .enumerate()
        .map(|(pos, c)| {
            digit_of(c).ok_or_else(|| {
                Error::InvalidFormat(format!(
                    "`{}` at position {} of {:?} is not a decimal digit",
                    c, pos, text
                ))
            })
        })
        .collect()
}

// 实现打印
/// Renders a digit sequence as decimal text. The inverse of [`parse`].
pub fn format(seq: &[Digit]) -> Result<String> {
    check_digits(seq)?;
    Ok(seq.iter().map(|d| DIGITS[*d as usize]).collect())
}

/// Renders a legacy sequence whose first element may be [`SIGN_SENTINEL`].
pub fn format_sentinel(seq: &[i8]) -> Result<String> {
    if seq.is_empty() {
        return Err(Error::InvalidFormat(
            "a digit sequence must contain at least one digit".into(),
        ));
    }
    let mut s = String::with_capacity(seq.len());
    for (pos, &d) in seq.iter().enumerate() {
        match d {
            SIGN_SENTINEL if pos == 0 => s.push('-'),
            0..=9 => s.push(DIGITS[d as usize]),
            _ => {
                return Err(Error::InvalidFormat(format!(
                    "element {} at index {} is not a single decimal digit",
                    d, pos
                )))
            }
        }
    }
    Ok(s)
}

/// Prepends `n` zero digits.
pub fn pad_leading_zeros(seq: &[Digit], n: usize) -> Result<Vec<Digit>> {
    check_digits(seq)?;
    Ok(pad(seq, n))
}

/// Unchecked padding used by the engine on sequences it built itself.
pub(crate) fn pad(seq: &[Digit], n: usize) -> Vec<Digit> {
    let mut padded = zero_digits!(seq.len() + n);
    padded[n..].copy_from_slice(seq);
    padded
}

/// Removes leading zero digits. A zero value keeps a single `0`.
pub fn strip_leading_zeros(seq: &[Digit]) -> Result<Vec<Digit>> {
    check_digits(seq)?;
    Ok(trim(seq).to_vec())
}

/// Unchecked trim used by the engine on sequences it built itself.
pub(crate) fn trim(seq: &[Digit]) -> &[Digit] {
    match seq.iter().position(|d| *d != 0) {
        Some(first) => &seq[first..],
        None => &seq[seq.len().saturating_sub(1)..],
    }
}

// 实现大小比较
/// Digit-by-digit equality of two sequences of the same length.
pub fn equal_magnitude(a: &[Digit], b: &[Digit]) -> Result<bool> {
    check_same_len(a, b)?;
    Ok(compare_same_len(a, b) == Ordering::Equal)
}

/// Whether `a > b` for two sequences of the same length.
///
/// Equal sequences also report `true`, so callers that need a strict ordering check
/// [`equal_magnitude`] first.
pub fn greater_magnitude(a: &[Digit], b: &[Digit]) -> Result<bool> {
    check_same_len(a, b)?;
    if a.is_empty() {
        return Err(Error::InvalidArgument(
            "digit sequences must contain at least one digit".into(),
        ));
    }
    check_digits(a)?;
    check_digits(b)?;

    Ok(compare_same_len(a, b) != Ordering::Less)
}

/// Digit-by-digit comparison from the most significant end. Lengths must match.
pub(crate) fn compare_same_len(a: &[Digit], b: &[Digit]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

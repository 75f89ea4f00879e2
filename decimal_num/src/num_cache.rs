use lazy_static::*;

use crate::num_constants::*;

lazy_static! {
    /// Canonical digit sequences for the values `0..=MAX_CONSTANT`.
    pub static ref SMALL_CACHE: [Vec<Digit>; MAX_CONSTANT + 1] = [
        vec![0],
        vec![1],
        vec![2],
        vec![3],
        vec![4],
        vec![5],
        vec![6],
        vec![7],
        vec![8],
        vec![9],
        vec![1, 0],
    ];
    /// ASCII lookup from a character to its decimal digit value.
    pub static ref CHAR_CACHE: [Option<Digit>; 128] = {
        let mut char_cache = [None; 128];
        for (value, c) in DIGITS.iter().enumerate() {
            char_cache[*c as usize] = Some(value as Digit);
        }
        char_cache
    };
}

pub fn small(value: usize) -> Vec<Digit> {
    debug_assert!(value <= MAX_CONSTANT);
    SMALL_CACHE[value].clone()
}

pub fn zero() -> Vec<Digit> {
    small(0)
}

pub fn one() -> Vec<Digit> {
    small(1)
}

#[inline]
pub fn digit_of(c: char) -> Option<Digit> {
    if c.is_ascii() {
        CHAR_CACHE[c as usize]
    } else {
        None
    }
}

#[test]
fn test_small_cache() {
    assert_eq!(zero(), vec![0]);
    assert_eq!(one(), vec![1]);
    assert_eq!(small(MAX_CONSTANT), vec![1, 0]);
}

#[test]
fn test_digit_of() {
    assert_eq!(digit_of('0'), Some(0));
    assert_eq!(digit_of('7'), Some(7));
    assert_eq!(digit_of('a'), None);
    assert_eq!(digit_of('-'), None);
    assert_eq!(digit_of('٣'), None);
}

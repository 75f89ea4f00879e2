use std::fmt::Display;

use crate::num_constants::*;

/// A sign flag paired with a canonical magnitude, as produced by subtraction.
///
/// Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedDigits {
    negative: bool,
    magnitude: Vec<Digit>,
}

impl SignedDigits {
    pub(crate) fn new(negative: bool, magnitude: Vec<Digit>) -> Self {
        let negative = negative && magnitude != [0];
        SignedDigits { negative, magnitude }
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn magnitude(&self) -> &[Digit] {
        &self.magnitude
    }
    pub fn into_parts(self) -> (bool, Vec<Digit>) {
        (self.negative, self.magnitude)
    }
    /// The legacy encoding, with [`SIGN_SENTINEL`] in front of a negative magnitude.
    pub fn to_sentinel(&self) -> Vec<i8> {
        let mut seq = Vec::with_capacity(self.magnitude.len() + 1);
        if self.negative {
            seq.push(SIGN_SENTINEL);
        }
        seq.extend(self.magnitude.iter().map(|d| *d as i8));
        seq
    }
}

impl Display for SignedDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        for d in &self.magnitude {
            write!(f, "{}", DIGITS[*d as usize])?;
        }
        Ok(())
    }
}

#[test]
fn test_signed_display() {
    let diff = SignedDigits::new(true, vec![8, 9, 9]);
    assert_eq!(diff.to_string(), "-899");
    assert_eq!(diff.to_sentinel(), vec![-1, 8, 9, 9]);
    assert_eq!(crate::digit_seq::format_sentinel(&diff.to_sentinel()).unwrap(), "-899");

    let zero = SignedDigits::new(true, vec![0]);
    assert!(!zero.is_negative());
    assert_eq!(zero.to_string(), "0");
    assert_eq!(zero.into_parts(), (false, vec![0]));
}

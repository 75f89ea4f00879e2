use std::io::{BufRead, Write};

use decimal_num::{
    add, divide, exponentiate, format, greater_magnitude, modulate, multiply, parse,
    strip_leading_zeros, subtract,
};
use log::{debug, warn};

use crate::error::{Result, SandboxError};

pub const DEFAULT_MAX_EXPONENT: u32 = 10_000;

pub const DEFAULT_MAX_QUOTIENT_DIGITS: usize = 6;

const FIRST_PROMPT: &str = "Enter an integer operand of arbitrary length.";
const SECOND_PROMPT: &str = "Enter a second integer operand of arbitrary length.";

#[derive(Debug, Clone)]
pub struct Options {
    /// Largest second operand that is still used as an exponent.
    pub max_exponent: u32,
    /// Longest quotient, in digits, that trial division is still asked to find.
    pub max_quotient_digits: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_exponent: DEFAULT_MAX_EXPONENT,
            max_quotient_digits: DEFAULT_MAX_QUOTIENT_DIGITS,
        }
    }
}

/// One demo session. Owns its input and output for as long as the session runs.
pub struct Sandbox<R, W> {
    input: R,
    output: W,
    options: Options,
}

impl<R: BufRead, W: Write> Sandbox<R, W> {
    pub fn new(input: R, output: W, options: Options) -> Self {
        Sandbox { input, output, options }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts for whichever operand was not supplied, then prints every result.
    pub fn run(&mut self, first: Option<String>, second: Option<String>) -> Result<()> {
        let first = match first {
            Some(first) => first,
            None => self.read_operand(FIRST_PROMPT, "first")?,
        };
        let second = match second {
            Some(second) => second,
            None => self.read_operand(SECOND_PROMPT, "second")?,
        };
        self.report(&first, &second)
    }

    fn read_operand(&mut self, prompt: &str, which: &'static str) -> Result<String> {
        writeln!(self.output, "{}\n", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SandboxError::MissingOperand(which));
        }
        writeln!(self.output)?;

        let operand = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        debug!("read the {} operand ({} characters)", which, operand.len());
        Ok(operand)
    }

    pub fn report(&mut self, first: &str, second: &str) -> Result<()> {
        let sum = format(&add(first, second)?)?;
        self.print("The sum of the two integer operands is: ", &sum)?;

        let difference = subtract(first, second)?.to_string();
        self.print("The difference of the two integer operands is: ", &difference)?;

        let product = format(&multiply(first, second)?)?;
        self.print("The product of the two integer operands is: ", &product)?;

        // Trial division takes one step per unit of the quotient.
        let quotient_digits = quotient_digits(first, second)?;
        if quotient_digits > self.options.max_quotient_digits {
            warn!(
                "quotient may have {} digits, above the limit of {}, skipping division",
                quotient_digits, self.options.max_quotient_digits
            );
        } else {
            let quotient = format(&divide(first, second)?)?;
            self.print("The quotient of the two integer operands is: ", &quotient)?;

            if remainder_defined(first, second)? {
                let remainder = format(&modulate(first, second)?)?;
                self.print("The division remainder of the two integer operands is: ", &remainder)?;
            } else {
                debug!("first operand is smaller than the second, no remainder printed");
            }
        }

        match second.parse::<u32>() {
            Ok(exponent) if exponent <= self.options.max_exponent => {
                let power = format(&exponentiate(first, exponent)?)?;
                self.print("The first integer raised to the power of the second is: ", &power)?;
            }
            _ => warn!(
                "exponent {} is above the limit of {}, skipping exponentiation",
                second, self.options.max_exponent
            ),
        }

        self.output.flush()?;
        Ok(())
    }

    fn print(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(self.output, "{}{}\n", label, value)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Upper bound on the number of digits in `first / second`.
fn quotient_digits(first: &str, second: &str) -> Result<usize> {
    let first = strip_leading_zeros(&parse(first)?)?;
    let second = strip_leading_zeros(&parse(second)?)?;
    Ok(first.len().saturating_sub(second.len()) + 1)
}

/// The remainder is only printed when the first operand is not smaller than the second.
fn remainder_defined(first: &str, second: &str) -> Result<bool> {
    if first.len() != second.len() {
        return Ok(first.len() > second.len());
    }
    if first == second {
        return Ok(true);
    }
    Ok(greater_magnitude(&parse(first)?, &parse(second)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str, options: Options) -> (Result<()>, String) {
        let mut sandbox = Sandbox::new(input.as_bytes(), Vec::new(), options);
        let result = sandbox.run(None, None);
        let output = String::from_utf8(sandbox.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_full_session() {
        let (result, output) = session("100\n7\n", Options::default());
        assert!(result.is_ok());
        let expected = "\
Enter an integer operand of arbitrary length.\n\n\n\
Enter a second integer operand of arbitrary length.\n\n\n\
The sum of the two integer operands is: 107\n\n\
The difference of the two integer operands is: 93\n\n\
The product of the two integer operands is: 700\n\n\
The quotient of the two integer operands is: 14\n\n\
The division remainder of the two integer operands is: 2\n\n\
The first integer raised to the power of the second is: 100000000000000\n\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_remainder_guard() {
        let (result, output) = session("12\r\n45\r\n", Options::default());
        assert!(result.is_ok());
        assert!(output.contains("The difference of the two integer operands is: -33\n"));
        assert!(output.contains("The quotient of the two integer operands is: 0\n"));
        assert!(!output.contains("remainder"));

        assert!(remainder_defined("100", "7").unwrap());
        assert!(remainder_defined("77", "77").unwrap());
        assert!(remainder_defined("78", "77").unwrap());
        assert!(!remainder_defined("76", "77").unwrap());
        assert!(!remainder_defined("7", "100").unwrap());
    }

    #[test]
    fn test_quotient_budget() {
        let mut sandbox = Sandbox::new("".as_bytes(), Vec::new(), Options::default());
        sandbox
            .run(Some("1000000000000000000000".into()), Some("3".into()))
            .unwrap();
        let output = String::from_utf8(sandbox.into_output()).unwrap();
        assert!(output.contains("The sum of the two integer operands is: 1000000000000000000003\n"));
        assert!(output.contains("The product of the two integer operands is: 3000000000000000000000\n"));
        assert!(!output.contains("quotient"));
        assert!(!output.contains("remainder"));

        let options = Options { max_quotient_digits: 3, ..Options::default() };
        let (result, output) = session("100\n7\n", options);
        assert!(result.is_ok());
        assert!(output.contains("The quotient of the two integer operands is: 14\n"));
        let options = Options { max_quotient_digits: 2, ..Options::default() };
        let (result, output) = session("100\n7\n", options);
        assert!(result.is_ok());
        assert!(!output.contains("quotient"));

        assert_eq!(quotient_digits("100", "7").unwrap(), 3);
        assert_eq!(quotient_digits("0099", "07").unwrap(), 2);
        assert_eq!(quotient_digits("5", "12345").unwrap(), 1);
    }

    #[test]
    fn test_output_is_flushed_per_line() {
        let output = std::io::BufWriter::with_capacity(1 << 16, Vec::new());
        let mut sandbox = Sandbox::new("".as_bytes(), output, Options::default());
        sandbox.print("The sum of the two integer operands is: ", "5").unwrap();
        assert_eq!(
            sandbox.output.get_ref().as_slice(),
            b"The sum of the two integer operands is: 5\n\n"
        );
    }

    #[test]
    fn test_exponent_budget() {
        let (result, output) = session("2\n20\n", Options { max_exponent: 10, ..Options::default() });
        assert!(result.is_ok());
        assert!(output.contains("The sum of the two integer operands is: 22\n"));
        assert!(!output.contains("raised to the power"));
    }

    #[test]
    fn test_operands_from_arguments() {
        let mut sandbox = Sandbox::new("".as_bytes(), Vec::new(), Options::default());
        sandbox.run(Some("2".into()), Some("10".into())).unwrap();
        let output = String::from_utf8(sandbox.into_output()).unwrap();
        assert!(!output.contains("Enter"));
        assert!(output.contains("The first integer raised to the power of the second is: 1024\n"));
    }

    #[test]
    fn test_errors() {
        let (result, _) = session("100\n", Options::default());
        assert!(matches!(result, Err(SandboxError::MissingOperand("second"))));

        let (result, _) = session("12x\n3\n", Options::default());
        assert!(matches!(
            result,
            Err(SandboxError::Engine(decimal_num::Error::InvalidFormat(_)))
        ));

        let (result, output) = session("12\n0\n", Options::default());
        assert!(matches!(
            result,
            Err(SandboxError::Engine(decimal_num::Error::DivisionByZero))
        ));
        assert!(output.contains("The product of the two integer operands is: 0\n"));
    }
}

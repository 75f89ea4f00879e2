use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use math_sandbox::{Options, Sandbox, DEFAULT_MAX_EXPONENT, DEFAULT_MAX_QUOTIENT_DIGITS};

/// Arbitrary-precision integer arithmetic on two operands.
#[derive(Parser)]
struct Cli {
    /// The first operand, read from stdin when omitted
    first: Option<String>,

    /// The second operand, read from stdin when omitted
    second: Option<String>,

    /// Skip exponentiation when the second operand is larger than this
    #[arg(long, default_value_t = DEFAULT_MAX_EXPONENT)]
    max_exponent: u32,

    /// Skip division when the quotient could have more digits than this
    #[arg(long, default_value_t = DEFAULT_MAX_QUOTIENT_DIGITS)]
    max_quotient_digits: usize,

    /// Show debug output
    #[arg(long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}

fn main() -> Result<()> {
    let Cli { first, second, max_exponent, max_quotient_digits, verbose } = Cli::parse();
    init_logger(verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let options = Options { max_exponent, max_quotient_digits };
    let mut sandbox = Sandbox::new(stdin.lock(), BufWriter::new(stdout.lock()), options);
    sandbox.run(first, second)?;
    sandbox.into_output().flush()?;
    Ok(())
}

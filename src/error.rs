use thiserror::Error;

#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("failed to talk to the terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] decimal_num::Error),

    /// Input ended before the named operand was entered.
    #[error("no {0} operand was entered")]
    MissingOperand(&'static str),
}

pub type Result<T> = std::result::Result<T, SandboxError>;

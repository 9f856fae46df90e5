//! Error types shared by the codec and the password utilities.

use thiserror::Error;

/// Errors produced by the Huffman codec and the password helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// No symbols to build a tree from.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// A symbol being encoded has no entry in the code table.
    #[error("symbol {symbol:?} at position {position} is not in the code table")]
    UnknownSymbol { symbol: char, position: usize },

    /// The bitstring ended partway through a code.
    #[error("bitstring ends in the middle of a code after {consumed} bits")]
    MalformedBitstring { consumed: usize },

    /// A character other than '0' or '1' appeared in a textual bitstring.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A password failed a policy check.
    #[error("password policy violation: {0}")]
    PolicyViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for codec and password operations.
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Failure classes for MRZ correction and verification.
///
/// `NoInput`, `InvalidLineCount` and `WrongLineLength` preclude any further
/// checking and propagate as hard errors; the remaining variants surface as
/// reason strings on the checker's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MrzError {
    #[error("No MRZ text produced by the OCR engine")]
    NoInput,

    #[error("Invalid number of MRZ lines: expected 2, got {0}")]
    InvalidLineCount(usize),

    #[error("Incorrect number of characters ({0}, {1})")]
    WrongLineLength(usize, usize),

    #[error("Character {0:?} is not a valid MRZ character. Only A-Z, 0-9 and < allowed")]
    InvalidCharacter(char),

    #[error("Wrong format for {0}")]
    GrammarMismatch(String),

    #[error("{0} checksum failed")]
    ChecksumMismatch(String),
}

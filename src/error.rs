use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the library can report. All of them are detected from the
/// inputs before any output is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the size of the input has to be a power of two (got {len})")]
    InvalidSize { len: usize },

    #[error("division by a zero complex value")]
    DivisionByZero,

    #[error("can not {op} a {}x{} matrix with a {}x{} matrix", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("matrix has to be rectangular: row {row} has {found} columns, expected {expected}")]
    JaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid WAV data: {0}")]
    Wav(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

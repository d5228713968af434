//! Error types for the report engine.

use crate::record::TypeTag;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while processing an input file.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to read input or write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A recognized record failed to decode
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
}

/// A recognized line that could not be decoded into its record type.
///
/// Unknown tags are not errors (they decode to `Record::Unknown`); this
/// only covers malformed fields inside the three known record types.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The line has fewer fields than its record type requires
    #[error("{tag} record has no field {index}")]
    MissingField { tag: TypeTag, index: usize },

    /// A numeric field did not parse
    #[error("invalid {field} {value:?}: {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: rust_decimal::Error,
    },
}

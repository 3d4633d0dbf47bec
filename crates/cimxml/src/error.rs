use thiserror::Error;

use crate::parser::ScanError;

/// Everything an operation can fail with, from the caller's point of view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a usable response body.
    #[error("{0}")]
    Transport(String),
    /// The response body violated the CIM-XML grammar. Not recoverable;
    /// the original scan error is carried verbatim.
    #[error("malformed response: {0}")]
    Parse(#[from] ScanError),
    /// The CIMOM answered with an `ERROR` element.
    #[error("CIM error {code}: {description}")]
    Cim { code: u16, description: String },
    /// The response parsed but its values are not the shape the operation
    /// requires.
    #[error("Unexpected return value")]
    UnexpectedReturnValue,
    /// The operation is not implemented by this client.
    #[error("method not supported")]
    NotSupported,
}

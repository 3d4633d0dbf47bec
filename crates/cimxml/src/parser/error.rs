use thiserror::Error;

/// Fatal scan or grammar failure.
///
/// Parsing never resynchronizes: the first structural violation aborts the
/// whole parse and the partially built tree is discarded. A malformed server
/// response is not recoverable; masking it could hide genuine protocol
/// incompatibilities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unknown attribute in list for {element} ({found})")]
    UnknownAttribute { element: &'static str, found: String },
    #[error("bad attribute list for {element}: {found}")]
    BadAttributeList { element: &'static str, found: String },
    #[error("'=' expected in attribute list for {element}")]
    ExpectedEquals { element: &'static str },
    #[error("quoted value expected in attribute list for {element}")]
    ExpectedQuote { element: &'static str },
    #[error("unterminated attribute value in {element}")]
    UnterminatedValue { element: &'static str },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unknown element <{0}>")]
    UnknownElement(String),
    #[error("missing required attribute {attr} on {element}")]
    MissingAttribute { element: &'static str, attr: &'static str },
    #[error("unexpected {found} while parsing {context}")]
    Unexpected { context: &'static str, found: &'static str },
    #[error("unexpected end of input")]
    UnexpectedEof,
}

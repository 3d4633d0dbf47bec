//! The transport seam: how encoded requests reach a CIMOM.
//!
//! The crate does not ship an HTTP client. Callers implement [`Transport`]
//! over whatever stack they already have; the operation driver only needs a
//! synchronous request/response exchange.

use thiserror::Error;

/// One fully prepared POST: everything a transport needs to deliver a
/// request to the CIMOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<'a> {
    /// `scheme://host:port/cimom`.
    pub url: &'a str,
    /// Name/value pairs, fixed headers first, then the per-call
    /// `CIMMethod` and `CIMObject`.
    pub headers: &'a [(String, String)],
    /// The CIM-XML payload.
    pub body: &'a str,
    /// Basic-auth credentials as `(user, password)` when configured.
    pub credentials: Option<(&'a str, &'a str)>,
}

/// Delivery failures, as the operation driver distinguishes them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not reach the server or the exchange broke off.
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-success status code.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// A success status with nothing in the body.
    #[error("no data received from server")]
    EmptyBody,
}

/// Synchronous request/response exchange with a CIMOM.
pub trait Transport {
    /// Posts one request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the exchange fails; the driver
    /// maps status codes and empty bodies to user-facing messages.
    fn post(&mut self, request: &HttpRequest<'_>) -> Result<String, TransportError>;
}

//! A CIM-XML client: request encoding, zero-copy response parsing, and the
//! intrinsic operations of the DMTF CIM operations over HTTP protocol.
//!
//! The crate splits into three layers. [`request`] encodes operation
//! payloads as canonical CIM-XML strings. The response parser scans a
//! complete document in one pass, borrowing every name and value from the
//! input buffer, and copies into owned model types ([`Instance`],
//! [`ObjectPath`], [`Class`]) only once, at assembly. [`Client`] drives one
//! operation at a time over a caller-supplied [`Transport`].
//!
//! ```rust
//! use cimxml::ObjectPath;
//!
//! let path = ObjectPath::new("root/cimv2", "CIM_ComputerSystem");
//! let body = cimxml::request::enum_instance_names(&path);
//! assert!(body.contains("EnumerateInstanceNames"));
//! ```

pub mod request;

mod class;
mod client;
mod error;
mod instance;
mod parser;
mod path;
mod response;
mod transport;
mod types;
mod value;

pub use class::{Class, Method, Parameter, ParameterForm};
pub use client::{Client, ClientConfig, Connection};
pub use error::ClientError;
pub use instance::{Instance, Property, PropertyValue, Qualifier};
pub use parser::{parse_response, ScanError};
pub use path::{
    KeyBinding, KeyBindingValue, KeyKind, KeyValue, ObjectPath, ValueReference,
};
pub use request::RequestFlags;
pub use response::{ResponseData, ResponseHdr};
pub use transport::{HttpRequest, Transport, TransportError};
pub use types::{CimType, CimTypeKind};
pub use value::{element_kind, CimData, DataKind};

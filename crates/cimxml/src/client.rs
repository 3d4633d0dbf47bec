//! The operation driver: one method per CIM intrinsic operation.
//!
//! Every operation runs the same loop: reset the connection scratch, encode
//! the request, exchange it through the [`Transport`], parse the response,
//! and validate the result shape. There are no retries; every failure is
//! surfaced on the first attempt.

use log::{debug, trace};

use crate::error::ClientError;
use crate::instance::Instance;
use crate::parser::parse_response;
use crate::path::ObjectPath;
use crate::request::{self, RequestFlags};
use crate::response::ResponseData;
use crate::transport::{HttpRequest, Transport, TransportError};
use crate::value::{element_kind, CimData, DataKind};

/// Where and how to reach the CIMOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            scheme: "http".to_owned(),
            host: "localhost".to_owned(),
            port: 5988,
            user: None,
            password: None,
        }
    }
}

/// Fixed headers sent with every request; `CIMMethod` and `CIMObject` are
/// appended per call.
const BASE_HEADERS: [(&str, &str); 4] = [
    ("Content-type", "application/xml; charset=\"utf-8\""),
    ("Connection", "Keep-Alive, TE"),
    ("CIMProtocolVersion", "1.0"),
    ("CIMOperation", "MethodCall"),
];

/// Per-call scratch state. Reset at the start of every operation, so a
/// client can be reused for any number of sequential calls; at most one
/// operation is ever in flight.
#[derive(Debug, Default)]
pub struct Connection {
    uri: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Connection {
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A CIM-XML client bound to one CIMOM over one [`Transport`].
pub struct Client<T: Transport> {
    config: ClientConfig,
    connection: Connection,
    transport: T,
}

impl<T: Transport> Client<T> {
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Client { config, connection: Connection::default(), transport }
    }

    /// The current per-call scratch state.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Resets the scratch and stages one request.
    fn prepare(&mut self, op: &str, path: &ObjectPath, body: String) {
        let ClientConfig { scheme, host, port, .. } = &self.config;
        self.connection.uri = format!("{scheme}://{host}:{port}/cimom");
        self.connection.headers.clear();
        for (name, value) in BASE_HEADERS {
            self.connection.headers.push((name.to_owned(), value.to_owned()));
        }
        self.connection.headers.push(("CIMMethod".to_owned(), op.to_owned()));
        self.connection.headers.push(("CIMObject".to_owned(), path.namespace_string()));
        self.connection.body = body;
        debug!("{op} request to {}", self.connection.uri);
        trace!("request body: {}", self.connection.body);
    }

    /// Posts the staged request and parses the response, converting a
    /// CIMOM `ERROR` into [`ClientError::Cim`].
    fn roundtrip(&mut self) -> Result<Vec<CimData>, ClientError> {
        let request = HttpRequest {
            url: &self.connection.uri,
            headers: &self.connection.headers,
            body: &self.connection.body,
            credentials: self
                .config
                .user
                .as_deref()
                .map(|user| (user, self.config.password.as_deref().unwrap_or(""))),
        };
        let has_credentials = request.credentials.is_some();
        let body = self
            .transport
            .post(&request)
            .map_err(|err| transport_error(err, has_credentials))?;
        trace!("response body: {body}");
        let hdr = parse_response(&body)?;
        match hdr.data {
            ResponseData::Values(values) => Ok(values),
            ResponseData::Error { code, description } => {
                Err(ClientError::Cim { code, description })
            }
        }
    }

    /// Enumerates the paths of all instances of a class.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not a reference collection.
    pub fn enum_instance_names(
        &mut self,
        path: &ObjectPath,
    ) -> Result<Vec<ObjectPath>, ClientError> {
        self.prepare("EnumerateInstanceNames", path, request::enum_instance_names(path));
        expect_refs(self.roundtrip()?)
    }

    /// Fetches one instance by path.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response
    /// does not carry exactly an instance.
    pub fn get_instance(
        &mut self,
        path: &ObjectPath,
        flags: RequestFlags,
        properties: &[&str],
    ) -> Result<Instance, ClientError> {
        self.prepare("GetInstance", path, request::get_instance(path, flags, properties));
        let mut instances = expect_instances(self.roundtrip()?)?;
        if instances.is_empty() {
            return Err(ClientError::UnexpectedReturnValue);
        }
        Ok(instances.swap_remove(0))
    }

    /// Creates an instance; returns the path the CIMOM assigned.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not a reference.
    pub fn create_instance(
        &mut self,
        path: &ObjectPath,
        instance: &Instance,
    ) -> Result<ObjectPath, ClientError> {
        self.prepare("CreateInstance", path, request::create_instance(path, instance));
        let mut paths = expect_refs(self.roundtrip()?)?;
        if paths.is_empty() {
            return Err(ClientError::UnexpectedReturnValue);
        }
        Ok(paths.swap_remove(0))
    }

    /// Deletes one instance by path. Any return values are ignored.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors.
    pub fn delete_instance(&mut self, path: &ObjectPath) -> Result<(), ClientError> {
        self.prepare("DeleteInstance", path, request::delete_instance(path));
        self.roundtrip()?;
        Ok(())
    }

    /// Enumerates full instances of a class.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not an instance collection.
    pub fn enum_instances(
        &mut self,
        path: &ObjectPath,
        flags: RequestFlags,
        properties: &[&str],
    ) -> Result<Vec<Instance>, ClientError> {
        self.prepare("EnumerateInstances", path, request::enum_instances(path, flags, properties));
        expect_instances(self.roundtrip()?)
    }

    /// Instances associated with the given instance.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not an instance collection.
    #[allow(clippy::too_many_arguments)]
    pub fn associators(
        &mut self,
        path: &ObjectPath,
        assoc_class: Option<&str>,
        result_class: Option<&str>,
        role: Option<&str>,
        result_role: Option<&str>,
        flags: RequestFlags,
        properties: &[&str],
    ) -> Result<Vec<Instance>, ClientError> {
        self.prepare(
            "Associators",
            path,
            request::associators(
                path,
                assoc_class,
                result_class,
                role,
                result_role,
                flags,
                properties,
            ),
        );
        expect_instances(self.roundtrip()?)
    }

    /// Paths of instances associated with the given instance.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not a reference collection.
    pub fn associator_names(
        &mut self,
        path: &ObjectPath,
        assoc_class: Option<&str>,
        result_class: Option<&str>,
        role: Option<&str>,
        result_role: Option<&str>,
    ) -> Result<Vec<ObjectPath>, ClientError> {
        self.prepare(
            "AssociatorNames",
            path,
            request::associator_names(path, assoc_class, result_class, role, result_role),
        );
        expect_refs(self.roundtrip()?)
    }

    /// Association instances referring to the given instance.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not an instance collection.
    pub fn references(
        &mut self,
        path: &ObjectPath,
        result_class: Option<&str>,
        role: Option<&str>,
        flags: RequestFlags,
        properties: &[&str],
    ) -> Result<Vec<Instance>, ClientError> {
        self.prepare(
            "References",
            path,
            request::references(path, result_class, role, flags, properties),
        );
        expect_instances(self.roundtrip()?)
    }

    /// Paths of association instances referring to the given instance.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response is
    /// not a reference collection.
    pub fn reference_names(
        &mut self,
        path: &ObjectPath,
        result_class: Option<&str>,
        role: Option<&str>,
    ) -> Result<Vec<ObjectPath>, ClientError> {
        self.prepare("ReferenceNames", path, request::reference_names(path, result_class, role));
        expect_refs(self.roundtrip()?)
    }

    /// Fetches a single property value of an instance.
    ///
    /// # Errors
    ///
    /// Fails on transport, parse, or CIMOM errors, or when the response
    /// carries no value.
    pub fn get_property(
        &mut self,
        path: &ObjectPath,
        name: &str,
    ) -> Result<CimData, ClientError> {
        self.prepare("GetProperty", path, request::get_property(path, name));
        let mut values = self.roundtrip()?;
        if values.is_empty() {
            return Err(ClientError::UnexpectedReturnValue);
        }
        Ok(values.swap_remove(0))
    }

    /// Not implemented by this client.
    ///
    /// # Errors
    ///
    /// Always [`ClientError::NotSupported`].
    pub fn set_instance(
        &mut self,
        _path: &ObjectPath,
        _instance: &Instance,
    ) -> Result<(), ClientError> {
        Err(ClientError::NotSupported)
    }

    /// Not implemented by this client.
    ///
    /// # Errors
    ///
    /// Always [`ClientError::NotSupported`].
    pub fn exec_query(
        &mut self,
        _path: &ObjectPath,
        _query: &str,
        _language: &str,
    ) -> Result<Vec<Instance>, ClientError> {
        Err(ClientError::NotSupported)
    }

    /// Not implemented by this client.
    ///
    /// # Errors
    ///
    /// Always [`ClientError::NotSupported`].
    pub fn invoke_method(
        &mut self,
        _path: &ObjectPath,
        _method: &str,
    ) -> Result<CimData, ClientError> {
        Err(ClientError::NotSupported)
    }

    /// Not implemented by this client.
    ///
    /// # Errors
    ///
    /// Always [`ClientError::NotSupported`].
    pub fn set_property(
        &mut self,
        _path: &ObjectPath,
        _name: &str,
        _value: &str,
    ) -> Result<(), ClientError> {
        Err(ClientError::NotSupported)
    }
}

fn transport_error(err: TransportError, has_credentials: bool) -> ClientError {
    let message = match err {
        TransportError::Http(401) => {
            if has_credentials {
                "Invalid username/password.".to_owned()
            } else {
                "Username/password required.".to_owned()
            }
        }
        TransportError::EmptyBody => "No data received from server.".to_owned(),
        TransportError::Network(message) => message,
        other => other.to_string(),
    };
    ClientError::Transport(message)
}

/// Validates a reference-shaped result. An empty collection is valid and
/// yields an empty vector.
fn expect_refs(values: Vec<CimData>) -> Result<Vec<ObjectPath>, ClientError> {
    match element_kind(&values) {
        None | Some(DataKind::Reference) => values
            .into_iter()
            .map(|v| match v {
                CimData::Ref(r) => Ok(r.into_path()),
                _ => Err(ClientError::UnexpectedReturnValue),
            })
            .collect(),
        Some(_) => Err(ClientError::UnexpectedReturnValue),
    }
}

/// Validates an instance-shaped result; named instances contribute their
/// instance part.
fn expect_instances(values: Vec<CimData>) -> Result<Vec<Instance>, ClientError> {
    match element_kind(&values) {
        None | Some(DataKind::Instance) => values
            .into_iter()
            .map(|v| match v {
                CimData::Instance(instance)
                | CimData::NamedInstance { instance, .. } => Ok(instance),
                _ => Err(ClientError::UnexpectedReturnValue),
            })
            .collect(),
        Some(_) => Err(ClientError::UnexpectedReturnValue),
    }
}

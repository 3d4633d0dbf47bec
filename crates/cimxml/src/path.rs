//! Object paths: namespace, class name, and key bindings.

/// Identifies a CIM class or instance: an ordered list of namespace
/// components, a class name, and (for instances) key bindings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectPath {
    /// Host name, present only on full instance paths.
    pub host: Option<String>,
    /// Namespace components in order, e.g. `["root", "cimv2"]`.
    pub namespace: Vec<String>,
    pub class_name: String,
    pub keys: Vec<KeyBinding>,
}

impl ObjectPath {
    /// Builds a path from a `/`-separated namespace and a class name.
    #[must_use]
    pub fn new(namespace: &str, class_name: &str) -> Self {
        ObjectPath {
            host: None,
            namespace: namespace
                .split('/')
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect(),
            class_name: class_name.to_owned(),
            keys: Vec::new(),
        }
    }

    /// Appends one key binding; chainable.
    #[must_use]
    pub fn with_key(mut self, name: &str, value: KeyValue) -> Self {
        self.keys.push(KeyBinding {
            name: name.to_owned(),
            value: KeyBindingValue::Value(value),
        });
        self
    }

    /// Namespace components joined with `/`, as sent in the `CIMObject`
    /// header.
    #[must_use]
    pub fn namespace_string(&self) -> String {
        self.namespace.join("/")
    }
}

/// One `KEYBINDING`: a named key of an instance path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub name: String,
    pub value: KeyBindingValue,
}

/// A key binding value: a typed scalar (`KEYVALUE`) or a nested reference
/// (`VALUE.REFERENCE`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyBindingValue {
    Value(KeyValue),
    Reference(ValueReference),
}

/// A scalar key value together with its `VALUETYPE` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub kind: KeyKind,
    pub value: String,
}

impl KeyValue {
    #[must_use]
    pub fn string(value: &str) -> Self {
        KeyValue { kind: KeyKind::String, value: value.to_owned() }
    }

    #[must_use]
    pub fn boolean(value: bool) -> Self {
        KeyValue {
            kind: KeyKind::Boolean,
            value: if value { "TRUE".to_owned() } else { "FALSE".to_owned() },
        }
    }

    #[must_use]
    pub fn numeric(value: &str) -> Self {
        KeyValue { kind: KeyKind::Numeric, value: value.to_owned() }
    }
}

/// The three `VALUETYPE` keywords a `KEYVALUE` may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyKind {
    #[default]
    String,
    Boolean,
    Numeric,
}

impl KeyKind {
    /// Case-insensitive parse; anything unrecognized is treated as string,
    /// matching the attribute's default.
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        if name.eq_ignore_ascii_case("boolean") {
            KeyKind::Boolean
        } else if name.eq_ignore_ascii_case("numeric") {
            KeyKind::Numeric
        } else {
            KeyKind::String
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::String => "string",
            KeyKind::Boolean => "boolean",
            KeyKind::Numeric => "numeric",
        }
    }
}

/// A reference value, tagged by the wrapping element it arrived in.
///
/// Never more than one of the three shapes is populated; the variant records
/// which wrapper was present on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueReference {
    /// `INSTANCEPATH`: host + namespace + instance name.
    InstancePath(ObjectPath),
    /// `LOCALINSTANCEPATH`: namespace + instance name, no host.
    LocalInstancePath(ObjectPath),
    /// A bare `INSTANCENAME`.
    InstanceName(ObjectPath),
}

impl ValueReference {
    #[must_use]
    pub fn path(&self) -> &ObjectPath {
        match self {
            ValueReference::InstancePath(p)
            | ValueReference::LocalInstancePath(p)
            | ValueReference::InstanceName(p) => p,
        }
    }

    #[must_use]
    pub fn into_path(self) -> ObjectPath {
        match self {
            ValueReference::InstancePath(p)
            | ValueReference::LocalInstancePath(p)
            | ValueReference::InstanceName(p) => p,
        }
    }
}

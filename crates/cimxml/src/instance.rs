//! Instances, properties, and qualifiers.

use crate::path::ValueReference;
use crate::types::CimType;

/// A CIM instance: an ordered property list plus qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instance {
    pub class_name: String,
    pub properties: Vec<Property>,
    pub qualifiers: Vec<Qualifier>,
}

impl Instance {
    #[must_use]
    pub fn new(class_name: &str) -> Self {
        Instance { class_name: class_name.to_owned(), ..Instance::default() }
    }

    /// Appends a property; chainable.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Looks up a property by name, case-insensitively (CIM names are
    /// case-preserving but compared without case).
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// One property of an instance or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// Declared type; `None` when the element carried no `TYPE` attribute.
    pub cim_type: Option<CimType>,
    pub class_origin: Option<String>,
    pub propagated: bool,
    /// `REFERENCECLASS`, only on `PROPERTY.REFERENCE`.
    pub reference_class: Option<String>,
    pub qualifiers: Vec<Qualifier>,
    pub value: PropertyValue,
}

impl Property {
    /// A scalar property with a declared type.
    #[must_use]
    pub fn scalar(name: &str, cim_type: CimType, value: &str) -> Self {
        Property {
            name: name.to_owned(),
            cim_type: Some(cim_type),
            class_origin: None,
            propagated: false,
            reference_class: None,
            qualifiers: Vec::new(),
            value: PropertyValue::Scalar(value.to_owned()),
        }
    }
}

/// A property or qualifier value in its wire shapes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyValue {
    /// The element carried no value child.
    #[default]
    Null,
    Scalar(String),
    Array(Vec<String>),
    Reference(ValueReference),
}

/// Qualifier metadata attached to a class, property, method, or parameter.
///
/// The five flavor flags parse as case-insensitive `"true"`; absent
/// attributes are `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    pub name: String,
    pub cim_type: Option<CimType>,
    pub value: PropertyValue,
    pub propagated: bool,
    pub overridable: bool,
    pub tosubclass: bool,
    pub toinstance: bool,
    pub translatable: bool,
}

//! Class definitions: properties, qualifiers, and methods.

use crate::instance::{Property, Qualifier};
use crate::types::CimType;

/// A CIM class definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Class {
    pub name: String,
    pub super_class: Option<String>,
    pub properties: Vec<Property>,
    pub qualifiers: Vec<Qualifier>,
    pub methods: Vec<Method>,
}

/// A method declared by a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Declared return type; `None` when no `TYPE` attribute was present.
    pub cim_type: Option<CimType>,
    pub class_origin: Option<String>,
    pub propagated: bool,
    pub qualifiers: Vec<Qualifier>,
    pub parameters: Vec<Parameter>,
}

/// A method parameter in one of its four wire forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub cim_type: Option<CimType>,
    /// `REFERENCECLASS`, on the reference forms.
    pub reference_class: Option<String>,
    /// `ARRAYSIZE`, kept verbatim as declared.
    pub array_size: Option<String>,
    pub form: ParameterForm,
    pub qualifiers: Vec<Qualifier>,
}

/// Which `PARAMETER` element flavor declared the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterForm {
    Plain,
    Array,
    Reference,
    RefArray,
}

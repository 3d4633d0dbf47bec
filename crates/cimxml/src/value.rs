//! Heterogeneous typed return values.

use crate::class::Class;
use crate::instance::Instance;
use crate::path::{ObjectPath, ValueReference};
use crate::types::CimType;

/// One element of a response's return-value collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CimData {
    /// A scalar with its declared type (string when none was declared).
    Value { cim_type: CimType, value: String },
    /// An array of scalars sharing one declared element type.
    ValueArray { cim_type: CimType, values: Vec<String> },
    /// An object path, tagged by its wrapping element.
    Ref(ValueReference),
    /// A full instance without a path.
    Instance(Instance),
    /// An instance together with its path (`VALUE.NAMEDINSTANCE` /
    /// `VALUE.OBJECTWITHPATH`).
    NamedInstance { path: ObjectPath, instance: Instance },
    /// A class definition.
    Class(Class),
}

/// Broad shape of a return value, used for result-shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Value,
    Reference,
    Instance,
    Class,
}

impl CimData {
    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            CimData::Value { .. } | CimData::ValueArray { .. } => DataKind::Value,
            CimData::Ref(_) => DataKind::Reference,
            CimData::Instance(_) | CimData::NamedInstance { .. } => DataKind::Instance,
            CimData::Class(_) => DataKind::Class,
        }
    }

    /// The declared type of scalar data; references report `reference`.
    #[must_use]
    pub fn cim_type(&self) -> Option<CimType> {
        match self {
            CimData::Value { cim_type, .. } | CimData::ValueArray { cim_type, .. } => {
                Some(*cim_type)
            }
            CimData::Ref(_) => Some(CimType::scalar(crate::types::CimTypeKind::Reference)),
            CimData::Instance(_) | CimData::NamedInstance { .. } | CimData::Class(_) => None,
        }
    }
}

/// The collection's element kind: the kind of the first element, or `None`
/// for an empty collection.
#[must_use]
pub fn element_kind(values: &[CimData]) -> Option<DataKind> {
    values.first().map(CimData::kind)
}

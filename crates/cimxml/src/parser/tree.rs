//! Borrowed parse tree.
//!
//! The grammar builds these nodes directly over the response buffer; all
//! text is still `&'b str` slices. Conversion into the owned model happens
//! in one place, the response assembler, so allocation is deferred until a
//! document has parsed completely.

use crate::class::ParameterForm;
use crate::types::CimType;

/// The whole parsed document: envelope identity plus one response body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MessageNode<'b> {
    /// `MESSAGE ID`, echoed from the request.
    pub(crate) id: Option<&'b str>,
    /// `NAME` of the `IMETHODRESPONSE`/`METHODRESPONSE`.
    pub(crate) method: Option<&'b str>,
    pub(crate) body: BodyNode<'b>,
}

/// A response carries an `ERROR` or return values, never both.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BodyNode<'b> {
    Error { code: &'b str, description: Option<&'b str> },
    Values(Vec<ValueNode<'b>>),
}

/// One child of `IRETURNVALUE` (or the single `RETURNVALUE`).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueNode<'b> {
    /// `VALUE`; `None` content for a self-closing element.
    Value { cim_type: Option<CimType>, content: Option<&'b str> },
    /// `VALUE.ARRAY` of scalar `VALUE` children.
    ValueArray { cim_type: Option<CimType>, values: Vec<&'b str> },
    /// Any of the path shapes, including bare names.
    Ref(RefNode<'b>),
    /// A bare `INSTANCE`.
    Instance(InstanceNode<'b>),
    /// `VALUE.NAMEDINSTANCE` / `VALUE.OBJECTWITHPATH`: path plus instance.
    NamedInstance { path: RefNode<'b>, instance: InstanceNode<'b> },
    Class(ClassNode<'b>),
}

/// A reference in one of its wire shapes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RefNode<'b> {
    ClassName(&'b str),
    InstanceName(InstanceNameNode<'b>),
    LocalInstancePath { namespace: Vec<&'b str>, name: InstanceNameNode<'b> },
    InstancePath { host: &'b str, namespace: Vec<&'b str>, name: InstanceNameNode<'b> },
    LocalClassPath { namespace: Vec<&'b str>, class_name: &'b str },
    ClassPath { host: &'b str, namespace: Vec<&'b str>, class_name: &'b str },
}

/// `INSTANCENAME`: class name plus key bindings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InstanceNameNode<'b> {
    pub(crate) class_name: &'b str,
    pub(crate) bindings: Vec<KeyBindingNode<'b>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyBindingNode<'b> {
    pub(crate) name: &'b str,
    pub(crate) value: KeyBindingValueNode<'b>,
}

/// `KEYVALUE` or a nested `VALUE.REFERENCE`. The box breaks the cycle
/// through [`RefNode`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum KeyBindingValueNode<'b> {
    KeyValue { value_type: Option<&'b str>, value: &'b str },
    Reference(Box<RefNode<'b>>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InstanceNode<'b> {
    pub(crate) class_name: &'b str,
    pub(crate) qualifiers: Vec<QualifierNode<'b>>,
    pub(crate) properties: Vec<PropertyNode<'b>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PropertyNode<'b> {
    pub(crate) name: &'b str,
    pub(crate) cim_type: Option<CimType>,
    pub(crate) class_origin: Option<&'b str>,
    pub(crate) propagated: bool,
    pub(crate) reference_class: Option<&'b str>,
    pub(crate) qualifiers: Vec<QualifierNode<'b>>,
    pub(crate) value: PropertyValueNode<'b>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum PropertyValueNode<'b> {
    #[default]
    Null,
    Scalar(&'b str),
    Array(Vec<&'b str>),
    Reference(RefNode<'b>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QualifierNode<'b> {
    pub(crate) name: &'b str,
    pub(crate) cim_type: Option<CimType>,
    pub(crate) value: PropertyValueNode<'b>,
    pub(crate) propagated: bool,
    pub(crate) overridable: bool,
    pub(crate) tosubclass: bool,
    pub(crate) toinstance: bool,
    pub(crate) translatable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassNode<'b> {
    pub(crate) name: &'b str,
    pub(crate) super_class: Option<&'b str>,
    pub(crate) qualifiers: Vec<QualifierNode<'b>>,
    pub(crate) properties: Vec<PropertyNode<'b>>,
    pub(crate) methods: Vec<MethodNode<'b>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MethodNode<'b> {
    pub(crate) name: &'b str,
    pub(crate) cim_type: Option<CimType>,
    pub(crate) class_origin: Option<&'b str>,
    pub(crate) propagated: bool,
    pub(crate) qualifiers: Vec<QualifierNode<'b>>,
    pub(crate) parameters: Vec<ParameterNode<'b>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParameterNode<'b> {
    pub(crate) name: &'b str,
    pub(crate) cim_type: Option<CimType>,
    pub(crate) reference_class: Option<&'b str>,
    pub(crate) array_size: Option<&'b str>,
    pub(crate) form: ParameterForm,
    pub(crate) qualifiers: Vec<QualifierNode<'b>>,
}

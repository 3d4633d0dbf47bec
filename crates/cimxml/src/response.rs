//! Owned response header, assembled from the borrowed parse tree.

use log::debug;

use crate::class::{Class, Method, Parameter};
use crate::instance::{Instance, Property, PropertyValue, Qualifier};
use crate::parser::tree::{
    BodyNode, ClassNode, InstanceNameNode, InstanceNode, KeyBindingValueNode, MessageNode,
    MethodNode, ParameterNode, PropertyNode, PropertyValueNode, QualifierNode, RefNode, ValueNode,
};
use crate::path::{KeyBinding, KeyBindingValue, KeyKind, KeyValue, ObjectPath, ValueReference};
use crate::types::{CimType, CimTypeKind};
use crate::value::CimData;

/// One parsed response: the envelope identity plus either return values or
/// a CIMOM error, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHdr {
    /// `MESSAGE ID`, echoed from the request.
    pub id: Option<String>,
    /// Operation name from the `IMETHODRESPONSE`/`METHODRESPONSE` element.
    pub method: Option<String>,
    pub data: ResponseData,
}

/// The mutually exclusive payloads of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    Values(Vec<CimData>),
    Error { code: u16, description: String },
}

impl ResponseHdr {
    /// The return values, or `None` if the response carried an error.
    #[must_use]
    pub fn values(&self) -> Option<&[CimData]> {
        match &self.data {
            ResponseData::Values(values) => Some(values),
            ResponseData::Error { .. } => None,
        }
    }

    /// The CIMOM error, or `None` if the response carried values.
    #[must_use]
    pub fn error(&self) -> Option<(u16, &str)> {
        match &self.data {
            ResponseData::Error { code, description } => Some((*code, description)),
            ResponseData::Values(_) => None,
        }
    }
}

/// Converts the borrowed tree into the owned header. This is the only place
/// response text is copied out of the transport buffer.
pub(crate) fn assemble(message: &MessageNode<'_>) -> ResponseHdr {
    let data = match &message.body {
        BodyNode::Error { code, description } => {
            let code = code.trim().parse().unwrap_or(0);
            let description = description.unwrap_or("").to_owned();
            debug!("CIMOM error {code}: {description}");
            ResponseData::Error { code, description }
        }
        BodyNode::Values(values) => {
            ResponseData::Values(values.iter().map(assemble_value).collect())
        }
    };
    ResponseHdr {
        id: message.id.map(str::to_owned),
        method: message.method.map(str::to_owned),
        data,
    }
}

fn assemble_value(node: &ValueNode<'_>) -> CimData {
    match node {
        ValueNode::Value { cim_type, content } => CimData::Value {
            cim_type: cim_type.unwrap_or(CimType::scalar(CimTypeKind::String)),
            value: content.unwrap_or("").to_owned(),
        },
        ValueNode::ValueArray { cim_type, values } => CimData::ValueArray {
            cim_type: cim_type.unwrap_or(CimType::array_of(CimTypeKind::String)),
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        },
        ValueNode::Ref(r) => CimData::Ref(assemble_ref(r)),
        ValueNode::Instance(i) => CimData::Instance(assemble_instance(i)),
        ValueNode::NamedInstance { path, instance } => CimData::NamedInstance {
            path: assemble_ref(path).into_path(),
            instance: assemble_instance(instance),
        },
        ValueNode::Class(c) => CimData::Class(assemble_class(c)),
    }
}

/// Class paths collapse into the instance-path shapes with an empty key
/// list; the variant keeps recording whether a host and namespace were
/// present on the wire.
fn assemble_ref(node: &RefNode<'_>) -> ValueReference {
    match node {
        RefNode::ClassName(name) => ValueReference::InstanceName(ObjectPath {
            class_name: (*name).to_owned(),
            ..ObjectPath::default()
        }),
        RefNode::InstanceName(name) => ValueReference::InstanceName(assemble_instance_name(name)),
        RefNode::LocalInstancePath { namespace, name } => {
            let mut path = assemble_instance_name(name);
            path.namespace = namespace.iter().map(|c| (*c).to_owned()).collect();
            ValueReference::LocalInstancePath(path)
        }
        RefNode::InstancePath { host, namespace, name } => {
            let mut path = assemble_instance_name(name);
            path.host = Some((*host).to_owned());
            path.namespace = namespace.iter().map(|c| (*c).to_owned()).collect();
            ValueReference::InstancePath(path)
        }
        RefNode::LocalClassPath { namespace, class_name } => {
            ValueReference::LocalInstancePath(ObjectPath {
                namespace: namespace.iter().map(|c| (*c).to_owned()).collect(),
                class_name: (*class_name).to_owned(),
                ..ObjectPath::default()
            })
        }
        RefNode::ClassPath { host, namespace, class_name } => {
            ValueReference::InstancePath(ObjectPath {
                host: Some((*host).to_owned()),
                namespace: namespace.iter().map(|c| (*c).to_owned()).collect(),
                class_name: (*class_name).to_owned(),
                ..ObjectPath::default()
            })
        }
    }
}

fn assemble_instance_name(node: &InstanceNameNode<'_>) -> ObjectPath {
    ObjectPath {
        host: None,
        namespace: Vec::new(),
        class_name: node.class_name.to_owned(),
        keys: node
            .bindings
            .iter()
            .map(|b| KeyBinding {
                name: b.name.to_owned(),
                value: match &b.value {
                    KeyBindingValueNode::KeyValue { value_type, value } => {
                        KeyBindingValue::Value(KeyValue {
                            kind: value_type.map(KeyKind::from_wire).unwrap_or_default(),
                            value: (*value).to_owned(),
                        })
                    }
                    KeyBindingValueNode::Reference(r) => {
                        KeyBindingValue::Reference(assemble_ref(r))
                    }
                },
            })
            .collect(),
    }
}

fn assemble_instance(node: &InstanceNode<'_>) -> Instance {
    Instance {
        class_name: node.class_name.to_owned(),
        properties: node.properties.iter().map(assemble_property).collect(),
        qualifiers: node.qualifiers.iter().map(assemble_qualifier).collect(),
    }
}

fn assemble_property(node: &PropertyNode<'_>) -> Property {
    Property {
        name: node.name.to_owned(),
        cim_type: node.cim_type,
        class_origin: node.class_origin.map(str::to_owned),
        propagated: node.propagated,
        reference_class: node.reference_class.map(str::to_owned),
        qualifiers: node.qualifiers.iter().map(assemble_qualifier).collect(),
        value: assemble_property_value(&node.value),
    }
}

fn assemble_property_value(node: &PropertyValueNode<'_>) -> PropertyValue {
    match node {
        PropertyValueNode::Null => PropertyValue::Null,
        PropertyValueNode::Scalar(v) => PropertyValue::Scalar((*v).to_owned()),
        PropertyValueNode::Array(vs) => {
            PropertyValue::Array(vs.iter().map(|v| (*v).to_owned()).collect())
        }
        PropertyValueNode::Reference(r) => PropertyValue::Reference(assemble_ref(r)),
    }
}

fn assemble_qualifier(node: &QualifierNode<'_>) -> Qualifier {
    Qualifier {
        name: node.name.to_owned(),
        cim_type: node.cim_type,
        value: assemble_property_value(&node.value),
        propagated: node.propagated,
        overridable: node.overridable,
        tosubclass: node.tosubclass,
        toinstance: node.toinstance,
        translatable: node.translatable,
    }
}

fn assemble_class(node: &ClassNode<'_>) -> Class {
    Class {
        name: node.name.to_owned(),
        super_class: node.super_class.map(str::to_owned),
        properties: node.properties.iter().map(assemble_property).collect(),
        qualifiers: node.qualifiers.iter().map(assemble_qualifier).collect(),
        methods: node.methods.iter().map(assemble_method).collect(),
    }
}

fn assemble_method(node: &MethodNode<'_>) -> Method {
    Method {
        name: node.name.to_owned(),
        cim_type: node.cim_type,
        class_origin: node.class_origin.map(str::to_owned),
        propagated: node.propagated,
        qualifiers: node.qualifiers.iter().map(assemble_qualifier).collect(),
        parameters: node.parameters.iter().map(assemble_parameter).collect(),
    }
}

fn assemble_parameter(node: &ParameterNode<'_>) -> Parameter {
    Parameter {
        name: node.name.to_owned(),
        cim_type: node.cim_type,
        reference_class: node.reference_class.map(str::to_owned),
        array_size: node.array_size.map(str::to_owned),
        form: node.form,
        qualifiers: node.qualifiers.iter().map(assemble_qualifier).collect(),
    }
}

//! Request encoding: byte-exact CIM-XML payload templates.
//!
//! One builder per intrinsic operation, each producing the complete request
//! document as a `String`. Parameters follow one canonical order: the name
//! parameter (`ClassName`/`ObjectName`/`InstanceName`) first, then boolean
//! flags in the operation's declared order, then `PropertyList` when a
//! non-empty list was given, then association parameters.

use crate::instance::{Instance, Property, PropertyValue};
use crate::path::{KeyBinding, KeyBindingValue, ObjectPath, ValueReference};

/// Fixed envelope; the message id never varies.
pub(crate) const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
     <CIM CIMVERSION=\"2.0\" DTDVERSION=\"2.0\">\n\
     <MESSAGE ID=\"4711\" PROTOCOLVERSION=\"1.0\"><SIMPLEREQ>\n";

const TRAILER: &str = "</IMETHODCALL></SIMPLEREQ>\n</MESSAGE></CIM>";

/// Boolean operation parameters, all `FALSE` by default. Every operation
/// that takes flags writes each of its flags out explicitly, `TRUE` or
/// `FALSE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFlags {
    pub local_only: bool,
    pub deep_inheritance: bool,
    pub include_qualifiers: bool,
    pub include_class_origin: bool,
}

fn open(op: &str, path: &ObjectPath) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(XML_HEADER);
    out.push_str(&format!("<IMETHODCALL NAME=\"{op}\">"));
    local_namespace_path(&mut out, path);
    out
}

fn close(mut out: String) -> String {
    out.push_str(TRAILER);
    out
}

fn local_namespace_path(out: &mut String, path: &ObjectPath) {
    out.push_str("<LOCALNAMESPACEPATH>");
    for component in &path.namespace {
        out.push_str(&format!("<NAMESPACE NAME=\"{component}\"></NAMESPACE>"));
    }
    out.push_str("</LOCALNAMESPACEPATH>\n");
}

fn boolean_param(out: &mut String, name: &str, value: bool) {
    let value = if value { "TRUE" } else { "FALSE" };
    out.push_str(&format!(
        "<IPARAMVALUE NAME=\"{name}\"><VALUE>{value}</VALUE></IPARAMVALUE>\n"
    ));
}

fn class_name_param(out: &mut String, name: &str, class_name: &str) {
    out.push_str(&format!(
        "<IPARAMVALUE NAME=\"{name}\"><CLASSNAME NAME=\"{class_name}\"/></IPARAMVALUE>\n"
    ));
}

fn string_param(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!(
        "<IPARAMVALUE NAME=\"{name}\"><VALUE>{value}</VALUE></IPARAMVALUE>\n"
    ));
}

/// Omitted entirely when the list is empty; an absent `PropertyList` means
/// "all properties" to the CIMOM, an empty one means "none".
fn property_list_param(out: &mut String, properties: &[&str]) {
    if properties.is_empty() {
        return;
    }
    out.push_str("<IPARAMVALUE NAME=\"PropertyList\"><VALUE.ARRAY>");
    for property in properties {
        out.push_str(&format!("<VALUE>{property}</VALUE>"));
    }
    out.push_str("</VALUE.ARRAY></IPARAMVALUE>\n");
}

fn instance_name_param(out: &mut String, name: &str, path: &ObjectPath) {
    out.push_str(&format!("<IPARAMVALUE NAME=\"{name}\">"));
    instance_name(out, path);
    out.push_str("</IPARAMVALUE>\n");
}

fn instance_name(out: &mut String, path: &ObjectPath) {
    out.push_str(&format!("<INSTANCENAME CLASSNAME=\"{}\">", path.class_name));
    for key in &path.keys {
        key_binding(out, key);
    }
    out.push_str("</INSTANCENAME>");
}

fn key_binding(out: &mut String, key: &KeyBinding) {
    out.push_str(&format!("<KEYBINDING NAME=\"{}\">", key.name));
    match &key.value {
        KeyBindingValue::Value(kv) => {
            out.push_str(&format!(
                "<KEYVALUE VALUETYPE=\"{}\">{}</KEYVALUE>",
                kv.kind.as_str(),
                kv.value
            ));
        }
        KeyBindingValue::Reference(r) => {
            value_reference(out, r);
        }
    }
    out.push_str("</KEYBINDING>");
}

fn value_reference(out: &mut String, reference: &ValueReference) {
    out.push_str("<VALUE.REFERENCE>");
    instance_name(out, reference.path());
    out.push_str("</VALUE.REFERENCE>");
}

fn assoc_params(
    out: &mut String,
    assoc_class: Option<&str>,
    result_class: Option<&str>,
    role: Option<&str>,
    result_role: Option<&str>,
) {
    if let Some(assoc_class) = assoc_class {
        class_name_param(out, "AssocClass", assoc_class);
    }
    if let Some(result_class) = result_class {
        class_name_param(out, "ResultClass", result_class);
    }
    if let Some(role) = role {
        string_param(out, "Role", role);
    }
    if let Some(result_role) = result_role {
        string_param(out, "ResultRole", result_role);
    }
}

#[must_use]
pub fn enum_instance_names(path: &ObjectPath) -> String {
    let mut out = open("EnumerateInstanceNames", path);
    class_name_param(&mut out, "ClassName", &path.class_name);
    close(out)
}

/// Flag order: LocalOnly, IncludeClassOrigin, IncludeQualifiers.
#[must_use]
pub fn get_instance(path: &ObjectPath, flags: RequestFlags, properties: &[&str]) -> String {
    let mut out = open("GetInstance", path);
    instance_name_param(&mut out, "InstanceName", path);
    boolean_param(&mut out, "LocalOnly", flags.local_only);
    boolean_param(&mut out, "IncludeClassOrigin", flags.include_class_origin);
    boolean_param(&mut out, "IncludeQualifiers", flags.include_qualifiers);
    property_list_param(&mut out, properties);
    close(out)
}

#[must_use]
pub fn create_instance(path: &ObjectPath, instance: &Instance) -> String {
    let mut out = open("CreateInstance", path);
    out.push_str("<IPARAMVALUE NAME=\"NewInstance\">");
    out.push_str(&format!("<INSTANCE CLASSNAME=\"{}\">", instance.class_name));
    for property in &instance.properties {
        instance_property(&mut out, property);
    }
    out.push_str("</INSTANCE></IPARAMVALUE>\n");
    close(out)
}

fn instance_property(out: &mut String, property: &Property) {
    let type_attr = match property.cim_type {
        Some(t) => format!(" TYPE=\"{}\"", t.kind.as_str()),
        None => String::new(),
    };
    match &property.value {
        PropertyValue::Null => {
            out.push_str(&format!("<PROPERTY NAME=\"{}\"{type_attr}/>", property.name));
        }
        PropertyValue::Scalar(value) => {
            out.push_str(&format!(
                "<PROPERTY NAME=\"{}\"{type_attr}><VALUE>{value}</VALUE></PROPERTY>",
                property.name
            ));
        }
        PropertyValue::Array(values) => {
            out.push_str(&format!(
                "<PROPERTY.ARRAY NAME=\"{}\"{type_attr}><VALUE.ARRAY>",
                property.name
            ));
            for value in values {
                out.push_str(&format!("<VALUE>{value}</VALUE>"));
            }
            out.push_str("</VALUE.ARRAY></PROPERTY.ARRAY>");
        }
        PropertyValue::Reference(r) => {
            out.push_str(&format!("<PROPERTY.REFERENCE NAME=\"{}\">", property.name));
            value_reference(out, r);
            out.push_str("</PROPERTY.REFERENCE>");
        }
    }
}

#[must_use]
pub fn delete_instance(path: &ObjectPath) -> String {
    let mut out = open("DeleteInstance", path);
    instance_name_param(&mut out, "InstanceName", path);
    close(out)
}

/// Flag order: DeepInheritance, LocalOnly, IncludeQualifiers,
/// IncludeClassOrigin.
#[must_use]
pub fn enum_instances(path: &ObjectPath, flags: RequestFlags, properties: &[&str]) -> String {
    let mut out = open("EnumerateInstances", path);
    class_name_param(&mut out, "ClassName", &path.class_name);
    boolean_param(&mut out, "DeepInheritance", flags.deep_inheritance);
    boolean_param(&mut out, "LocalOnly", flags.local_only);
    boolean_param(&mut out, "IncludeQualifiers", flags.include_qualifiers);
    boolean_param(&mut out, "IncludeClassOrigin", flags.include_class_origin);
    property_list_param(&mut out, properties);
    close(out)
}

/// Flag order: IncludeClassOrigin, IncludeQualifiers.
#[must_use]
pub fn associators(
    path: &ObjectPath,
    assoc_class: Option<&str>,
    result_class: Option<&str>,
    role: Option<&str>,
    result_role: Option<&str>,
    flags: RequestFlags,
    properties: &[&str],
) -> String {
    let mut out = open("Associators", path);
    instance_name_param(&mut out, "ObjectName", path);
    boolean_param(&mut out, "IncludeClassOrigin", flags.include_class_origin);
    boolean_param(&mut out, "IncludeQualifiers", flags.include_qualifiers);
    property_list_param(&mut out, properties);
    assoc_params(&mut out, assoc_class, result_class, role, result_role);
    close(out)
}

#[must_use]
pub fn associator_names(
    path: &ObjectPath,
    assoc_class: Option<&str>,
    result_class: Option<&str>,
    role: Option<&str>,
    result_role: Option<&str>,
) -> String {
    let mut out = open("AssociatorNames", path);
    instance_name_param(&mut out, "ObjectName", path);
    assoc_params(&mut out, assoc_class, result_class, role, result_role);
    close(out)
}

/// Flag order: IncludeClassOrigin, IncludeQualifiers.
#[must_use]
pub fn references(
    path: &ObjectPath,
    result_class: Option<&str>,
    role: Option<&str>,
    flags: RequestFlags,
    properties: &[&str],
) -> String {
    let mut out = open("References", path);
    instance_name_param(&mut out, "ObjectName", path);
    boolean_param(&mut out, "IncludeClassOrigin", flags.include_class_origin);
    boolean_param(&mut out, "IncludeQualifiers", flags.include_qualifiers);
    property_list_param(&mut out, properties);
    assoc_params(&mut out, None, result_class, role, None);
    close(out)
}

#[must_use]
pub fn reference_names(
    path: &ObjectPath,
    result_class: Option<&str>,
    role: Option<&str>,
) -> String {
    let mut out = open("ReferenceNames", path);
    instance_name_param(&mut out, "ObjectName", path);
    assoc_params(&mut out, None, result_class, role, None);
    close(out)
}

#[must_use]
pub fn get_property(path: &ObjectPath, name: &str) -> String {
    let mut out = open("GetProperty", path);
    instance_name_param(&mut out, "InstanceName", path);
    string_param(&mut out, "PropertyName", name);
    close(out)
}

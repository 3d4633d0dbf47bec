//! Element dispatch table and attribute-list reader.
//!
//! Every element the response grammar can see has one entry in [`TAGS`]
//! giving its name, its scan function, and its end-tag marker. Lookup is a
//! linear first-match scan, so the order is significant: longer names that
//! share a prefix with a shorter name come first (`VALUE.ARRAY` before
//! `VALUE`, `PROPERTY.REFERENCE` before `PROPERTY`), with the word-boundary
//! rule in [`XmlScanner::eat_word`] covering the rest (`CLASS` never matches
//! `CLASSNAME`). Roughly frequency-ordered beyond that, common response
//! elements first.

use crate::types::{CimType, CimTypeKind};

use super::error::ScanError;
use super::scanner::XmlScanner;

/// Most attributes any element declares (`QUALIFIER`, with seven).
pub(crate) const MAX_ATTRS: usize = 7;

/// End-tag markers, one per dispatch-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElemEnd {
    XmlDecl,
    Cim,
    Message,
    SimpleRsp,
    Error,
    IMethodResponse,
    IReturnValue,
    LocalNamespacePath,
    LocalInstancePath,
    LocalClassPath,
    NamespacePath,
    Namespace,
    ParamValue,
    ClassName,
    ValueArray,
    ValueNamedInstance,
    ValueReference,
    ValueObjectWithPath,
    Value,
    Host,
    KeyValue,
    KeyBinding,
    InstancePath,
    InstanceName,
    Instance,
    PropertyReference,
    PropertyArray,
    Property,
    Qualifier,
    ParameterArray,
    ParameterReference,
    ParameterRefArray,
    Parameter,
    Method,
    Class,
    ObjectPath,
    MethodResponse,
    ReturnValue,
    ClassPath,
}

/// One scanned start tag with its attributes pulled apart, or an end tag,
/// or end of input. Attribute slices borrow from the response buffer.
///
/// Required-ness is not enforced here: attributes the element did not carry
/// are `None`, and the grammar decides which ones it cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum XmlToken<'b> {
    XmlDecl,
    Cim,
    Message { id: Option<&'b str> },
    SimpleRsp,
    Error { code: Option<&'b str>, description: Option<&'b str> },
    IMethodResponse { name: Option<&'b str> },
    IReturnValue,
    LocalNamespacePath,
    LocalInstancePath,
    LocalClassPath,
    NamespacePath,
    Namespace { name: Option<&'b str> },
    ParamValue { name: Option<&'b str>, cim_type: Option<CimType> },
    ClassName { name: Option<&'b str> },
    ValueArray,
    ValueNamedInstance,
    ValueReference,
    ValueObjectWithPath,
    Value { content: Option<&'b str> },
    Host { content: Option<&'b str> },
    KeyValue { value_type: Option<&'b str>, content: Option<&'b str> },
    KeyBinding { name: Option<&'b str> },
    InstancePath,
    InstanceName { class_name: Option<&'b str> },
    Instance { class_name: Option<&'b str> },
    PropertyReference {
        name: Option<&'b str>,
        reference_class: Option<&'b str>,
        class_origin: Option<&'b str>,
        propagated: bool,
    },
    PropertyArray {
        name: Option<&'b str>,
        cim_type: Option<CimType>,
        class_origin: Option<&'b str>,
        propagated: bool,
        array_size: Option<&'b str>,
    },
    Property {
        name: Option<&'b str>,
        cim_type: Option<CimType>,
        class_origin: Option<&'b str>,
        propagated: bool,
    },
    Qualifier {
        name: Option<&'b str>,
        cim_type: Option<CimType>,
        propagated: bool,
        overridable: bool,
        tosubclass: bool,
        toinstance: bool,
        translatable: bool,
    },
    ParameterArray {
        name: Option<&'b str>,
        cim_type: Option<CimType>,
        array_size: Option<&'b str>,
    },
    ParameterReference { name: Option<&'b str>, reference_class: Option<&'b str> },
    ParameterRefArray {
        name: Option<&'b str>,
        reference_class: Option<&'b str>,
        array_size: Option<&'b str>,
    },
    Parameter { name: Option<&'b str>, cim_type: Option<CimType> },
    Method {
        name: Option<&'b str>,
        cim_type: Option<CimType>,
        class_origin: Option<&'b str>,
        propagated: bool,
    },
    Class { name: Option<&'b str>, super_class: Option<&'b str> },
    ObjectPath,
    MethodResponse { name: Option<&'b str> },
    ReturnValue { cim_type: Option<CimType> },
    ClassPath,
    End(ElemEnd),
    Eof,
}

impl XmlToken<'_> {
    /// Short name for diagnostics.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            XmlToken::XmlDecl => "<?xml?>",
            XmlToken::Cim => "<CIM>",
            XmlToken::Message { .. } => "<MESSAGE>",
            XmlToken::SimpleRsp => "<SIMPLERSP>",
            XmlToken::Error { .. } => "<ERROR>",
            XmlToken::IMethodResponse { .. } => "<IMETHODRESPONSE>",
            XmlToken::IReturnValue => "<IRETURNVALUE>",
            XmlToken::LocalNamespacePath => "<LOCALNAMESPACEPATH>",
            XmlToken::LocalInstancePath => "<LOCALINSTANCEPATH>",
            XmlToken::LocalClassPath => "<LOCALCLASSPATH>",
            XmlToken::NamespacePath => "<NAMESPACEPATH>",
            XmlToken::Namespace { .. } => "<NAMESPACE>",
            XmlToken::ParamValue { .. } => "<PARAMVALUE>",
            XmlToken::ClassName { .. } => "<CLASSNAME>",
            XmlToken::ValueArray => "<VALUE.ARRAY>",
            XmlToken::ValueNamedInstance => "<VALUE.NAMEDINSTANCE>",
            XmlToken::ValueReference => "<VALUE.REFERENCE>",
            XmlToken::ValueObjectWithPath => "<VALUE.OBJECTWITHPATH>",
            XmlToken::Value { .. } => "<VALUE>",
            XmlToken::Host { .. } => "<HOST>",
            XmlToken::KeyValue { .. } => "<KEYVALUE>",
            XmlToken::KeyBinding { .. } => "<KEYBINDING>",
            XmlToken::InstancePath => "<INSTANCEPATH>",
            XmlToken::InstanceName { .. } => "<INSTANCENAME>",
            XmlToken::Instance { .. } => "<INSTANCE>",
            XmlToken::PropertyReference { .. } => "<PROPERTY.REFERENCE>",
            XmlToken::PropertyArray { .. } => "<PROPERTY.ARRAY>",
            XmlToken::Property { .. } => "<PROPERTY>",
            XmlToken::Qualifier { .. } => "<QUALIFIER>",
            XmlToken::ParameterArray { .. } => "<PARAMETER.ARRAY>",
            XmlToken::ParameterReference { .. } => "<PARAMETER.REFERENCE>",
            XmlToken::ParameterRefArray { .. } => "<PARAMETER.REFARRAY>",
            XmlToken::Parameter { .. } => "<PARAMETER>",
            XmlToken::Method { .. } => "<METHOD>",
            XmlToken::Class { .. } => "<CLASS>",
            XmlToken::ObjectPath => "<OBJECTPATH>",
            XmlToken::MethodResponse { .. } => "<METHODRESPONSE>",
            XmlToken::ReturnValue { .. } => "<RETURNVALUE>",
            XmlToken::ClassPath => "<CLASSPATH>",
            XmlToken::End(_) => "an end tag",
            XmlToken::Eof => "end of input",
        }
    }
}

/// Reads the attribute list of the element whose name was just consumed,
/// through the closing `>`, `/>`, or (for the declaration only) `?>`.
///
/// Attributes may appear in any order and each at most once; the result
/// array is indexed by position in `names`. Self-closing terminators park
/// the element's end marker in [`XmlScanner::pending_end`].
pub(crate) fn read_attrs<'b>(
    xb: &mut XmlScanner<'b>,
    element: &'static str,
    names: &[&'static str],
    end: ElemEnd,
) -> Result<[Option<&'b str>; MAX_ATTRS], ScanError> {
    debug_assert!(names.len() <= MAX_ATTRS);
    let mut found = [None; MAX_ATTRS];
    loop {
        xb.skip_ws();
        if !xb.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            break;
        }
        let mut matched = false;
        for (n, name) in names.iter().enumerate() {
            if found[n].is_some() {
                continue;
            }
            if xb.eat_word(name, false) {
                xb.skip_ws();
                if !xb.eat_char(b'=') {
                    return Err(ScanError::ExpectedEquals { element });
                }
                found[n] = Some(xb.read_value(element)?);
                matched = true;
                break;
            }
        }
        if !matched {
            return Err(ScanError::UnknownAttribute { element, found: xb.snippet(10) });
        }
    }
    if xb.eat_str("/>") {
        xb.pending_end = Some(end);
        Ok(found)
    } else if xb.eat_char(b'>') {
        Ok(found)
    } else if element == "?xml" && xb.eat_str("?>") {
        xb.pending_end = Some(end);
        Ok(found)
    } else {
        Err(ScanError::BadAttributeList { element, found: xb.snippet(30) })
    }
}

fn type_of(attr: Option<&str>) -> Option<CimType> {
    attr.and_then(CimTypeKind::from_wire).map(CimType::scalar)
}

fn array_type_of(attr: Option<&str>) -> Option<CimType> {
    attr.and_then(CimTypeKind::from_wire).map(CimType::array_of)
}

/// Boolean attributes are `"true"` (any case) or effectively false.
fn flag(attr: Option<&str>) -> bool {
    attr.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

pub(crate) type TagScan = for<'b> fn(&mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError>;

pub(crate) struct TagEntry {
    pub(crate) name: &'static str,
    pub(crate) scan: TagScan,
    pub(crate) end: ElemEnd,
}

fn scan_xml_decl<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "?xml", &["version", "encoding"], ElemEnd::XmlDecl)?;
    Ok(XmlToken::XmlDecl)
}

fn scan_cim<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "CIM", &["CIMVERSION", "DTDVERSION"], ElemEnd::Cim)?;
    Ok(XmlToken::Cim)
}

fn scan_message<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "MESSAGE", &["ID", "PROTOCOLVERSION"], ElemEnd::Message)?;
    Ok(XmlToken::Message { id: a[0] })
}

fn scan_simple_rsp<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "SIMPLERSP", &[], ElemEnd::SimpleRsp)?;
    Ok(XmlToken::SimpleRsp)
}

fn scan_error<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "ERROR", &["CODE", "DESCRIPTION"], ElemEnd::Error)?;
    Ok(XmlToken::Error { code: a[0], description: a[1] })
}

fn scan_imethod_response<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "IMETHODRESPONSE", &["NAME"], ElemEnd::IMethodResponse)?;
    Ok(XmlToken::IMethodResponse { name: a[0] })
}

fn scan_ireturn_value<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "IRETURNVALUE", &[], ElemEnd::IReturnValue)?;
    Ok(XmlToken::IReturnValue)
}

fn scan_local_namespace_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "LOCALNAMESPACEPATH", &[], ElemEnd::LocalNamespacePath)?;
    Ok(XmlToken::LocalNamespacePath)
}

fn scan_local_instance_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "LOCALINSTANCEPATH", &[], ElemEnd::LocalInstancePath)?;
    Ok(XmlToken::LocalInstancePath)
}

fn scan_local_class_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "LOCALCLASSPATH", &[], ElemEnd::LocalClassPath)?;
    Ok(XmlToken::LocalClassPath)
}

fn scan_namespace_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "NAMESPACEPATH", &[], ElemEnd::NamespacePath)?;
    Ok(XmlToken::NamespacePath)
}

fn scan_namespace<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "NAMESPACE", &["NAME"], ElemEnd::Namespace)?;
    Ok(XmlToken::Namespace { name: a[0] })
}

fn scan_param_value<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "PARAMVALUE", &["NAME", "PARAMTYPE"], ElemEnd::ParamValue)?;
    Ok(XmlToken::ParamValue { name: a[0], cim_type: type_of(a[1]) })
}

fn scan_class_name<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "CLASSNAME", &["NAME"], ElemEnd::ClassName)?;
    Ok(XmlToken::ClassName { name: a[0] })
}

fn scan_value_array<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "VALUE.ARRAY", &[], ElemEnd::ValueArray)?;
    Ok(XmlToken::ValueArray)
}

fn scan_value_named_instance<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "VALUE.NAMEDINSTANCE", &[], ElemEnd::ValueNamedInstance)?;
    Ok(XmlToken::ValueNamedInstance)
}

fn scan_value_reference<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "VALUE.REFERENCE", &[], ElemEnd::ValueReference)?;
    Ok(XmlToken::ValueReference)
}

fn scan_value_object_with_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "VALUE.OBJECTWITHPATH", &[], ElemEnd::ValueObjectWithPath)?;
    Ok(XmlToken::ValueObjectWithPath)
}

fn scan_value<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "VALUE", &[], ElemEnd::Value)?;
    Ok(XmlToken::Value { content: xb.read_content() })
}

fn scan_host<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "HOST", &[], ElemEnd::Host)?;
    Ok(XmlToken::Host { content: xb.read_content() })
}

fn scan_key_value<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "KEYVALUE", &["VALUETYPE"], ElemEnd::KeyValue)?;
    Ok(XmlToken::KeyValue { value_type: a[0], content: xb.read_content() })
}

fn scan_key_binding<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "KEYBINDING", &["NAME"], ElemEnd::KeyBinding)?;
    Ok(XmlToken::KeyBinding { name: a[0] })
}

fn scan_instance_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "INSTANCEPATH", &[], ElemEnd::InstancePath)?;
    Ok(XmlToken::InstancePath)
}

fn scan_instance_name<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "INSTANCENAME", &["CLASSNAME"], ElemEnd::InstanceName)?;
    Ok(XmlToken::InstanceName { class_name: a[0] })
}

fn scan_instance<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "INSTANCE", &["CLASSNAME"], ElemEnd::Instance)?;
    Ok(XmlToken::Instance { class_name: a[0] })
}

fn scan_property_reference<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "PROPERTY.REFERENCE",
        &["NAME", "REFERENCECLASS", "CLASSORIGIN", "PROPAGATED"],
        ElemEnd::PropertyReference,
    )?;
    Ok(XmlToken::PropertyReference {
        name: a[0],
        reference_class: a[1],
        class_origin: a[2],
        propagated: flag(a[3]),
    })
}

fn scan_property_array<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "PROPERTY.ARRAY",
        &["NAME", "TYPE", "CLASSORIGIN", "PROPAGATED", "ARRAYSIZE"],
        ElemEnd::PropertyArray,
    )?;
    Ok(XmlToken::PropertyArray {
        name: a[0],
        cim_type: array_type_of(a[1]),
        class_origin: a[2],
        propagated: flag(a[3]),
        array_size: a[4],
    })
}

fn scan_property<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "PROPERTY",
        &["NAME", "TYPE", "CLASSORIGIN", "PROPAGATED"],
        ElemEnd::Property,
    )?;
    Ok(XmlToken::Property {
        name: a[0],
        cim_type: type_of(a[1]),
        class_origin: a[2],
        propagated: flag(a[3]),
    })
}

fn scan_qualifier<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "QUALIFIER",
        &["NAME", "TYPE", "PROPAGATED", "OVERRIDABLE", "TOSUBCLASS", "TOINSTANCE", "TRANSLATABLE"],
        ElemEnd::Qualifier,
    )?;
    Ok(XmlToken::Qualifier {
        name: a[0],
        cim_type: type_of(a[1]),
        propagated: flag(a[2]),
        overridable: flag(a[3]),
        tosubclass: flag(a[4]),
        toinstance: flag(a[5]),
        translatable: flag(a[6]),
    })
}

fn scan_parameter_array<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "PARAMETER.ARRAY",
        &["NAME", "TYPE", "ARRAYSIZE"],
        ElemEnd::ParameterArray,
    )?;
    Ok(XmlToken::ParameterArray { name: a[0], cim_type: array_type_of(a[1]), array_size: a[2] })
}

fn scan_parameter_reference<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "PARAMETER.REFERENCE",
        &["NAME", "REFERENCECLASS"],
        ElemEnd::ParameterReference,
    )?;
    Ok(XmlToken::ParameterReference { name: a[0], reference_class: a[1] })
}

fn scan_parameter_ref_array<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "PARAMETER.REFARRAY",
        &["NAME", "REFERENCECLASS", "ARRAYSIZE"],
        ElemEnd::ParameterRefArray,
    )?;
    Ok(XmlToken::ParameterRefArray { name: a[0], reference_class: a[1], array_size: a[2] })
}

fn scan_parameter<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "PARAMETER", &["NAME", "TYPE"], ElemEnd::Parameter)?;
    Ok(XmlToken::Parameter { name: a[0], cim_type: type_of(a[1]) })
}

fn scan_method<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(
        xb,
        "METHOD",
        &["NAME", "TYPE", "CLASSORIGIN", "PROPAGATED"],
        ElemEnd::Method,
    )?;
    Ok(XmlToken::Method {
        name: a[0],
        cim_type: type_of(a[1]),
        class_origin: a[2],
        propagated: flag(a[3]),
    })
}

fn scan_class<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "CLASS", &["NAME", "SUPERCLASS"], ElemEnd::Class)?;
    Ok(XmlToken::Class { name: a[0], super_class: a[1] })
}

fn scan_object_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "OBJECTPATH", &[], ElemEnd::ObjectPath)?;
    Ok(XmlToken::ObjectPath)
}

fn scan_method_response<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "METHODRESPONSE", &["NAME"], ElemEnd::MethodResponse)?;
    Ok(XmlToken::MethodResponse { name: a[0] })
}

fn scan_return_value<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    let a = read_attrs(xb, "RETURNVALUE", &["PARAMTYPE"], ElemEnd::ReturnValue)?;
    Ok(XmlToken::ReturnValue { cim_type: type_of(a[0]) })
}

fn scan_class_path<'b>(xb: &mut XmlScanner<'b>) -> Result<XmlToken<'b>, ScanError> {
    read_attrs(xb, "CLASSPATH", &[], ElemEnd::ClassPath)?;
    Ok(XmlToken::ClassPath)
}

pub(crate) const TAGS: &[TagEntry] = &[
    TagEntry { name: "?xml", scan: scan_xml_decl, end: ElemEnd::XmlDecl },
    TagEntry { name: "CIM", scan: scan_cim, end: ElemEnd::Cim },
    TagEntry { name: "MESSAGE", scan: scan_message, end: ElemEnd::Message },
    TagEntry { name: "SIMPLERSP", scan: scan_simple_rsp, end: ElemEnd::SimpleRsp },
    TagEntry { name: "ERROR", scan: scan_error, end: ElemEnd::Error },
    TagEntry { name: "IMETHODRESPONSE", scan: scan_imethod_response, end: ElemEnd::IMethodResponse },
    TagEntry { name: "IRETURNVALUE", scan: scan_ireturn_value, end: ElemEnd::IReturnValue },
    TagEntry {
        name: "LOCALNAMESPACEPATH",
        scan: scan_local_namespace_path,
        end: ElemEnd::LocalNamespacePath,
    },
    TagEntry {
        name: "LOCALINSTANCEPATH",
        scan: scan_local_instance_path,
        end: ElemEnd::LocalInstancePath,
    },
    TagEntry { name: "LOCALCLASSPATH", scan: scan_local_class_path, end: ElemEnd::LocalClassPath },
    TagEntry { name: "NAMESPACEPATH", scan: scan_namespace_path, end: ElemEnd::NamespacePath },
    TagEntry { name: "NAMESPACE", scan: scan_namespace, end: ElemEnd::Namespace },
    TagEntry { name: "PARAMVALUE", scan: scan_param_value, end: ElemEnd::ParamValue },
    TagEntry { name: "CLASSNAME", scan: scan_class_name, end: ElemEnd::ClassName },
    TagEntry { name: "VALUE.ARRAY", scan: scan_value_array, end: ElemEnd::ValueArray },
    TagEntry {
        name: "VALUE.NAMEDINSTANCE",
        scan: scan_value_named_instance,
        end: ElemEnd::ValueNamedInstance,
    },
    TagEntry { name: "VALUE.REFERENCE", scan: scan_value_reference, end: ElemEnd::ValueReference },
    TagEntry {
        name: "VALUE.OBJECTWITHPATH",
        scan: scan_value_object_with_path,
        end: ElemEnd::ValueObjectWithPath,
    },
    TagEntry { name: "VALUE", scan: scan_value, end: ElemEnd::Value },
    TagEntry { name: "HOST", scan: scan_host, end: ElemEnd::Host },
    TagEntry { name: "KEYVALUE", scan: scan_key_value, end: ElemEnd::KeyValue },
    TagEntry { name: "KEYBINDING", scan: scan_key_binding, end: ElemEnd::KeyBinding },
    TagEntry { name: "INSTANCEPATH", scan: scan_instance_path, end: ElemEnd::InstancePath },
    TagEntry { name: "INSTANCENAME", scan: scan_instance_name, end: ElemEnd::InstanceName },
    TagEntry { name: "INSTANCE", scan: scan_instance, end: ElemEnd::Instance },
    TagEntry {
        name: "PROPERTY.REFERENCE",
        scan: scan_property_reference,
        end: ElemEnd::PropertyReference,
    },
    TagEntry { name: "PROPERTY.ARRAY", scan: scan_property_array, end: ElemEnd::PropertyArray },
    TagEntry { name: "PROPERTY", scan: scan_property, end: ElemEnd::Property },
    TagEntry { name: "QUALIFIER", scan: scan_qualifier, end: ElemEnd::Qualifier },
    TagEntry { name: "PARAMETER.ARRAY", scan: scan_parameter_array, end: ElemEnd::ParameterArray },
    TagEntry {
        name: "PARAMETER.REFERENCE",
        scan: scan_parameter_reference,
        end: ElemEnd::ParameterReference,
    },
    TagEntry {
        name: "PARAMETER.REFARRAY",
        scan: scan_parameter_ref_array,
        end: ElemEnd::ParameterRefArray,
    },
    TagEntry { name: "PARAMETER", scan: scan_parameter, end: ElemEnd::Parameter },
    TagEntry { name: "METHOD", scan: scan_method, end: ElemEnd::Method },
    TagEntry { name: "CLASS", scan: scan_class, end: ElemEnd::Class },
    TagEntry { name: "OBJECTPATH", scan: scan_object_path, end: ElemEnd::ObjectPath },
    TagEntry { name: "METHODRESPONSE", scan: scan_method_response, end: ElemEnd::MethodResponse },
    TagEntry { name: "RETURNVALUE", scan: scan_return_value, end: ElemEnd::ReturnValue },
    TagEntry { name: "CLASSPATH", scan: scan_class_path, end: ElemEnd::ClassPath },
];

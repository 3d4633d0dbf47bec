#![allow(missing_docs)]

//! End-to-end response parsing through the public API.

mod common;

use cimxml::{
    parse_response, CimData, CimType, CimTypeKind, KeyBindingValue, KeyKind, PropertyValue,
    ResponseData, ValueReference,
};
use common::envelope;

#[test]
fn enumerate_instances_builds_named_instances() {
    let doc = envelope(
        "EnumerateInstances",
        "<IRETURNVALUE>\n\
         <VALUE.NAMEDINSTANCE>\n\
         <INSTANCENAME CLASSNAME=\"Acme_Disk\">\n\
         <KEYBINDING NAME=\"Id\"><KEYVALUE VALUETYPE=\"numeric\">17</KEYVALUE></KEYBINDING>\n\
         </INSTANCENAME>\n\
         <INSTANCE CLASSNAME=\"Acme_Disk\">\n\
         <PROPERTY NAME=\"Model\" TYPE=\"string\"><VALUE>QX-7</VALUE></PROPERTY>\n\
         <PROPERTY NAME=\"BlockSize\" TYPE=\"uint32\"><VALUE>512</VALUE></PROPERTY>\n\
         </INSTANCE>\n\
         </VALUE.NAMEDINSTANCE>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let values = hdr.values().unwrap();
    assert_eq!(values.len(), 1);

    let CimData::NamedInstance { path, instance } = &values[0] else {
        panic!("expected a named instance");
    };
    assert_eq!(path.class_name, "Acme_Disk");
    assert_eq!(path.keys.len(), 1);
    assert_eq!(path.keys[0].name, "Id");
    let KeyBindingValue::Value(key) = &path.keys[0].value else {
        panic!("expected a scalar key");
    };
    assert_eq!(key.kind, KeyKind::Numeric);
    assert_eq!(key.value, "17");

    let block_size = instance.property("blocksize").unwrap();
    assert_eq!(block_size.cim_type, Some(CimType::scalar(CimTypeKind::UInt32)));
    assert_eq!(block_size.value, PropertyValue::Scalar("512".to_owned()));
}

#[test]
fn instance_paths_keep_host_and_namespace() {
    let doc = envelope(
        "AssociatorNames",
        "<IRETURNVALUE>\n\
         <OBJECTPATH>\n\
         <INSTANCEPATH>\n\
         <NAMESPACEPATH><HOST>cimhost</HOST>\n\
         <LOCALNAMESPACEPATH>\n\
         <NAMESPACE NAME=\"root\"/><NAMESPACE NAME=\"cimv2\"/>\n\
         </LOCALNAMESPACEPATH>\n\
         </NAMESPACEPATH>\n\
         <INSTANCENAME CLASSNAME=\"Acme_User\">\n\
         <KEYBINDING NAME=\"Name\"><KEYVALUE>root</KEYVALUE></KEYBINDING>\n\
         </INSTANCENAME>\n\
         </INSTANCEPATH>\n\
         </OBJECTPATH>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let values = hdr.values().unwrap();

    let CimData::Ref(ValueReference::InstancePath(path)) = &values[0] else {
        panic!("expected an instance path");
    };
    assert_eq!(path.host.as_deref(), Some("cimhost"));
    assert_eq!(path.namespace_string(), "root/cimv2");
    assert_eq!(path.class_name, "Acme_User");
}

#[test]
fn untyped_values_default_to_string() {
    let doc = envelope("GetProperty", "<IRETURNVALUE><VALUE>QX-7</VALUE></IRETURNVALUE>");
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(
        hdr.values(),
        Some(
            &[CimData::Value {
                cim_type: CimType::scalar(CimTypeKind::String),
                value: "QX-7".to_owned(),
            }][..]
        )
    );
}

#[test]
fn cimom_errors_carry_code_and_description() {
    let doc = envelope(
        "GetInstance",
        "<ERROR CODE=\"6\" DESCRIPTION=\"CIM_ERR_NOT_FOUND\"></ERROR>",
    );
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(hdr.error(), Some((6, "CIM_ERR_NOT_FOUND")));
    assert!(hdr.values().is_none());
    assert!(matches!(hdr.data, ResponseData::Error { code: 6, .. }));
}

#[test]
fn malformed_documents_fail_with_a_scan_error() {
    let doc = envelope("GetInstance", "<BOGUS/>");
    let err = parse_response(&doc).unwrap_err();
    assert!(err.to_string().contains("BOGUS"));

    assert!(parse_response("<?xml version=\"1.0\" ?>").is_err());
    assert!(parse_response("").is_err());
}

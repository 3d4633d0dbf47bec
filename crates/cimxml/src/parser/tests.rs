use rstest::rstest;

use crate::instance::PropertyValue;
use crate::parser::parse_response;
use crate::path::{KeyBindingValue, KeyKind, ValueReference};
use crate::response::ResponseData;
use crate::types::{CimType, CimTypeKind};
use crate::value::CimData;
use crate::ScanError;

fn envelope(method: &str, inner: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
         <CIM CIMVERSION=\"2.0\" DTDVERSION=\"2.0\">\n\
         <MESSAGE ID=\"4711\" PROTOCOLVERSION=\"1.0\">\n\
         <SIMPLERSP>\n\
         <IMETHODRESPONSE NAME=\"{method}\">\n\
         {inner}\n\
         </IMETHODRESPONSE>\n\
         </SIMPLERSP>\n\
         </MESSAGE>\n\
         </CIM>"
    )
}

#[test]
fn envelope_identity_is_captured() {
    let doc = envelope("EnumerateInstanceNames", "<IRETURNVALUE></IRETURNVALUE>");
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(hdr.id.as_deref(), Some("4711"));
    assert_eq!(hdr.method.as_deref(), Some("EnumerateInstanceNames"));
    assert_eq!(hdr.values(), Some(&[][..]));
}

#[test]
fn error_response_has_no_values() {
    let doc = envelope(
        "GetInstance",
        "<ERROR CODE=\"6\" DESCRIPTION=\"CIM_ERR_NOT_FOUND\"/>",
    );
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(hdr.error(), Some((6, "CIM_ERR_NOT_FOUND")));
    assert!(hdr.values().is_none());
}

#[test]
fn error_without_description() {
    let doc = envelope("GetInstance", "<ERROR CODE=\"1\"/>");
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(hdr.error(), Some((1, "")));
}

#[test]
fn empty_imethodresponse_is_an_empty_value_list() {
    let doc = envelope("DeleteInstance", "");
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(hdr.values(), Some(&[][..]));
}

#[test]
fn enumerate_instance_names_yields_paths() {
    let doc = envelope(
        "EnumerateInstanceNames",
        "<IRETURNVALUE>\n\
         <INSTANCENAME CLASSNAME=\"Acme_Disk\">\n\
         <KEYBINDING NAME=\"Id\"><KEYVALUE VALUETYPE=\"numeric\">17</KEYVALUE></KEYBINDING>\n\
         <KEYBINDING NAME=\"Tag\"><KEYVALUE>vol0</KEYVALUE></KEYBINDING>\n\
         </INSTANCENAME>\n\
         <INSTANCENAME CLASSNAME=\"Acme_Disk\"/>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let values = hdr.values().unwrap();
    assert_eq!(values.len(), 2);

    let CimData::Ref(ValueReference::InstanceName(path)) = &values[0] else {
        panic!("expected an instance name");
    };
    assert_eq!(path.class_name, "Acme_Disk");
    assert_eq!(path.keys.len(), 2);
    assert_eq!(path.keys[0].name, "Id");
    let KeyBindingValue::Value(kv) = &path.keys[0].value else {
        panic!("expected a scalar key");
    };
    assert_eq!(kv.kind, KeyKind::Numeric);
    assert_eq!(kv.value, "17");
    // VALUETYPE defaults to string when absent.
    let KeyBindingValue::Value(kv) = &path.keys[1].value else {
        panic!("expected a scalar key");
    };
    assert_eq!(kv.kind, KeyKind::String);

    let CimData::Ref(ValueReference::InstanceName(path)) = &values[1] else {
        panic!("expected an instance name");
    };
    assert!(path.keys.is_empty());
}

#[test]
fn named_instance_carries_path_and_properties() {
    let doc = envelope(
        "EnumerateInstances",
        "<IRETURNVALUE>\n\
         <VALUE.NAMEDINSTANCE>\n\
         <INSTANCENAME CLASSNAME=\"Acme_Disk\">\n\
         <KEYBINDING NAME=\"Id\"><KEYVALUE VALUETYPE=\"numeric\">1</KEYVALUE></KEYBINDING>\n\
         </INSTANCENAME>\n\
         <INSTANCE CLASSNAME=\"Acme_Disk\">\n\
         <PROPERTY NAME=\"Id\" TYPE=\"uint32\"><VALUE>1</VALUE></PROPERTY>\n\
         <PROPERTY NAME=\"Model\" TYPE=\"string\"><VALUE>QX-7</VALUE></PROPERTY>\n\
         <PROPERTY NAME=\"Spare\" TYPE=\"string\"/>\n\
         <PROPERTY.ARRAY NAME=\"Sizes\" TYPE=\"uint64\">\n\
         <VALUE.ARRAY><VALUE>512</VALUE><VALUE>1024</VALUE></VALUE.ARRAY>\n\
         </PROPERTY.ARRAY>\n\
         </INSTANCE>\n\
         </VALUE.NAMEDINSTANCE>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let values = hdr.values().unwrap();
    let CimData::NamedInstance { path, instance } = &values[0] else {
        panic!("expected a named instance");
    };
    assert_eq!(path.class_name, "Acme_Disk");
    assert_eq!(instance.class_name, "Acme_Disk");
    assert_eq!(instance.properties.len(), 4);

    let id = instance.property("id").unwrap();
    assert_eq!(id.cim_type, Some(CimType::scalar(CimTypeKind::UInt32)));
    assert_eq!(id.value, PropertyValue::Scalar("1".into()));

    // No VALUE child means null, not empty string.
    assert_eq!(instance.property("Spare").unwrap().value, PropertyValue::Null);

    let sizes = instance.property("Sizes").unwrap();
    assert_eq!(sizes.cim_type, Some(CimType::array_of(CimTypeKind::UInt64)));
    assert_eq!(sizes.value, PropertyValue::Array(vec!["512".into(), "1024".into()]));
}

#[test]
fn full_instance_path_keeps_host_and_namespace() {
    let doc = envelope(
        "Associators",
        "<IRETURNVALUE>\n\
         <VALUE.OBJECTWITHPATH>\n\
         <INSTANCEPATH>\n\
         <NAMESPACEPATH><HOST>cimhost</HOST>\n\
         <LOCALNAMESPACEPATH><NAMESPACE NAME=\"root\"/><NAMESPACE NAME=\"cimv2\"/></LOCALNAMESPACEPATH>\n\
         </NAMESPACEPATH>\n\
         <INSTANCENAME CLASSNAME=\"Acme_Controller\"/>\n\
         </INSTANCEPATH>\n\
         <INSTANCE CLASSNAME=\"Acme_Controller\"/>\n\
         </VALUE.OBJECTWITHPATH>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let CimData::NamedInstance { path, .. } = &hdr.values().unwrap()[0] else {
        panic!("expected a named instance");
    };
    assert_eq!(path.host.as_deref(), Some("cimhost"));
    assert_eq!(path.namespace, ["root", "cimv2"]);
    assert_eq!(path.namespace_string(), "root/cimv2");
}

#[test]
fn reference_names_may_come_back_as_instance_paths() {
    let doc = envelope(
        "ReferenceNames",
        "<IRETURNVALUE>\n\
         <INSTANCEPATH>\n\
         <NAMESPACEPATH><HOST>h</HOST>\n\
         <LOCALNAMESPACEPATH><NAMESPACE NAME=\"root\"/></LOCALNAMESPACEPATH>\n\
         </NAMESPACEPATH>\n\
         <INSTANCENAME CLASSNAME=\"Acme_Owns\">\n\
         <KEYBINDING NAME=\"Owner\">\n\
         <VALUE.REFERENCE><INSTANCENAME CLASSNAME=\"Acme_User\">\n\
         <KEYBINDING NAME=\"Name\"><KEYVALUE>root</KEYVALUE></KEYBINDING>\n\
         </INSTANCENAME></VALUE.REFERENCE>\n\
         </KEYBINDING>\n\
         </INSTANCENAME>\n\
         </INSTANCEPATH>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let CimData::Ref(ValueReference::InstancePath(path)) = &hdr.values().unwrap()[0] else {
        panic!("expected a full instance path");
    };
    assert_eq!(path.class_name, "Acme_Owns");
    let KeyBindingValue::Reference(ValueReference::InstanceName(inner)) = &path.keys[0].value
    else {
        panic!("expected a reference key");
    };
    assert_eq!(inner.class_name, "Acme_User");
    assert_eq!(inner.keys[0].name, "Name");
}

#[test]
fn get_property_returns_a_plain_value() {
    let doc = envelope("GetProperty", "<IRETURNVALUE><VALUE>QX-7</VALUE></IRETURNVALUE>");
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(
        hdr.values().unwrap()[0],
        CimData::Value {
            cim_type: CimType::scalar(CimTypeKind::String),
            value: "QX-7".into()
        }
    );
}

#[test]
fn value_array_dispatches_before_value() {
    let doc = envelope(
        "GetProperty",
        "<IRETURNVALUE><VALUE.ARRAY><VALUE>a</VALUE><VALUE/></VALUE.ARRAY></IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(
        hdr.values().unwrap()[0],
        CimData::ValueArray {
            cim_type: CimType::array_of(CimTypeKind::String),
            values: vec!["a".into(), String::new()],
        }
    );
}

#[test]
fn class_definitions_parse_with_methods() {
    let doc = envelope(
        "GetClass",
        "<IRETURNVALUE>\n\
         <CLASS NAME=\"Acme_Disk\" SUPERCLASS=\"CIM_StorageExtent\">\n\
         <QUALIFIER NAME=\"Description\" TYPE=\"string\" TRANSLATABLE=\"true\">\n\
         <VALUE>A disk</VALUE>\n\
         </QUALIFIER>\n\
         <PROPERTY NAME=\"Id\" TYPE=\"uint32\" CLASSORIGIN=\"Acme_Disk\"/>\n\
         <PROPERTY.REFERENCE NAME=\"Controller\" REFERENCECLASS=\"Acme_Controller\"/>\n\
         <METHOD NAME=\"Reset\" TYPE=\"uint32\">\n\
         <PARAMETER NAME=\"Force\" TYPE=\"boolean\"/>\n\
         <PARAMETER.REFERENCE NAME=\"Target\" REFERENCECLASS=\"Acme_Disk\"/>\n\
         </METHOD>\n\
         </CLASS>\n\
         </IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    let CimData::Class(class) = &hdr.values().unwrap()[0] else {
        panic!("expected a class");
    };
    assert_eq!(class.name, "Acme_Disk");
    assert_eq!(class.super_class.as_deref(), Some("CIM_StorageExtent"));
    assert_eq!(class.qualifiers.len(), 1);
    assert!(class.qualifiers[0].translatable);
    assert_eq!(class.properties.len(), 2);
    assert_eq!(
        class.properties[1].reference_class.as_deref(),
        Some("Acme_Controller")
    );
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].parameters.len(), 2);
}

#[test]
fn comments_are_skipped() {
    let doc = envelope(
        "EnumerateInstanceNames",
        "<!-- generated --><IRETURNVALUE><!-- empty --></IRETURNVALUE>",
    );
    let hdr = parse_response(&doc).unwrap();
    assert_eq!(hdr.values(), Some(&[][..]));
}

#[test]
fn unknown_elements_are_fatal() {
    let doc = envelope("GetInstance", "<IRETURNVALUE><BOGUS/></IRETURNVALUE>");
    assert!(matches!(parse_response(&doc), Err(ScanError::UnknownElement(_))));
}

#[test]
fn unknown_attributes_are_fatal() {
    let doc = envelope(
        "EnumerateInstanceNames",
        "<IRETURNVALUE><INSTANCENAME CLASSNAME=\"X\" COLOR=\"red\"/></IRETURNVALUE>",
    );
    assert!(matches!(
        parse_response(&doc),
        Err(ScanError::UnknownAttribute { element: "INSTANCENAME", .. })
    ));
}

#[rstest]
#[case("")]
#[case("<?xml version=\"1.0\"?>")]
#[case("<?xml version=\"1.0\"?><CIM CIMVERSION=\"2.0\" DTDVERSION=\"2.0\">")]
fn truncated_documents_fail(#[case] doc: &str) {
    assert!(parse_response(doc).is_err());
}

#[test]
fn misplaced_elements_are_fatal() {
    // VALUE.ARRAY where a path is required.
    let doc = envelope(
        "EnumerateInstanceNames",
        "<IRETURNVALUE>\n\
         <INSTANCENAME CLASSNAME=\"X\"><VALUE.ARRAY></VALUE.ARRAY></INSTANCENAME>\n\
         </IRETURNVALUE>",
    );
    assert!(matches!(
        parse_response(&doc),
        Err(ScanError::Unexpected { context: "INSTANCENAME", .. })
    ));
}

#[test]
fn extrinsic_return_value_keeps_its_declared_type() {
    let doc = "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
               <CIM CIMVERSION=\"2.0\" DTDVERSION=\"2.0\">\n\
               <MESSAGE ID=\"4711\" PROTOCOLVERSION=\"1.0\">\n\
               <SIMPLERSP>\n\
               <METHODRESPONSE NAME=\"Reset\">\n\
               <RETURNVALUE PARAMTYPE=\"uint32\"><VALUE>0</VALUE></RETURNVALUE>\n\
               <PARAMVALUE NAME=\"Status\"><VALUE>ok</VALUE></PARAMVALUE>\n\
               </METHODRESPONSE>\n\
               </SIMPLERSP>\n\
               </MESSAGE>\n\
               </CIM>";
    let hdr = parse_response(doc).unwrap();
    assert_eq!(hdr.method.as_deref(), Some("Reset"));
    assert_eq!(
        hdr.values().unwrap()[0],
        CimData::Value { cim_type: CimType::scalar(CimTypeKind::UInt32), value: "0".into() }
    );
}

#[test]
fn error_data_is_exclusive_with_values() {
    let doc = envelope("GetInstance", "<ERROR CODE=\"7\" DESCRIPTION=\"nope\"/>");
    let hdr = parse_response(&doc).unwrap();
    assert!(matches!(hdr.data, ResponseData::Error { .. }));
    assert!(hdr.values().is_none());
    assert!(hdr.error().is_some());
}

#![allow(missing_docs)]

//! Byte-exact request documents: same inputs, same bytes, every time.

use cimxml::{request, KeyValue, ObjectPath, RequestFlags};

fn disk() -> ObjectPath {
    ObjectPath::new("root/cimv2", "Acme_Disk").with_key("Id", KeyValue::numeric("17"))
}

#[test]
fn enumerate_instance_names_document() {
    let body = request::enum_instance_names(&ObjectPath::new("root/cimv2", "CIM_ComputerSystem"));
    assert_eq!(
        body,
        "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
         <CIM CIMVERSION=\"2.0\" DTDVERSION=\"2.0\">\n\
         <MESSAGE ID=\"4711\" PROTOCOLVERSION=\"1.0\"><SIMPLEREQ>\n\
         <IMETHODCALL NAME=\"EnumerateInstanceNames\">\
         <LOCALNAMESPACEPATH>\
         <NAMESPACE NAME=\"root\"></NAMESPACE>\
         <NAMESPACE NAME=\"cimv2\"></NAMESPACE>\
         </LOCALNAMESPACEPATH>\n\
         <IPARAMVALUE NAME=\"ClassName\">\
         <CLASSNAME NAME=\"CIM_ComputerSystem\"/></IPARAMVALUE>\n\
         </IMETHODCALL></SIMPLEREQ>\n\
         </MESSAGE></CIM>"
    );
}

#[test]
fn get_instance_document() {
    let flags = RequestFlags { local_only: true, include_qualifiers: true, ..Default::default() };
    let body = request::get_instance(&disk(), flags, &[]);
    assert_eq!(
        body,
        "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
         <CIM CIMVERSION=\"2.0\" DTDVERSION=\"2.0\">\n\
         <MESSAGE ID=\"4711\" PROTOCOLVERSION=\"1.0\"><SIMPLEREQ>\n\
         <IMETHODCALL NAME=\"GetInstance\">\
         <LOCALNAMESPACEPATH>\
         <NAMESPACE NAME=\"root\"></NAMESPACE>\
         <NAMESPACE NAME=\"cimv2\"></NAMESPACE>\
         </LOCALNAMESPACEPATH>\n\
         <IPARAMVALUE NAME=\"InstanceName\">\
         <INSTANCENAME CLASSNAME=\"Acme_Disk\">\
         <KEYBINDING NAME=\"Id\"><KEYVALUE VALUETYPE=\"numeric\">17</KEYVALUE></KEYBINDING>\
         </INSTANCENAME></IPARAMVALUE>\n\
         <IPARAMVALUE NAME=\"LocalOnly\"><VALUE>TRUE</VALUE></IPARAMVALUE>\n\
         <IPARAMVALUE NAME=\"IncludeClassOrigin\"><VALUE>FALSE</VALUE></IPARAMVALUE>\n\
         <IPARAMVALUE NAME=\"IncludeQualifiers\"><VALUE>TRUE</VALUE></IPARAMVALUE>\n\
         </IMETHODCALL></SIMPLEREQ>\n\
         </MESSAGE></CIM>"
    );
}

#[test]
fn enumerate_instances_flag_order() {
    let flags = RequestFlags {
        deep_inheritance: true,
        local_only: true,
        include_qualifiers: false,
        include_class_origin: true,
    };
    let body = request::enum_instances(&disk(), flags, &[]);
    let deep = body.find("DeepInheritance").unwrap();
    let local = body.find("LocalOnly").unwrap();
    let qualifiers = body.find("IncludeQualifiers").unwrap();
    let origin = body.find("IncludeClassOrigin").unwrap();
    assert!(deep < local && local < qualifiers && qualifiers < origin);
    assert!(body.contains("<IPARAMVALUE NAME=\"DeepInheritance\"><VALUE>TRUE</VALUE>"));
    assert!(body.contains("<IPARAMVALUE NAME=\"IncludeQualifiers\"><VALUE>FALSE</VALUE>"));
}

#[test]
fn references_name_result_class_as_classname() {
    let body = request::references(&disk(), Some("Acme_Owns"), None, RequestFlags::default(), &[]);
    assert!(body.contains(
        "<IPARAMVALUE NAME=\"ResultClass\"><CLASSNAME NAME=\"Acme_Owns\"/></IPARAMVALUE>\n"
    ));
    assert!(!body.contains("AssocClass"));
}

#[test]
fn get_property_is_a_single_clean_document() {
    let body = request::get_property(&disk(), "Model");
    assert!(body.contains(
        "<IPARAMVALUE NAME=\"PropertyName\"><VALUE>Model</VALUE></IPARAMVALUE>\n"
    ));
    assert_eq!(body.matches("</IMETHODCALL>").count(), 1);
    assert_eq!(body.matches("</CIM>").count(), 1);
    assert!(body.ends_with("</IMETHODCALL></SIMPLEREQ>\n</MESSAGE></CIM>"));
}

#[test]
fn identical_inputs_produce_identical_bytes() {
    let flags = RequestFlags { deep_inheritance: true, ..Default::default() };
    let first = request::enum_instances(&disk(), flags, &["Id", "Model"]);
    let second = request::enum_instances(&disk(), flags, &["Id", "Model"]);
    assert_eq!(first, second);
}

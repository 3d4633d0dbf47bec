#![allow(dead_code)]

/// Wraps an intrinsic-method response body in the standard CIM-XML
/// envelope, the way a CIMOM frames it.
pub fn envelope(method: &str, inner: &str) -> String {
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

//! Response parsing: lexer over the dispatch table plus a recursive-descent
//! grammar that builds the borrowed tree.
//!
//! Errors are fatal. The grammar never resynchronizes after a structural
//! violation; the first unexpected token aborts the parse.

mod elements;
mod error;
mod scanner;
pub(crate) mod tree;

#[cfg(test)]
mod tests;

use log::trace;

pub use error::ScanError;

use crate::response::{assemble, ResponseHdr};
use crate::types::CimType;

use elements::{ElemEnd, XmlToken, TAGS};
use scanner::XmlScanner;
use tree::{
    BodyNode, ClassNode, InstanceNameNode, InstanceNode, KeyBindingNode, KeyBindingValueNode,
    MessageNode, MethodNode, ParameterNode, PropertyNode, PropertyValueNode, QualifierNode,
    RefNode, ValueNode,
};

/// Parses one complete CIM-XML response document into an owned
/// [`ResponseHdr`].
///
/// # Errors
///
/// Any structural violation of the response grammar is fatal and returns the
/// first [`ScanError`] encountered.
pub fn parse_response(body: &str) -> Result<ResponseHdr, ScanError> {
    trace!("parsing response document, {} bytes", body.len());
    let mut parser = Parser { lx: Lexer::new(body) };
    let message = parser.parse_document()?;
    Ok(assemble(&message))
}

/// Token source: drives the dispatch table, drains parked end tags, and
/// swallows comments.
struct Lexer<'b> {
    xb: XmlScanner<'b>,
    peeked: Option<XmlToken<'b>>,
}

impl<'b> Lexer<'b> {
    fn new(text: &'b str) -> Self {
        Lexer { xb: XmlScanner::new(text), peeked: None }
    }

    fn scan(&mut self) -> Result<XmlToken<'b>, ScanError> {
        loop {
            if let Some(end) = self.xb.pending_end.take() {
                return Ok(XmlToken::End(end));
            }
            if !self.xb.next_tag() {
                return Ok(XmlToken::Eof);
            }
            if self.xb.eat_str("!--") {
                self.xb.skip_comment()?;
                continue;
            }
            if self.xb.eat_char(b'/') {
                for entry in TAGS {
                    if self.xb.eat_word(entry.name, true) {
                        self.xb.skip_to_close();
                        return Ok(XmlToken::End(entry.end));
                    }
                }
                return Err(ScanError::UnknownElement(format!("/{}", self.xb.snippet(20))));
            }
            for entry in TAGS {
                if self.xb.eat_word(entry.name, true) {
                    return (entry.scan)(&mut self.xb);
                }
            }
            return Err(ScanError::UnknownElement(self.xb.snippet(20)));
        }
    }

    fn next(&mut self) -> Result<XmlToken<'b>, ScanError> {
        match self.peeked.take() {
            Some(tok) => Ok(tok),
            None => self.scan(),
        }
    }

    /// Returns a consumed token to the stream; at most one fits.
    fn put_back(&mut self, tok: XmlToken<'b>) {
        debug_assert!(self.peeked.is_none());
        self.peeked = Some(tok);
    }
}

fn unexpected(context: &'static str, tok: &XmlToken<'_>) -> ScanError {
    if *tok == XmlToken::Eof {
        ScanError::UnexpectedEof
    } else {
        ScanError::Unexpected { context, found: tok.describe() }
    }
}

fn required<'b>(
    attr: Option<&'b str>,
    element: &'static str,
    name: &'static str,
) -> Result<&'b str, ScanError> {
    attr.ok_or(ScanError::MissingAttribute { element, attr: name })
}

struct Parser<'b> {
    lx: Lexer<'b>,
}

impl<'b> Parser<'b> {
    fn expect_end(&mut self, end: ElemEnd, context: &'static str) -> Result<(), ScanError> {
        let tok = self.lx.next()?;
        if tok == XmlToken::End(end) {
            Ok(())
        } else {
            Err(unexpected(context, &tok))
        }
    }

    /// `document := <?xml?> <CIM> <MESSAGE> <SIMPLERSP> response`
    fn parse_document(&mut self) -> Result<MessageNode<'b>, ScanError> {
        let tok = self.lx.next()?;
        if tok != XmlToken::XmlDecl {
            return Err(unexpected("document", &tok));
        }
        self.expect_end(ElemEnd::XmlDecl, "document")?;

        let tok = self.lx.next()?;
        if tok != XmlToken::Cim {
            return Err(unexpected("document", &tok));
        }

        let tok = self.lx.next()?;
        let XmlToken::Message { id } = tok else {
            return Err(unexpected("CIM", &tok));
        };

        let tok = self.lx.next()?;
        if tok != XmlToken::SimpleRsp {
            return Err(unexpected("MESSAGE", &tok));
        }

        let (method, body) = match self.lx.next()? {
            XmlToken::IMethodResponse { name } => {
                let body = self.parse_imethod_body()?;
                self.expect_end(ElemEnd::IMethodResponse, "IMETHODRESPONSE")?;
                (name, body)
            }
            XmlToken::MethodResponse { name } => {
                let body = self.parse_method_body()?;
                self.expect_end(ElemEnd::MethodResponse, "METHODRESPONSE")?;
                (name, body)
            }
            other => return Err(unexpected("SIMPLERSP", &other)),
        };

        self.expect_end(ElemEnd::SimpleRsp, "SIMPLERSP")?;
        self.expect_end(ElemEnd::Message, "MESSAGE")?;
        self.expect_end(ElemEnd::Cim, "CIM")?;

        Ok(MessageNode { id, method, body })
    }

    /// `imethod body := ERROR | IRETURNVALUE values | (empty)`
    fn parse_imethod_body(&mut self) -> Result<BodyNode<'b>, ScanError> {
        match self.lx.next()? {
            XmlToken::Error { code, description } => {
                let code = required(code, "ERROR", "CODE")?;
                self.expect_end(ElemEnd::Error, "ERROR")?;
                Ok(BodyNode::Error { code, description })
            }
            XmlToken::IReturnValue => {
                let values = self.parse_return_values()?;
                Ok(BodyNode::Values(values))
            }
            tok @ XmlToken::End(ElemEnd::IMethodResponse) => {
                // DeleteInstance and friends answer with an empty response.
                self.lx.put_back(tok);
                Ok(BodyNode::Values(Vec::new()))
            }
            other => Err(unexpected("IMETHODRESPONSE", &other)),
        }
    }

    /// `method body := ERROR | RETURNVALUE value PARAMVALUE* | (empty)`
    ///
    /// Output parameters are consumed and dropped; only the return value
    /// itself reaches the caller.
    fn parse_method_body(&mut self) -> Result<BodyNode<'b>, ScanError> {
        match self.lx.next()? {
            XmlToken::Error { code, description } => {
                let code = required(code, "ERROR", "CODE")?;
                self.expect_end(ElemEnd::Error, "ERROR")?;
                Ok(BodyNode::Error { code, description })
            }
            XmlToken::ReturnValue { cim_type } => {
                let mut values = Vec::new();
                loop {
                    match self.lx.next()? {
                        XmlToken::Value { content } => {
                            values.push(ValueNode::Value { cim_type, content });
                            self.expect_end(ElemEnd::Value, "VALUE")?;
                        }
                        XmlToken::ValueReference => {
                            values.push(ValueNode::Ref(self.parse_value_reference()?));
                        }
                        XmlToken::End(ElemEnd::ReturnValue) => break,
                        other => return Err(unexpected("RETURNVALUE", &other)),
                    }
                }
                loop {
                    match self.lx.next()? {
                        XmlToken::ParamValue { .. } => self.skip_param_value()?,
                        tok @ XmlToken::End(ElemEnd::MethodResponse) => {
                            self.lx.put_back(tok);
                            break;
                        }
                        other => return Err(unexpected("METHODRESPONSE", &other)),
                    }
                }
                Ok(BodyNode::Values(values))
            }
            tok @ XmlToken::End(ElemEnd::MethodResponse) => {
                self.lx.put_back(tok);
                Ok(BodyNode::Values(Vec::new()))
            }
            other => Err(unexpected("METHODRESPONSE", &other)),
        }
    }

    fn skip_param_value(&mut self) -> Result<(), ScanError> {
        loop {
            match self.lx.next()? {
                XmlToken::Value { .. } => self.expect_end(ElemEnd::Value, "PARAMVALUE")?,
                XmlToken::ValueArray => {
                    self.parse_value_array()?;
                }
                XmlToken::ValueReference => {
                    self.parse_value_reference()?;
                }
                XmlToken::End(ElemEnd::ParamValue) => return Ok(()),
                other => return Err(unexpected("PARAMVALUE", &other)),
            }
        }
    }

    /// The children of `IRETURNVALUE`, in document order.
    fn parse_return_values(&mut self) -> Result<Vec<ValueNode<'b>>, ScanError> {
        let mut values = Vec::new();
        loop {
            let tok = self.lx.next()?;
            match tok {
                XmlToken::End(ElemEnd::IReturnValue) => break,
                XmlToken::Value { content } => {
                    values.push(ValueNode::Value { cim_type: None, content });
                    self.expect_end(ElemEnd::Value, "VALUE")?;
                }
                XmlToken::ValueArray => {
                    values.push(ValueNode::ValueArray {
                        cim_type: None,
                        values: self.parse_value_array()?,
                    });
                }
                XmlToken::ValueReference => {
                    values.push(ValueNode::Ref(self.parse_value_reference()?));
                }
                XmlToken::ValueNamedInstance => {
                    values.push(self.parse_value_named_instance()?);
                }
                XmlToken::ValueObjectWithPath => {
                    values.push(self.parse_value_object_with_path()?);
                }
                XmlToken::Instance { class_name } => {
                    let class_name = required(class_name, "INSTANCE", "CLASSNAME")?;
                    values.push(ValueNode::Instance(self.parse_instance(class_name)?));
                }
                XmlToken::Class { name, super_class } => {
                    let name = required(name, "CLASS", "NAME")?;
                    values.push(ValueNode::Class(self.parse_class(name, super_class)?));
                }
                XmlToken::ClassName { .. }
                | XmlToken::InstanceName { .. }
                | XmlToken::InstancePath
                | XmlToken::LocalInstancePath
                | XmlToken::ClassPath
                | XmlToken::LocalClassPath
                | XmlToken::ObjectPath => {
                    values.push(ValueNode::Ref(self.parse_ref_shape(tok, "IRETURNVALUE")?));
                }
                other => return Err(unexpected("IRETURNVALUE", &other)),
            }
        }
        Ok(values)
    }

    /// `VALUE.ARRAY := VALUE*`; a self-closing `VALUE` contributes an empty
    /// string.
    fn parse_value_array(&mut self) -> Result<Vec<&'b str>, ScanError> {
        let mut values = Vec::new();
        loop {
            match self.lx.next()? {
                XmlToken::Value { content } => {
                    values.push(content.unwrap_or(""));
                    self.expect_end(ElemEnd::Value, "VALUE.ARRAY")?;
                }
                XmlToken::End(ElemEnd::ValueArray) => return Ok(values),
                other => return Err(unexpected("VALUE.ARRAY", &other)),
            }
        }
    }

    /// `VALUE.REFERENCE` wraps exactly one path shape.
    fn parse_value_reference(&mut self) -> Result<RefNode<'b>, ScanError> {
        let tok = self.lx.next()?;
        let node = self.parse_ref_shape(tok, "VALUE.REFERENCE")?;
        self.expect_end(ElemEnd::ValueReference, "VALUE.REFERENCE")?;
        Ok(node)
    }

    /// One of the path shapes, with its start token already consumed.
    fn parse_ref_shape(
        &mut self,
        tok: XmlToken<'b>,
        context: &'static str,
    ) -> Result<RefNode<'b>, ScanError> {
        match tok {
            XmlToken::ClassName { name } => {
                let name = required(name, "CLASSNAME", "NAME")?;
                self.expect_end(ElemEnd::ClassName, "CLASSNAME")?;
                Ok(RefNode::ClassName(name))
            }
            XmlToken::InstanceName { class_name } => {
                let class_name = required(class_name, "INSTANCENAME", "CLASSNAME")?;
                Ok(RefNode::InstanceName(self.parse_instance_name(class_name)?))
            }
            XmlToken::LocalInstancePath => {
                let namespace = self.parse_local_namespace_path("LOCALINSTANCEPATH")?;
                let name = self.parse_named_instance_name("LOCALINSTANCEPATH")?;
                self.expect_end(ElemEnd::LocalInstancePath, "LOCALINSTANCEPATH")?;
                Ok(RefNode::LocalInstancePath { namespace, name })
            }
            XmlToken::InstancePath => {
                let (host, namespace) = self.parse_namespace_path("INSTANCEPATH")?;
                let name = self.parse_named_instance_name("INSTANCEPATH")?;
                self.expect_end(ElemEnd::InstancePath, "INSTANCEPATH")?;
                Ok(RefNode::InstancePath { host, namespace, name })
            }
            XmlToken::LocalClassPath => {
                let namespace = self.parse_local_namespace_path("LOCALCLASSPATH")?;
                let class_name = self.parse_named_class_name("LOCALCLASSPATH")?;
                self.expect_end(ElemEnd::LocalClassPath, "LOCALCLASSPATH")?;
                Ok(RefNode::LocalClassPath { namespace, class_name })
            }
            XmlToken::ClassPath => {
                let (host, namespace) = self.parse_namespace_path("CLASSPATH")?;
                let class_name = self.parse_named_class_name("CLASSPATH")?;
                self.expect_end(ElemEnd::ClassPath, "CLASSPATH")?;
                Ok(RefNode::ClassPath { host, namespace, class_name })
            }
            XmlToken::ObjectPath => {
                let inner = self.lx.next()?;
                let node = self.parse_ref_shape(inner, "OBJECTPATH")?;
                self.expect_end(ElemEnd::ObjectPath, "OBJECTPATH")?;
                Ok(node)
            }
            other => Err(unexpected(context, &other)),
        }
    }

    /// An `INSTANCENAME` child where the surrounding path requires one.
    fn parse_named_instance_name(
        &mut self,
        context: &'static str,
    ) -> Result<InstanceNameNode<'b>, ScanError> {
        match self.lx.next()? {
            XmlToken::InstanceName { class_name } => {
                let class_name = required(class_name, "INSTANCENAME", "CLASSNAME")?;
                self.parse_instance_name(class_name)
            }
            other => Err(unexpected(context, &other)),
        }
    }

    fn parse_named_class_name(&mut self, context: &'static str) -> Result<&'b str, ScanError> {
        match self.lx.next()? {
            XmlToken::ClassName { name } => {
                let name = required(name, "CLASSNAME", "NAME")?;
                self.expect_end(ElemEnd::ClassName, "CLASSNAME")?;
                Ok(name)
            }
            other => Err(unexpected(context, &other)),
        }
    }

    /// `NAMESPACEPATH := HOST LOCALNAMESPACEPATH`
    fn parse_namespace_path(
        &mut self,
        context: &'static str,
    ) -> Result<(&'b str, Vec<&'b str>), ScanError> {
        match self.lx.next()? {
            XmlToken::NamespacePath => {}
            other => return Err(unexpected(context, &other)),
        }
        let host = match self.lx.next()? {
            XmlToken::Host { content } => {
                let host = content.unwrap_or("");
                self.expect_end(ElemEnd::Host, "HOST")?;
                host
            }
            other => return Err(unexpected("NAMESPACEPATH", &other)),
        };
        let namespace = self.parse_local_namespace_path("NAMESPACEPATH")?;
        self.expect_end(ElemEnd::NamespacePath, "NAMESPACEPATH")?;
        Ok((host, namespace))
    }

    /// `LOCALNAMESPACEPATH := NAMESPACE*`, components in document order.
    fn parse_local_namespace_path(
        &mut self,
        context: &'static str,
    ) -> Result<Vec<&'b str>, ScanError> {
        match self.lx.next()? {
            XmlToken::LocalNamespacePath => {}
            other => return Err(unexpected(context, &other)),
        }
        let mut components = Vec::new();
        loop {
            match self.lx.next()? {
                XmlToken::Namespace { name } => {
                    components.push(required(name, "NAMESPACE", "NAME")?);
                    self.expect_end(ElemEnd::Namespace, "NAMESPACE")?;
                }
                XmlToken::End(ElemEnd::LocalNamespacePath) => return Ok(components),
                other => return Err(unexpected("LOCALNAMESPACEPATH", &other)),
            }
        }
    }

    /// `INSTANCENAME := KEYBINDING*`
    fn parse_instance_name(
        &mut self,
        class_name: &'b str,
    ) -> Result<InstanceNameNode<'b>, ScanError> {
        let mut bindings = Vec::new();
        loop {
            match self.lx.next()? {
                XmlToken::KeyBinding { name } => {
                    let name = required(name, "KEYBINDING", "NAME")?;
                    bindings.push(self.parse_key_binding(name)?);
                }
                XmlToken::End(ElemEnd::InstanceName) => {
                    return Ok(InstanceNameNode { class_name, bindings });
                }
                other => return Err(unexpected("INSTANCENAME", &other)),
            }
        }
    }

    /// `KEYBINDING := KEYVALUE | VALUE.REFERENCE`
    fn parse_key_binding(&mut self, name: &'b str) -> Result<KeyBindingNode<'b>, ScanError> {
        let value = match self.lx.next()? {
            XmlToken::KeyValue { value_type, content } => {
                self.expect_end(ElemEnd::KeyValue, "KEYVALUE")?;
                KeyBindingValueNode::KeyValue { value_type, value: content.unwrap_or("") }
            }
            XmlToken::ValueReference => {
                KeyBindingValueNode::Reference(Box::new(self.parse_value_reference()?))
            }
            other => return Err(unexpected("KEYBINDING", &other)),
        };
        self.expect_end(ElemEnd::KeyBinding, "KEYBINDING")?;
        Ok(KeyBindingNode { name, value })
    }

    /// `VALUE.NAMEDINSTANCE := INSTANCENAME INSTANCE`
    fn parse_value_named_instance(&mut self) -> Result<ValueNode<'b>, ScanError> {
        let name = self.parse_named_instance_name("VALUE.NAMEDINSTANCE")?;
        let instance = match self.lx.next()? {
            XmlToken::Instance { class_name } => {
                let class_name = required(class_name, "INSTANCE", "CLASSNAME")?;
                self.parse_instance(class_name)?
            }
            other => return Err(unexpected("VALUE.NAMEDINSTANCE", &other)),
        };
        self.expect_end(ElemEnd::ValueNamedInstance, "VALUE.NAMEDINSTANCE")?;
        Ok(ValueNode::NamedInstance { path: RefNode::InstanceName(name), instance })
    }

    /// `VALUE.OBJECTWITHPATH := INSTANCEPATH INSTANCE | CLASSPATH CLASS`
    fn parse_value_object_with_path(&mut self) -> Result<ValueNode<'b>, ScanError> {
        let tok = self.lx.next()?;
        let node = match tok {
            XmlToken::InstancePath | XmlToken::LocalInstancePath => {
                let path = self.parse_ref_shape(tok, "VALUE.OBJECTWITHPATH")?;
                match self.lx.next()? {
                    XmlToken::Instance { class_name } => {
                        let class_name = required(class_name, "INSTANCE", "CLASSNAME")?;
                        let instance = self.parse_instance(class_name)?;
                        ValueNode::NamedInstance { path, instance }
                    }
                    other => return Err(unexpected("VALUE.OBJECTWITHPATH", &other)),
                }
            }
            XmlToken::ClassPath | XmlToken::LocalClassPath => {
                self.parse_ref_shape(tok, "VALUE.OBJECTWITHPATH")?;
                match self.lx.next()? {
                    XmlToken::Class { name, super_class } => {
                        let name = required(name, "CLASS", "NAME")?;
                        ValueNode::Class(self.parse_class(name, super_class)?)
                    }
                    other => return Err(unexpected("VALUE.OBJECTWITHPATH", &other)),
                }
            }
            other => return Err(unexpected("VALUE.OBJECTWITHPATH", &other)),
        };
        self.expect_end(ElemEnd::ValueObjectWithPath, "VALUE.OBJECTWITHPATH")?;
        Ok(node)
    }

    /// `INSTANCE := QUALIFIER* property*`
    fn parse_instance(&mut self, class_name: &'b str) -> Result<InstanceNode<'b>, ScanError> {
        let mut qualifiers = Vec::new();
        let mut properties = Vec::new();
        loop {
            let tok = self.lx.next()?;
            match tok {
                XmlToken::Qualifier { .. } => qualifiers.push(self.parse_qualifier(tok)?),
                XmlToken::Property { .. }
                | XmlToken::PropertyArray { .. }
                | XmlToken::PropertyReference { .. } => {
                    properties.push(self.parse_property(tok)?);
                }
                XmlToken::End(ElemEnd::Instance) => {
                    return Ok(InstanceNode { class_name, qualifiers, properties });
                }
                other => return Err(unexpected("INSTANCE", &other)),
            }
        }
    }

    /// Any of the three property flavors, start token already consumed.
    fn parse_property(&mut self, tok: XmlToken<'b>) -> Result<PropertyNode<'b>, ScanError> {
        match tok {
            XmlToken::Property { name, cim_type, class_origin, propagated } => {
                let name = required(name, "PROPERTY", "NAME")?;
                let (qualifiers, value) =
                    self.parse_property_body(ElemEnd::Property, "PROPERTY")?;
                Ok(PropertyNode {
                    name,
                    cim_type,
                    class_origin,
                    propagated,
                    reference_class: None,
                    qualifiers,
                    value,
                })
            }
            XmlToken::PropertyArray { name, cim_type, class_origin, propagated, .. } => {
                let name = required(name, "PROPERTY.ARRAY", "NAME")?;
                let (qualifiers, value) =
                    self.parse_property_body(ElemEnd::PropertyArray, "PROPERTY.ARRAY")?;
                Ok(PropertyNode {
                    name,
                    cim_type,
                    class_origin,
                    propagated,
                    reference_class: None,
                    qualifiers,
                    value,
                })
            }
            XmlToken::PropertyReference { name, reference_class, class_origin, propagated } => {
                let name = required(name, "PROPERTY.REFERENCE", "NAME")?;
                let (qualifiers, value) =
                    self.parse_property_body(ElemEnd::PropertyReference, "PROPERTY.REFERENCE")?;
                Ok(PropertyNode {
                    name,
                    cim_type: None,
                    class_origin,
                    propagated,
                    reference_class,
                    qualifiers,
                    value,
                })
            }
            other => Err(unexpected("INSTANCE", &other)),
        }
    }

    /// `QUALIFIER* (VALUE | VALUE.ARRAY | VALUE.REFERENCE)?` up to the given
    /// end tag. All three flavors share this body; the value shape found is
    /// not cross-checked against the flavor.
    fn parse_property_body(
        &mut self,
        end: ElemEnd,
        context: &'static str,
    ) -> Result<(Vec<QualifierNode<'b>>, PropertyValueNode<'b>), ScanError> {
        let mut qualifiers = Vec::new();
        let mut value = PropertyValueNode::Null;
        loop {
            let tok = self.lx.next()?;
            match tok {
                XmlToken::Qualifier { .. } => qualifiers.push(self.parse_qualifier(tok)?),
                XmlToken::Value { content } => {
                    value = match content {
                        Some(text) => PropertyValueNode::Scalar(text),
                        None => PropertyValueNode::Null,
                    };
                    self.expect_end(ElemEnd::Value, context)?;
                }
                XmlToken::ValueArray => {
                    value = PropertyValueNode::Array(self.parse_value_array()?);
                }
                XmlToken::ValueReference => {
                    value = PropertyValueNode::Reference(self.parse_value_reference()?);
                }
                XmlToken::End(e) if e == end => return Ok((qualifiers, value)),
                other => return Err(unexpected(context, &other)),
            }
        }
    }

    /// `QUALIFIER := (VALUE | VALUE.ARRAY)?`
    fn parse_qualifier(&mut self, tok: XmlToken<'b>) -> Result<QualifierNode<'b>, ScanError> {
        let XmlToken::Qualifier {
            name,
            cim_type,
            propagated,
            overridable,
            tosubclass,
            toinstance,
            translatable,
        } = tok
        else {
            return Err(unexpected("QUALIFIER", &tok));
        };
        let name = required(name, "QUALIFIER", "NAME")?;
        let mut value = PropertyValueNode::Null;
        loop {
            match self.lx.next()? {
                XmlToken::Value { content } => {
                    value = match content {
                        Some(text) => PropertyValueNode::Scalar(text),
                        None => PropertyValueNode::Null,
                    };
                    self.expect_end(ElemEnd::Value, "QUALIFIER")?;
                }
                XmlToken::ValueArray => {
                    value = PropertyValueNode::Array(self.parse_value_array()?);
                }
                XmlToken::End(ElemEnd::Qualifier) => {
                    return Ok(QualifierNode {
                        name,
                        cim_type,
                        value,
                        propagated,
                        overridable,
                        tosubclass,
                        toinstance,
                        translatable,
                    });
                }
                other => return Err(unexpected("QUALIFIER", &other)),
            }
        }
    }

    /// `CLASS := QUALIFIER* property* METHOD*`
    fn parse_class(
        &mut self,
        name: &'b str,
        super_class: Option<&'b str>,
    ) -> Result<ClassNode<'b>, ScanError> {
        let mut qualifiers = Vec::new();
        let mut properties = Vec::new();
        let mut methods = Vec::new();
        loop {
            let tok = self.lx.next()?;
            match tok {
                XmlToken::Qualifier { .. } => qualifiers.push(self.parse_qualifier(tok)?),
                XmlToken::Property { .. }
                | XmlToken::PropertyArray { .. }
                | XmlToken::PropertyReference { .. } => {
                    properties.push(self.parse_property(tok)?);
                }
                XmlToken::Method { name, cim_type, class_origin, propagated } => {
                    let name = required(name, "METHOD", "NAME")?;
                    methods.push(self.parse_method(name, cim_type, class_origin, propagated)?);
                }
                XmlToken::End(ElemEnd::Class) => {
                    return Ok(ClassNode { name, super_class, qualifiers, properties, methods });
                }
                other => return Err(unexpected("CLASS", &other)),
            }
        }
    }

    /// `METHOD := QUALIFIER* parameter*`
    fn parse_method(
        &mut self,
        name: &'b str,
        cim_type: Option<CimType>,
        class_origin: Option<&'b str>,
        propagated: bool,
    ) -> Result<MethodNode<'b>, ScanError> {
        let mut qualifiers = Vec::new();
        let mut parameters = Vec::new();
        loop {
            let tok = self.lx.next()?;
            match tok {
                XmlToken::Qualifier { .. } => qualifiers.push(self.parse_qualifier(tok)?),
                XmlToken::Parameter { .. }
                | XmlToken::ParameterArray { .. }
                | XmlToken::ParameterReference { .. }
                | XmlToken::ParameterRefArray { .. } => {
                    parameters.push(self.parse_parameter(tok)?);
                }
                XmlToken::End(ElemEnd::Method) => {
                    return Ok(MethodNode {
                        name,
                        cim_type,
                        class_origin,
                        propagated,
                        qualifiers,
                        parameters,
                    });
                }
                other => return Err(unexpected("METHOD", &other)),
            }
        }
    }

    /// Any of the four parameter flavors, start token already consumed.
    fn parse_parameter(&mut self, tok: XmlToken<'b>) -> Result<ParameterNode<'b>, ScanError> {
        use crate::class::ParameterForm;

        let (name, cim_type, reference_class, array_size, form, end, context) = match tok {
            XmlToken::Parameter { name, cim_type } => {
                (name, cim_type, None, None, ParameterForm::Plain, ElemEnd::Parameter, "PARAMETER")
            }
            XmlToken::ParameterArray { name, cim_type, array_size } => (
                name,
                cim_type,
                None,
                array_size,
                ParameterForm::Array,
                ElemEnd::ParameterArray,
                "PARAMETER.ARRAY",
            ),
            XmlToken::ParameterReference { name, reference_class } => (
                name,
                None,
                reference_class,
                None,
                ParameterForm::Reference,
                ElemEnd::ParameterReference,
                "PARAMETER.REFERENCE",
            ),
            XmlToken::ParameterRefArray { name, reference_class, array_size } => (
                name,
                None,
                reference_class,
                array_size,
                ParameterForm::RefArray,
                ElemEnd::ParameterRefArray,
                "PARAMETER.REFARRAY",
            ),
            other => return Err(unexpected("METHOD", &other)),
        };
        let name = required(name, context, "NAME")?;
        let mut qualifiers = Vec::new();
        loop {
            let tok = self.lx.next()?;
            match tok {
                XmlToken::Qualifier { .. } => qualifiers.push(self.parse_qualifier(tok)?),
                XmlToken::End(e) if e == end => {
                    return Ok(ParameterNode {
                        name,
                        cim_type,
                        reference_class,
                        array_size,
                        form,
                        qualifiers,
                    });
                }
                other => return Err(unexpected(context, &other)),
            }
        }
    }
}

//! Operation definitions and worked examples.
//!
//! - [`Operation`] - A remote procedure with its HTTP binding and shapes
//! - [`HttpBinding`] / [`HttpMethod`] - How an operation maps onto HTTP
//! - [`ShapeRef`] - A by-name reference to an input/output/error shape
//! - [`Example`] - A documented sample invocation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

/// HTTP methods an operation may be bound to.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use sdkgen_define::HttpMethod;
///
/// assert_eq!(HttpMethod::from_str("PUT").unwrap(), HttpMethod::Put);
/// assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// HTTP method and request-URI template of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBinding {
    /// Request method.
    pub method: HttpMethod,
    /// Request-URI template, possibly with `{Param}` placeholders.
    pub request_uri: String,
}

impl HttpBinding {
    /// The fixed binding of simple-POST services: `POST /`.
    pub fn post_root() -> Self {
        Self {
            method: HttpMethod::Post,
            request_uri: "/".to_string(),
        }
    }
}

/// By-name reference to a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRef {
    /// Referenced shape name.
    pub shape: String,
}

impl ShapeRef {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

/// A single remote operation.
///
/// ## Examples
///
/// ```
/// use sdkgen_define::{HttpBinding, Operation, ShapeRef};
///
/// let op = Operation::new("ListTables", HttpBinding::post_root())
///     .with_input("ListTablesInput")
///     .with_output("ListTablesOutput");
///
/// assert_eq!(op.input.unwrap().shape, "ListTablesInput");
/// assert!(op.errors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name. Filled from the operation's key when the document
    /// leaves it out.
    #[serde(default)]
    pub name: String,
    /// HTTP binding.
    pub http: HttpBinding,
    /// Input structure, if the operation takes arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ShapeRef>,
    /// Output shape, if the operation returns data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<ShapeRef>,
    /// Declared error shapes, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ShapeRef>,
    /// Documentation markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Operation {
    /// Creates an operation with no input, output, errors or documentation.
    pub fn new(name: impl Into<String>, http: HttpBinding) -> Self {
        Self {
            name: name.into(),
            http,
            input: None,
            output: None,
            errors: Vec::new(),
            documentation: None,
        }
    }

    pub fn with_input(mut self, shape: impl Into<String>) -> Self {
        self.input = Some(ShapeRef::new(shape));
        self
    }

    pub fn with_output(mut self, shape: impl Into<String>) -> Self {
        self.output = Some(ShapeRef::new(shape));
        self
    }

    pub fn with_error(mut self, shape: impl Into<String>) -> Self {
        self.errors.push(ShapeRef::new(shape));
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

/// A worked example attached to an operation.
///
/// Input and output are literal value trees mirroring instances of the
/// operation's input and output shapes. Object keys keep document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Sample input value tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    /// Sample output value tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn http_method_serde_uses_uppercase() {
        assert_eq!(serde_json::to_string(&HttpMethod::Post).unwrap(), "\"POST\"");
        let method: HttpMethod = serde_json::from_str("\"PATCH\"").unwrap();
        assert_eq!(method, HttpMethod::Patch);
        assert!(serde_json::from_str::<HttpMethod>("\"post\"").is_err());
        assert_eq!(HttpMethod::iter().count(), 7);
    }

    #[test]
    fn operation_parses_description_layout() {
        let op: Operation = serde_json::from_str(
            r#"{
                "name": "GetObject",
                "http": {"method": "GET", "requestUri": "/{Bucket}/{Key+}"},
                "input": {"shape": "GetObjectRequest"},
                "output": {"shape": "GetObjectOutput"},
                "errors": [{"shape": "NoSuchKey"}, {"shape": "InvalidObjectState"}],
                "documentation": "<p>Retrieves objects.</p>"
            }"#,
        )
        .unwrap();

        assert_eq!(op.http.method, HttpMethod::Get);
        assert_eq!(op.http.request_uri, "/{Bucket}/{Key+}");
        let errors: Vec<_> = op.errors.iter().map(|e| e.shape.as_str()).collect();
        assert_eq!(errors, vec!["NoSuchKey", "InvalidObjectState"]);
    }

    #[test]
    fn operation_optional_parts_default() {
        let op: Operation =
            serde_json::from_str(r#"{"http": {"method": "POST", "requestUri": "/"}}"#).unwrap();
        assert!(op.name.is_empty());
        assert!(op.input.is_none());
        assert!(op.output.is_none());
        assert!(op.errors.is_empty());
        assert_eq!(op.http, HttpBinding::post_root());
    }

    #[test]
    fn example_keeps_value_key_order() {
        let example: Example = serde_json::from_str(
            r#"{
                "title": "To list tables",
                "description": "Lists all tables.",
                "input": {"Zeta": 1, "Alpha": 2},
                "id": "to-list-tables-1"
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = example
            .input
            .as_ref()
            .and_then(Value::as_object)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
        assert!(example.output.is_none());
    }
}

//! The root [`ServiceDefinition`] and its JSON loader.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::DefineError;
use crate::metadata::Metadata;
use crate::operation::{Example, Operation};
use crate::shape::Shape;
use crate::OrderedMap;

/// A complete service description.
///
/// Read-only once loaded. `shapes`, `operations` and `examples` keep document
/// order, which determines the order of everything generated from them.
///
/// ## Examples
///
/// ```
/// use sdkgen_define::{ServiceDefinition, Shape};
///
/// let service = ServiceDefinition::from_json_str(r#"{
///     "metadata": {
///         "protocol": "json",
///         "endpointPrefix": "dynamodb",
///         "apiVersion": "2012-08-10"
///     },
///     "operations": {
///         "ListTables": {
///             "http": {"method": "POST", "requestUri": "/"},
///             "input": {"shape": "ListTablesInput"}
///         }
///     },
///     "shapes": {
///         "ListTablesInput": {
///             "type": "structure",
///             "members": {"Limit": {"shape": "Limit"}}
///         },
///         "Limit": {"type": "integer"}
///     }
/// }"#).unwrap();
///
/// assert_eq!(service.operations["ListTables"].name, "ListTables");
/// assert_eq!(service.shape("Limit").unwrap(), &Shape::Integer);
/// assert!(service.shape("Missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Service metadata.
    pub metadata: Metadata,
    /// Top-level service documentation markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Operations by name.
    #[serde(default)]
    pub operations: OrderedMap<String, Operation>,
    /// Shapes by name.
    #[serde(default)]
    pub shapes: OrderedMap<String, Shape>,
    /// Worked examples by operation name.
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub examples: OrderedMap<String, Vec<Example>>,
}

/// Layout of a standalone examples document.
#[derive(Debug, Deserialize)]
struct ExamplesDocument {
    #[serde(default)]
    examples: OrderedMap<String, Vec<Example>>,
}

impl ServiceDefinition {
    /// Creates an empty definition around `metadata`.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            documentation: None,
            operations: OrderedMap::new(),
            shapes: OrderedMap::new(),
            examples: OrderedMap::new(),
        }
    }

    /// Parses a service description document.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::Parse`] if the document is not valid JSON or does
    /// not follow the description layout.
    pub fn from_json_str(json: &str) -> Result<Self, DefineError> {
        let service: ServiceDefinition = serde_json::from_str(json)?;
        Ok(service.normalized())
    }

    /// Parses a service description document from a reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, DefineError> {
        let service: ServiceDefinition = serde_json::from_reader(reader)?;
        Ok(service.normalized())
    }

    /// Merges the examples of a standalone examples document
    /// (`{"examples": {"Operation": [...]}}`) into this definition.
    ///
    /// Examples for an operation that already has some are appended.
    pub fn with_examples_json(mut self, json: &str) -> Result<Self, DefineError> {
        let doc: ExamplesDocument = serde_json::from_str(json)?;
        for (operation, examples) in doc.examples {
            self.examples.entry(operation).or_default().extend(examples);
        }
        Ok(self)
    }

    /// Resolves a shape by name.
    ///
    /// ## Errors
    ///
    /// Returns [`DefineError::UnknownShape`] if no such shape is declared.
    pub fn shape(&self, name: &str) -> Result<&Shape, DefineError> {
        self.shapes
            .get(name)
            .ok_or_else(|| DefineError::UnknownShape(name.to_string()))
    }

    /// Returns the worked examples for `operation` (possibly empty).
    pub fn examples_for(&self, operation: &str) -> &[Example] {
        self.examples
            .get(operation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fills operation names left out by the document from their keys.
    fn normalized(mut self) -> Self {
        for (name, operation) in self.operations.iter_mut() {
            if operation.name.is_empty() {
                operation.name = name.clone();
            }
        }
        self
    }
}

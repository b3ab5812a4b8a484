//! Shape definitions: the typed nodes of a service's data model.
//!
//! Shapes refer to each other by name only, so the graph they form may be
//! cyclic. Consumers walking the graph must guard against revisiting a shape
//! that is already being expanded.

use serde::{Deserialize, Serialize};

use crate::OrderedMap;

/// Reference from a container shape to the shape of one of its members.
///
/// ## Examples
///
/// ```
/// use sdkgen_define::MemberRef;
///
/// let member = MemberRef::new("String").with_location_name("bucket");
/// assert_eq!(member.shape, "String");
/// assert_eq!(member.location_name.as_deref(), Some("bucket"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    /// Name of the referenced shape.
    pub shape: String,
    /// Name to display/serialize instead of the member's own name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    /// Member-specific documentation markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl MemberRef {
    /// Creates a reference to `shape` with no overrides.
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            location_name: None,
            documentation: None,
        }
    }

    /// Sets the display name override.
    pub fn with_location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = Some(name.into());
        self
    }

    /// Sets the member documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

/// Borrowed `(name, member)` pairs in declaration order.
pub type MemberList<'a> = Vec<(&'a str, &'a MemberRef)>;

/// A structure shape: named members, some of them required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureShape {
    /// Members in declaration order.
    pub members: OrderedMap<String, MemberRef>,
    /// Names of required members.
    pub required: Vec<String>,
    /// Documentation markup for the structure itself.
    pub documentation: Option<String>,
}

impl StructureShape {
    /// Returns `true` if `member` is in the required set.
    pub fn is_required(&self, member: &str) -> bool {
        self.required.iter().any(|r| r == member)
    }

    /// Splits members into `(required, optional)`, each in declaration order.
    ///
    /// ```
    /// use sdkgen_define::{MemberRef, StructureShape};
    ///
    /// let mut shape = StructureShape::default();
    /// shape.members.insert("Limit".into(), MemberRef::new("Integer"));
    /// shape.members.insert("TableName".into(), MemberRef::new("String"));
    /// shape.required.push("TableName".into());
    ///
    /// let (required, optional) = shape.partition_members();
    /// assert_eq!(required[0].0, "TableName");
    /// assert_eq!(optional[0].0, "Limit");
    /// ```
    pub fn partition_members(&self) -> (MemberList<'_>, MemberList<'_>) {
        self.members
            .iter()
            .map(|(name, member)| (name.as_str(), member))
            .partition(|(name, _)| self.is_required(name))
    }
}

/// A shape, classified by its kind tag.
///
/// Kinds without special treatment (`blob`, `timestamp`, `double` ...) are kept
/// as [`Shape::Other`] with their raw tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShape", into = "RawShape")]
pub enum Shape {
    /// Named members with a required subset.
    Structure(StructureShape),
    /// Homogeneous sequence of `member`.
    List {
        /// Element reference.
        member: MemberRef,
    },
    /// Key/value associative shape. Element types are not modeled further.
    Map,
    /// String, optionally restricted to an enumerated set of literals.
    String {
        /// Allowed literal values; empty for an unrestricted string.
        enum_values: Vec<String>,
    },
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Boolean.
    Boolean,
    /// Any other kind, by its raw tag.
    Other(String),
}

impl Shape {
    /// Returns the raw kind tag (`structure`, `list`, `map`, `string` ...).
    ///
    /// ```
    /// use sdkgen_define::Shape;
    ///
    /// assert_eq!(Shape::Long.kind(), "long");
    /// assert_eq!(Shape::Other("timestamp".into()).kind(), "timestamp");
    /// ```
    pub fn kind(&self) -> &str {
        match self {
            Shape::Structure(_) => "structure",
            Shape::List { .. } => "list",
            Shape::Map => "map",
            Shape::String { .. } => "string",
            Shape::Integer => "integer",
            Shape::Long => "long",
            Shape::Boolean => "boolean",
            Shape::Other(kind) => kind,
        }
    }

    /// Returns the structure payload when this is a structure shape.
    pub fn as_structure(&self) -> Option<&StructureShape> {
        match self {
            Shape::Structure(s) => Some(s),
            _ => None,
        }
    }

    /// Creates a plain (non-enumerated) string shape.
    pub fn string() -> Self {
        Shape::String {
            enum_values: Vec::new(),
        }
    }

    /// Creates an enumerated string shape.
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Shape::String {
            enum_values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a list shape over `element`.
    pub fn list(element: impl Into<String>) -> Self {
        Shape::List {
            member: MemberRef::new(element),
        }
    }
}

/// Wire layout of a shape, as it appears in a description document.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawShape {
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<OrderedMap<String, MemberRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    member: Option<MemberRef>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
}

impl TryFrom<RawShape> for Shape {
    type Error = String;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        let shape = match raw.kind.as_str() {
            "structure" => Shape::Structure(StructureShape {
                members: raw.members.unwrap_or_default(),
                required: raw.required.unwrap_or_default(),
                documentation: raw.documentation,
            }),
            "list" => Shape::List {
                member: raw
                    .member
                    .ok_or_else(|| "list shape is missing its `member`".to_string())?,
            },
            "map" => Shape::Map,
            "string" => Shape::String {
                enum_values: raw.enum_values.unwrap_or_default(),
            },
            "integer" => Shape::Integer,
            "long" => Shape::Long,
            "boolean" => Shape::Boolean,
            "" => return Err("shape is missing its `type`".to_string()),
            other => Shape::Other(other.to_string()),
        };
        Ok(shape)
    }
}

impl From<Shape> for RawShape {
    fn from(shape: Shape) -> Self {
        let kind = shape.kind().to_string();
        match shape {
            Shape::Structure(s) => RawShape {
                kind,
                members: Some(s.members),
                required: (!s.required.is_empty()).then_some(s.required),
                documentation: s.documentation,
                ..Default::default()
            },
            Shape::List { member } => RawShape {
                kind,
                member: Some(member),
                ..Default::default()
            },
            Shape::String { enum_values } => RawShape {
                kind,
                enum_values: (!enum_values.is_empty()).then_some(enum_values),
                ..Default::default()
            },
            _ => RawShape {
                kind,
                ..Default::default()
            },
        }
    }
}

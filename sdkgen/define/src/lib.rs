//! sdkgen Definition Library
//!
//! This crate provides the types of a declarative service description: the
//! operations a remote API offers, the shapes of the data they exchange, and
//! worked examples. Definitions are consumed by `sdkgen-gen` to produce
//! language bindings and their documentation.
//!
//! ## Core Types
//!
//! - [`ServiceDefinition`] - Root entity: metadata, shapes, operations, examples
//! - [`Metadata`] - Protocol, signing name, endpoint prefix and versions
//! - [`Protocol`] - Wire protocol tag (`json`, `query`, `ec2`, `rest-json`, `rest-xml`)
//! - [`Shape`] - A typed schema node (structure, list, map, string, integer ...)
//! - [`StructureShape`] - Ordered members plus the required-member set
//! - [`MemberRef`] - By-name reference from a container to a member shape
//! - [`Operation`] - HTTP binding, input/output/error shapes and documentation
//! - [`Example`] - Title, description and literal input/output value trees
//!
//! ## Ordering
//!
//! Every name-keyed collection is an [`OrderedMap`], so document order of
//! shapes, operations and structure members survives loading. Example value
//! trees rely on `serde_json`'s `preserve_order` feature for the same reason.
//!
//! ## Examples
//!
//! ```
//! use sdkgen_define::{ServiceDefinition, Shape};
//!
//! let json = r#"{
//!     "metadata": {"protocol": "query", "endpointPrefix": "sqs", "apiVersion": "2012-11-05"},
//!     "operations": {},
//!     "shapes": {"Tag": {"type": "structure", "members": {"Tag": {"shape": "Tag"}}}}
//! }"#;
//!
//! let service = ServiceDefinition::from_json_str(json).unwrap();
//! let tag = service.shape("Tag").unwrap();
//! assert!(matches!(tag, Shape::Structure(_)));
//! ```

pub mod errors;
pub mod metadata;
pub mod operation;
pub mod prelude;
pub mod service;
pub mod shape;

/// Insertion-ordered map used for every name-keyed collection.
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V>;

// Re-export main types at crate root
pub use errors::DefineError;
pub use metadata::{Metadata, Protocol};
pub use operation::{Example, HttpBinding, HttpMethod, Operation, ShapeRef};
pub use service::ServiceDefinition;
pub use shape::{MemberList, MemberRef, Shape, StructureShape};

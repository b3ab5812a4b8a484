//! Convenient re-exports for working with service definitions.
//!
//! ## Examples
//!
//! ```
//! use sdkgen_define::prelude::*;
//!
//! let mut service = ServiceDefinition::new(Metadata::new(Protocol::Json, "dynamodb", "2012-08-10"));
//! service.shapes.insert("TableName".into(), Shape::string());
//! service.operations.insert(
//!     "DescribeTable".into(),
//!     Operation::new("DescribeTable", HttpBinding::post_root()),
//! );
//!
//! assert_eq!(service.shape("TableName").unwrap().kind(), "string");
//! ```

pub use crate::errors::DefineError;
pub use crate::metadata::{Metadata, Protocol};
pub use crate::operation::{Example, HttpBinding, HttpMethod, Operation, ShapeRef};
pub use crate::service::ServiceDefinition;
pub use crate::shape::{MemberRef, Shape, StructureShape};
pub use crate::OrderedMap;

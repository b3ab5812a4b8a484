//! sdkgen binding generator library.
//!
//! This crate turns a service description loaded with `sdkgen-define` into
//! client bindings and their documentation. For each service it produces:
//!
//! - One documented binding unit per operation: call signatures, description,
//!   argument reference, return type, exceptions and worked examples, followed
//!   by call-through definitions
//! - A dispatcher function that bakes in the service's protocol constants and
//!   forwards each call to the transport layer
//!
//! ## Modules
//!
//! - [`naming`] - snake_case conversion, member display names, "a, b or c" lists
//! - [`render`] - Recursive shape rendering with a cycle guard
//! - [`protocol`] - Protocol family classification and dispatch parameters
//! - [`binding`] - Per-operation binding generation
//! - [`dispatcher`] - Per-service dispatcher generation
//! - [`examples`] - Pretty-printing of example value trees
//! - [`docs`] - Documentation formatter seam
//! - [`parser`] - Path parameter extraction utilities
//! - [`output`] - Final assembly and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use sdkgen_define::ServiceDefinition;
//! use sdkgen_gen::output::{GeneratorConfig, generate_service, write_service};
//!
//! let json = std::fs::read_to_string("dynamodb-2012-08-10.json").unwrap();
//! let service = ServiceDefinition::from_json_str(&json).unwrap();
//!
//! let generated = generate_service(&service, &GeneratorConfig::default()).unwrap();
//! write_service(&generated, Path::new("out"), false).unwrap();
//! ```
//!
//! ## Generated Code Structure
//!
//! For a json-protocol service `dynamodb` with operation `DeleteTable`:
//!
//! ```text
//! module DynamoDB
//!
//! using AWSCore
//! using AWSCore.Services.dynamodb
//!
//! """
//!     delete_table([::AWSConfig], arguments::Dict)
//!     delete_table([::AWSConfig]; TableName=)
//!     ...
//! """
//! @inline delete_table(aws::AWSConfig=default_aws_config(); args...) = delete_table(aws, args)
//! ...
//! end
//!
//! function dynamodb(aws::AWSConfig, operation, args=[])
//!     AWSCore.service_json(aws; service="dynamodb", ..., operation=operation, args=args)
//! end
//! ```

pub mod binding;
pub mod dispatcher;
pub mod docs;
pub mod errors;
pub mod examples;
pub mod naming;
pub mod output;
pub mod parser;
pub mod protocol;
pub mod render;

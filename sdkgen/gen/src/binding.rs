//! Per-operation binding generation.
//!
//! For each operation, [`BindingGenerator`] produces one unit of text: a
//! documentation string (call signatures, description, arguments, returns,
//! exceptions, worked examples) followed by the call-through definitions that
//! forward to the service dispatcher.
//!
//! ## Generated Unit
//!
//! For a REST operation `CreateBucket` on `s3`:
//!
//! ```text
//! """
//!     using AWSSDK.S3.create_bucket
//!     create_bucket([::AWSConfig], arguments::Dict)
//!     create_bucket([::AWSConfig]; Bucket=, <keyword arguments>)
//!
//!     using AWSCore.Services.s3
//!     s3([::AWSConfig], "PUT", "/{Bucket}", arguments::Dict)
//!     s3([::AWSConfig], "PUT", "/{Bucket}", Bucket=, <keyword arguments>)
//!
//! # CreateBucket Operation
//! ...
//! """
//! @inline create_bucket(aws::AWSConfig=default_aws_config(); args...) = create_bucket(aws, args)
//! ...
//! ```

use sdkgen_define::{HttpMethod, Operation, ServiceDefinition};
use tracing::{debug, instrument};

use crate::dispatcher::dispatcher_name;
use crate::docs::{DocFormatter, format_optional};
use crate::errors::GeneratorError;
use crate::examples::format_example;
use crate::naming::{effective_member_name, join_with_or, to_snake_case};
use crate::parser::has_path_params;
use crate::protocol::{DispatchPlan, ProtocolFamily};
use crate::render::ShapeRenderer;

/// Placeholder standing for all optional arguments in a signature.
pub const KEYWORD_ARGUMENTS_MARKER: &str = "<keyword arguments>";

/// Base URL of the per-operation API reference.
pub const API_REFERENCE_URL: &str = "https://docs.aws.amazon.com/goto/WebAPI";

/// The four documented ways of calling an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSignatures {
    /// `op([::AWSConfig], arguments::Dict)`
    pub dict: String,
    /// `op([::AWSConfig]; Required=, <keyword arguments>)`
    pub keyword: String,
    /// Dispatcher call with protocol parameters and a dictionary.
    pub qualified_dict: String,
    /// Dispatcher call with protocol parameters and keyword arguments.
    pub qualified_keyword: String,
}

/// Generates operation bindings for one service.
pub struct BindingGenerator<'a> {
    service: &'a ServiceDefinition,
    docs: &'a dyn DocFormatter,
    plan: DispatchPlan,
    module_name: String,
    dispatcher: String,
}

impl<'a> BindingGenerator<'a> {
    /// Creates a generator; the dispatch plan is resolved once here.
    pub fn new(
        service: &'a ServiceDefinition,
        docs: &'a dyn DocFormatter,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            service,
            docs,
            plan: DispatchPlan::resolve(service),
            module_name: module_name.into(),
            dispatcher: dispatcher_name(service),
        }
    }

    /// The dispatch plan shared with the service dispatcher.
    pub fn plan(&self) -> &DispatchPlan {
        &self.plan
    }

    /// Generates the documented binding unit for one operation.
    ///
    /// ## Errors
    ///
    /// - [`GeneratorError::SchemaInconsistency`] if the HTTP binding does not
    ///   fit the service's protocol family.
    /// - [`GeneratorError::RenderAssertion`] if the input shape is not a
    ///   structure.
    /// - [`GeneratorError::Definition`] if a referenced shape is missing.
    #[instrument(skip_all, fields(operation = name))]
    pub fn generate_operation(
        &self,
        name: &'a str,
        operation: &'a Operation,
    ) -> Result<String, GeneratorError> {
        self.check_http_binding(name, operation)?;

        let snake = to_snake_case(name);
        let signatures = self.signatures(name, operation)?;
        let doc = self.documentation(name, operation, &snake, &signatures)?;
        let code = self.call_through(&snake, name, operation);

        debug!(function = %snake, "generated binding");
        Ok(format!("\"\"\"\n{}\n\"\"\"\n{}", escape_docstring(&doc), code))
    }

    /// Builds the argument fragment: `Name=` for each required member in
    /// declaration order, then the keyword-arguments marker if any member is
    /// optional. Empty for operations without input.
    pub fn argument_list(&self, operation: &Operation) -> Result<String, GeneratorError> {
        let Some(input) = &operation.input else {
            return Ok(String::new());
        };
        let Some(structure) = self.service.shape(&input.shape)?.as_structure() else {
            return Ok(String::new());
        };

        let (required, optional) = structure.partition_members();
        let mut parts: Vec<String> = required
            .into_iter()
            .map(|(name, member)| format!("{}=", effective_member_name(self.service, name, member)))
            .collect();
        if !optional.is_empty() {
            parts.push(KEYWORD_ARGUMENTS_MARKER.to_string());
        }
        Ok(parts.join(", "))
    }

    /// Builds the four documented call signatures.
    pub fn signatures(
        &self,
        name: &str,
        operation: &Operation,
    ) -> Result<CallSignatures, GeneratorError> {
        let snake = to_snake_case(name);
        let arguments = self.argument_list(operation)?;
        let protocol_args = self.protocol_args(name, operation).join(", ");
        let qualified = format!("{}([::AWSConfig], {}", self.dispatcher, protocol_args);

        let (keyword, qualified_keyword) = if arguments.is_empty() {
            (format!("{snake}([::AWSConfig])"), format!("{qualified})"))
        } else {
            (
                format!("{snake}([::AWSConfig]; {arguments})"),
                format!("{qualified}, {arguments})"),
            )
        };

        Ok(CallSignatures {
            dict: format!("{snake}([::AWSConfig], arguments::Dict)"),
            keyword,
            qualified_dict: format!("{qualified}, arguments::Dict)"),
            qualified_keyword,
        })
    }

    /// Literal values for the parameters the dispatcher expects from callers.
    fn protocol_args(&self, name: &str, operation: &Operation) -> Vec<String> {
        self.plan
            .forwarded()
            .into_iter()
            .filter_map(|param| match param {
                "verb" => Some(quoted(&operation.http.method.to_string())),
                "resource" => Some(quoted(&operation.http.request_uri)),
                "operation" => Some(quoted(name)),
                _ => None,
            })
            .collect()
    }

    fn check_http_binding(&self, name: &str, operation: &Operation) -> Result<(), GeneratorError> {
        let http = &operation.http;
        let family = self.plan.family;

        if family == ProtocolFamily::SimplePost
            && (http.method != HttpMethod::Post || http.request_uri != "/")
        {
            return Err(GeneratorError::SchemaInconsistency {
                operation: name.to_string(),
                reason: format!(
                    "expected POST / for a {} service, found {} {}",
                    self.service.metadata.protocol, http.method, http.request_uri
                ),
            });
        }

        if has_path_params(&http.request_uri) && !family.allows_path_params() {
            return Err(GeneratorError::SchemaInconsistency {
                operation: name.to_string(),
                reason: format!(
                    "request URI '{}' has path parameters but protocol '{}' is not REST-style",
                    http.request_uri, self.service.metadata.protocol
                ),
            });
        }

        Ok(())
    }

    fn documentation(
        &self,
        name: &'a str,
        operation: &'a Operation,
        snake: &str,
        signatures: &CallSignatures,
    ) -> Result<String, GeneratorError> {
        let mut sections = vec![
            format!(
                "    using AWSSDK.{}.{}\n    {}\n    {}\n\n    using AWSCore.Services.{}\n    {}\n    {}",
                self.module_name,
                snake,
                signatures.dict,
                signatures.keyword,
                self.dispatcher,
                signatures.qualified_dict,
                signatures.qualified_keyword,
            ),
            format!("# {name} Operation"),
        ];

        if let Some(doc) = format_optional(self.docs, operation.documentation.as_deref()) {
            sections.push(doc);
        }

        if let Some(input) = &operation.input {
            let arguments = ShapeRenderer::new(self.service, self.docs).render_top_level(&input.shape)?;
            sections.push("# Arguments".to_string());
            if !arguments.is_empty() {
                sections.push(arguments);
            }
        }

        if let Some(output) = &operation.output {
            let mut returns = format!("# Returns\n\n`{}`", output.shape);
            // An undeclared output shape is named without docs.
            let output_docs = self
                .service
                .shapes
                .get(&output.shape)
                .and_then(|shape| shape.as_structure())
                .and_then(|s| format_optional(self.docs, s.documentation.as_deref()));
            if let Some(doc) = output_docs {
                returns.push_str("\n\n");
                returns.push_str(&doc);
            }
            sections.push(returns);
        }

        if !operation.errors.is_empty() {
            let names: Vec<String> = operation
                .errors
                .iter()
                .map(|e| format!("`{}`", e.shape))
                .collect();
            sections.push(format!("# Exceptions\n\n{}.", join_with_or(&names)));
        }

        for example in self.service.examples_for(name) {
            sections.push(format_example(example));
        }

        if let Some(uid) = &self.service.metadata.uid {
            sections.push(format!(
                "See also: [AWS API Documentation]({API_REFERENCE_URL}/{uid}/{name})"
            ));
        }

        Ok(sections.join("\n\n"))
    }

    fn call_through(&self, snake: &str, name: &str, operation: &Operation) -> String {
        let mut forward = vec!["aws".to_string()];
        forward.extend(self.protocol_args(name, operation));
        forward.push("args".to_string());

        format!(
            "@inline {snake}(aws::AWSConfig=default_aws_config(); args...) = {snake}(aws, args)\n\n\
             @inline {snake}(aws::AWSConfig, args) =\n    AWSCore.Services.{}({})\n\n\
             @inline {snake}(args) = {snake}(default_aws_config(), args)\n",
            self.dispatcher,
            forward.join(", ")
        )
    }
}

fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

/// Escapes text for embedding in a triple-quoted docstring.
pub(crate) fn escape_docstring(doc: &str) -> String {
    doc.replace('\\', "\\\\")
        .replace('$', "\\$")
        .replace("\"\"\"", "\\\"\\\"\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::PassThrough;
    use sdkgen_define::{
        Example, HttpBinding, MemberRef, Metadata, Protocol, Shape, StructureShape,
    };
    use serde_json::json;

    fn input_shape(members: &[&str], required: &[&str]) -> Shape {
        let mut s = StructureShape::default();
        for m in members {
            s.members.insert(m.to_string(), MemberRef::new("Str"));
        }
        s.required = required.iter().map(|r| r.to_string()).collect();
        Shape::Structure(s)
    }

    fn service(protocol: Protocol, prefix: &str, input: Shape) -> ServiceDefinition {
        let mut svc = ServiceDefinition::new(Metadata::new(protocol, prefix, "2020-01-01"));
        svc.shapes.insert("Input".into(), input);
        svc.shapes.insert("Str".into(), Shape::string());
        svc
    }

    fn rest(method: HttpMethod, uri: &str) -> HttpBinding {
        HttpBinding {
            method,
            request_uri: uri.to_string(),
        }
    }

    #[test]
    fn argument_list_required_then_marker() {
        let svc = service(
            Protocol::Json,
            "dynamodb",
            input_shape(&["Limit", "TableName", "Key", "Select"], &["Key", "TableName"]),
        );
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("GetItem", HttpBinding::post_root()).with_input("Input");

        assert_eq!(
            generator.argument_list(&op).unwrap(),
            "TableName=, Key=, <keyword arguments>"
        );
    }

    #[test]
    fn argument_list_without_optional_has_no_marker() {
        let svc = service(Protocol::Json, "dynamodb", input_shape(&["A", "B"], &["A", "B"]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("Op", HttpBinding::post_root()).with_input("Input");

        assert_eq!(generator.argument_list(&op).unwrap(), "A=, B=");
    }

    #[test]
    fn argument_list_uses_display_names() {
        let mut s = StructureShape::default();
        s.members.insert(
            "DryRun".into(),
            MemberRef::new("Str").with_location_name("dryRun"),
        );
        s.required.push("DryRun".into());
        let svc = service(Protocol::Ec2, "ec2", Shape::Structure(s));
        let generator = BindingGenerator::new(&svc, &PassThrough, "EC2");
        let op = Operation::new("Op", HttpBinding::post_root()).with_input("Input");

        assert_eq!(generator.argument_list(&op).unwrap(), "DryRun=");
    }

    #[test]
    fn simple_post_signatures_pass_only_operation() {
        let svc = service(Protocol::Json, "dynamodb", input_shape(&["TableName"], &["TableName"]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("DeleteTable", HttpBinding::post_root()).with_input("Input");

        let sigs = generator.signatures("DeleteTable", &op).unwrap();
        assert_eq!(sigs.dict, "delete_table([::AWSConfig], arguments::Dict)");
        assert_eq!(sigs.keyword, "delete_table([::AWSConfig]; TableName=)");
        assert_eq!(
            sigs.qualified_dict,
            "dynamodb([::AWSConfig], \"DeleteTable\", arguments::Dict)"
        );
        assert_eq!(
            sigs.qualified_keyword,
            "dynamodb([::AWSConfig], \"DeleteTable\", TableName=)"
        );
    }

    #[test]
    fn rest_signatures_pass_verb_and_resource_only() {
        let svc = service(Protocol::RestXml, "s3", input_shape(&["Bucket", "ACL"], &["Bucket"]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "S3");
        let op = Operation::new("CreateBucket", rest(HttpMethod::Put, "/{Bucket}")).with_input("Input");

        let sigs = generator.signatures("CreateBucket", &op).unwrap();
        assert_eq!(
            sigs.qualified_keyword,
            "s3([::AWSConfig], \"PUT\", \"/{Bucket}\", Bucket=, <keyword arguments>)"
        );
        assert!(!sigs.qualified_dict.contains("CreateBucket"));
    }

    #[test]
    fn signatures_without_input() {
        let svc = service(Protocol::RestXml, "s3", input_shape(&[], &[]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "S3");
        let op = Operation::new("ListBuckets", rest(HttpMethod::Get, "/"));

        let sigs = generator.signatures("ListBuckets", &op).unwrap();
        assert_eq!(sigs.keyword, "list_buckets([::AWSConfig])");
        assert_eq!(sigs.qualified_keyword, "s3([::AWSConfig], \"GET\", \"/\")");
    }

    #[test]
    fn simple_post_rejects_other_bindings() {
        let svc = service(Protocol::Query, "sqs", input_shape(&[], &[]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "SQS");

        let op = Operation::new("ListQueues", rest(HttpMethod::Get, "/"));
        let err = generator.generate_operation("ListQueues", &op).unwrap_err();
        assert!(matches!(err, GeneratorError::SchemaInconsistency { ref operation, .. } if operation == "ListQueues"));

        let op = Operation::new("ListQueues", rest(HttpMethod::Post, "/queues"));
        assert!(generator.generate_operation("ListQueues", &op).is_err());
    }

    #[test]
    fn path_params_require_rest() {
        let svc = service(Protocol::Query, "importexport", input_shape(&[], &[]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "ImportExport");

        let op = Operation::new("GetStatus", rest(HttpMethod::Post, "/{JobId}"));
        let err = generator.generate_operation("GetStatus", &op).unwrap_err();
        assert!(err.to_string().contains("path parameters"));

        let op = Operation::new("GetStatus", rest(HttpMethod::Post, "/?Operation=GetStatus"));
        assert!(generator.generate_operation("GetStatus", &op).is_ok());
    }

    #[test]
    fn rest_accepts_path_params() {
        let svc = service(Protocol::RestJson, "lambda", input_shape(&["Id"], &["Id"]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "Lambda");
        let op = Operation::new("GetThing", rest(HttpMethod::Get, "/things/{Id}")).with_input("Input");

        let unit = generator.generate_operation("GetThing", &op).unwrap();
        assert!(unit.contains("AWSCore.Services.lambda(aws, \"GET\", \"/things/{Id}\", args)"));
        assert!(!unit.contains("\"GetThing\", args"));
    }

    #[test]
    fn unit_has_documentation_sections_in_order() {
        let mut svc = service(Protocol::Json, "dynamodb", input_shape(&["TableName"], &["TableName"]));
        svc.metadata.uid = Some("dynamodb-2012-08-10".to_string());
        svc.examples.insert(
            "DeleteTable".into(),
            vec![Example {
                title: "To delete a table".into(),
                description: "Deletes Music.".into(),
                input: Some(json!({"TableName": "Music"})),
                output: None,
            }],
        );
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("DeleteTable", HttpBinding::post_root())
            .with_input("Input")
            .with_output("DeleteTableOutput")
            .with_error("ResourceInUseException")
            .with_error("ResourceNotFoundException")
            .with_error("InternalServerError")
            .with_documentation("Deletes a table.");

        let unit = generator.generate_operation("DeleteTable", &op).unwrap();

        let order = [
            "    using AWSSDK.DynamoDB.delete_table",
            "    using AWSCore.Services.dynamodb",
            "# DeleteTable Operation",
            "Deletes a table.",
            "# Arguments",
            "## `TableName = ::String` -- *Required*",
            "# Returns\n\n`DeleteTableOutput`",
            "# Exceptions\n\n`ResourceInUseException`, `ResourceNotFoundException` or `InternalServerError`.",
            "# Example: To delete a table",
            "See also: [AWS API Documentation](https://docs.aws.amazon.com/goto/WebAPI/dynamodb-2012-08-10/DeleteTable)",
            "@inline delete_table(aws::AWSConfig, args) =\n    AWSCore.Services.dynamodb(aws, \"DeleteTable\", args)",
        ];
        let mut cursor = 0;
        for needle in order {
            let found = unit[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}\n{unit}"));
            cursor += found + needle.len();
        }
        assert!(unit.starts_with("\"\"\"\n"));
    }

    #[test]
    fn returns_section_shows_output_structure_docs() {
        let mut svc = service(Protocol::Json, "dynamodb", input_shape(&[], &[]));
        svc.shapes.insert(
            "DescribeLimitsOutput".into(),
            Shape::Structure(StructureShape {
                documentation: Some("  Represents the output of a DescribeLimits operation. ".into()),
                ..StructureShape::default()
            }),
        );
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("DescribeLimits", HttpBinding::post_root())
            .with_output("DescribeLimitsOutput");

        let unit = generator.generate_operation("DescribeLimits", &op).unwrap();
        assert!(unit.contains(
            "# Returns\n\n`DescribeLimitsOutput`\n\nRepresents the output of a DescribeLimits operation."
        ));
    }

    #[test]
    fn returns_section_without_output_docs_names_shape_only() {
        let svc = service(Protocol::Json, "dynamodb", input_shape(&[], &[]));
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("Op", HttpBinding::post_root()).with_output("Input");

        let unit = generator.generate_operation("Op", &op).unwrap();
        assert!(unit.contains("# Returns\n\n`Input`\n\"\"\""));
    }

    #[test]
    fn example_strings_are_escaped_for_docstring() {
        let mut svc = service(Protocol::Json, "dynamodb", input_shape(&[], &[]));
        svc.examples.insert(
            "Op".into(),
            vec![Example {
                title: "Cost".into(),
                description: "Costs $5".into(),
                input: Some(json!({"Expr": "a = \"b\""})),
                output: None,
            }],
        );
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("Op", HttpBinding::post_root());

        let unit = generator.generate_operation("Op", &op).unwrap();
        assert!(unit.contains("Costs \\$5"));
        assert!(unit.contains("\"Expr\" => \"a = \\\\\"b\\\\\"\""));
    }

    #[test]
    fn non_structure_input_is_a_render_assertion() {
        let mut svc = service(Protocol::Json, "dynamodb", input_shape(&[], &[]));
        svc.shapes.insert("Input".into(), Shape::string());
        let generator = BindingGenerator::new(&svc, &PassThrough, "DynamoDB");
        let op = Operation::new("Op", HttpBinding::post_root()).with_input("Input");

        let err = generator.generate_operation("Op", &op).unwrap_err();
        assert!(matches!(err, GeneratorError::RenderAssertion { .. }));
    }
}

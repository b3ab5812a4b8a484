//! Service dispatcher generation.
//!
//! Every service gets one dispatcher function, named after its endpoint
//! prefix, that every operation binding calls through. It accepts the
//! parameters the [`DispatchPlan`] marks as forwarded, bakes in the literal
//! ones, and hands the lot to the transport entry point for the service's
//! serialization protocol.

use sdkgen_define::ServiceDefinition;

use crate::naming::to_identifier;
use crate::protocol::DispatchPlan;
use crate::render::INDENT;

/// Name of the dispatcher function for `service`.
///
/// ```
/// use sdkgen_define::{Metadata, Protocol, ServiceDefinition};
/// use sdkgen_gen::dispatcher::dispatcher_name;
///
/// let lex = ServiceDefinition::new(Metadata::new(Protocol::RestJson, "runtime.lex", "2016-11-28"));
/// assert_eq!(dispatcher_name(&lex), "runtime_lex");
/// ```
pub fn dispatcher_name(service: &ServiceDefinition) -> String {
    to_identifier(&service.metadata.endpoint_prefix)
}

/// Renders the dispatcher function for a service.
///
/// ## Examples
///
/// ```
/// use sdkgen_define::{Metadata, Protocol, ServiceDefinition};
/// use sdkgen_gen::dispatcher::render_dispatcher;
/// use sdkgen_gen::protocol::DispatchPlan;
///
/// let s3 = ServiceDefinition::new(Metadata::new(Protocol::RestXml, "s3", "2006-03-01"));
/// let code = render_dispatcher(&s3, &DispatchPlan::resolve(&s3));
///
/// assert!(code.starts_with("function s3(aws::AWSConfig, verb, resource, args=[])"));
/// assert!(code.contains("AWSCore.service_rest_xml("));
/// ```
pub fn render_dispatcher(service: &ServiceDefinition, plan: &DispatchPlan) -> String {
    let name = dispatcher_name(service);

    let mut params = vec!["aws::AWSConfig"];
    params.extend(plan.forwarded());
    params.push("args=[]");

    let mut keywords: Vec<String> = plan.params.iter().map(|p| p.keyword()).collect();
    keywords.push("args=args".to_string());

    let indented = format!("{INDENT}{INDENT}");
    format!(
        "function {name}({})\n\n{INDENT}AWSCore.{}(\n{indented}aws;\n{indented}{})\nend\n",
        params.join(", "),
        plan.transport_function(),
        keywords.join(&format!(",\n{indented}")),
    )
}

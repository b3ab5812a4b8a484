//! Dispatch parameter resolution and dispatcher output across protocol families.

mod common;

use sdkgen_define::Protocol;
use sdkgen_gen::dispatcher::render_dispatcher;
use sdkgen_gen::output::{GeneratorConfig, generate_service};
use sdkgen_gen::protocol::{DispatchPlan, ProtocolFamily};

use common::load_service;

#[test]
fn json_service_bakes_in_versions_and_target() {
    let service = load_service("dynamodb");
    let plan = DispatchPlan::resolve(&service);

    assert_eq!(plan.family, ProtocolFamily::SimplePost);
    assert_eq!(plan.forwarded(), vec!["operation"]);

    let dispatcher = render_dispatcher(&service, &plan);
    assert!(dispatcher.contains("json_version=\"1.0\""));
    assert!(dispatcher.contains("target=\"DynamoDB_20120810\""));
    assert!(dispatcher.contains("verb=\"POST\",\n        resource=\"/\""));
    assert!(!dispatcher.contains("endpoint="));
}

#[test]
fn rest_service_omits_operation() {
    let service = load_service("s3");
    let plan = DispatchPlan::resolve(&service);

    assert_eq!(plan.family, ProtocolFamily::Rest);
    assert_eq!(
        plan.names(),
        vec!["service", "version", "verb", "resource"]
    );
    assert_eq!(plan.transport_function(), "service_rest_xml");
}

#[test]
fn legacy_query_service_forwards_http_binding() {
    let service = load_service("importexport");
    let plan = DispatchPlan::resolve(&service);

    assert_eq!(plan.family, ProtocolFamily::Rpc);
    assert_eq!(plan.forwarded(), vec!["verb", "resource", "operation"]);

    let generated = generate_service(&service, &GeneratorConfig::default()).unwrap();
    assert!(generated.bindings.contains(
        "AWSCore.Services.importexport(aws, \"POST\", \"/?Operation=CancelJob\", \"CancelJob\", args)"
    ));
    assert!(generated.dispatcher.contains(
        "function importexport(aws::AWSConfig, verb, resource, operation, args=[])"
    ));
}

#[test]
fn ec2_dispatches_through_query_transport() {
    let service = load_service("ec2");
    let plan = DispatchPlan::resolve(&service);

    assert_eq!(service.metadata.protocol, Protocol::Ec2);
    assert_eq!(plan.serialization, Protocol::Query);

    let generated = generate_service(&service, &GeneratorConfig::default()).unwrap();
    assert!(generated.dispatcher.contains("AWSCore.service_query("));
    assert!(generated.bindings.contains(
        "AWSCore.Services.ec2(aws, \"DescribeInstances\", args)"
    ));
}

#[test]
fn bindings_and_dispatcher_agree_on_forwarded_parameters() {
    for name in ["dynamodb", "s3", "importexport", "ec2"] {
        let service = load_service(name);
        let generated = generate_service(&service, &GeneratorConfig::default()).unwrap();
        let plan = DispatchPlan::resolve(&service);

        let mut expected = vec!["aws::AWSConfig"];
        expected.extend(plan.forwarded());
        expected.push("args=[]");
        let signature = format!(
            "function {}({})",
            service.metadata.endpoint_prefix,
            expected.join(", ")
        );
        assert!(
            generated.dispatcher.contains(&signature),
            "{name}: expected `{signature}` in\n{}",
            generated.dispatcher
        );
    }
}

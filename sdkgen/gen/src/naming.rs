//! Identifier case conversion and natural-language list joining.

use sdkgen_define::{MemberRef, ServiceDefinition};

/// Signing name of the API family whose member names are capitalized.
pub const EC2_SIGNING_NAME: &str = "ec2";

/// Converts an identifier to snake_case.
///
/// An underscore is inserted at every lowercase-to-uppercase transition and
/// the result is lowercased. Runs of capitals are not split, so the function is
/// total and idempotent on input that is already snake_case.
///
/// ## Examples
///
/// ```
/// use sdkgen_gen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("ListBuckets"), "list_buckets");
/// assert_eq!(to_snake_case("DescribeDBInstances"), "describe_dbinstances");
/// assert_eq!(to_snake_case("list_buckets"), "list_buckets");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 4);
    let mut prev_lower = false;
    for c in identifier.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_lowercase();
        result.extend(c.to_lowercase());
    }
    result
}

/// Returns the name a member is displayed and serialized under.
///
/// The member's `locationName` wins over its raw name. For the EC2 family the
/// first character is upper-cased, matching that API's parameter naming.
///
/// ## Examples
///
/// ```
/// use sdkgen_define::{MemberRef, Metadata, Protocol, ServiceDefinition};
/// use sdkgen_gen::naming::effective_member_name;
///
/// let sqs = ServiceDefinition::new(Metadata::new(Protocol::Query, "sqs", "2012-11-05"));
/// let ec2 = ServiceDefinition::new(Metadata::new(Protocol::Ec2, "ec2", "2016-11-15"));
/// let member = MemberRef::new("String").with_location_name("groupName");
///
/// assert_eq!(effective_member_name(&sqs, "GroupName", &member), "groupName");
/// assert_eq!(effective_member_name(&ec2, "GroupName", &member), "GroupName");
/// ```
pub fn effective_member_name(
    service: &ServiceDefinition,
    raw_name: &str,
    member: &MemberRef,
) -> String {
    let name = member.location_name.as_deref().unwrap_or(raw_name);
    if service.metadata.signing_name() == EC2_SIGNING_NAME {
        capitalize(name)
    } else {
        name.to_string()
    }
}

/// Joins words as a natural-language enumeration ending in "or".
///
/// ## Examples
///
/// ```
/// use sdkgen_gen::naming::join_with_or;
///
/// assert_eq!(join_with_or::<&str>(&[]), "");
/// assert_eq!(join_with_or(&["a"]), "a");
/// assert_eq!(join_with_or(&["a", "b"]), "a or b");
/// assert_eq!(join_with_or(&["a", "b", "c"]), "a, b or c");
/// ```
pub fn join_with_or<S: AsRef<str>>(words: &[S]) -> String {
    match words {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} or {}", head.join(", "), last.as_ref())
        }
    }
}

/// Turns an endpoint prefix or service id into a valid identifier
/// (`runtime.lex` -> `runtime_lex`, `Cognito Identity` -> `cognito_identity`).
pub fn to_identifier(name: &str) -> String {
    to_snake_case(name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Builds a module name from a display name (`Elastic Load Balancing` -> `ElasticLoadBalancing`).
pub fn to_module_name(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_define::{Metadata, Protocol};

    // === to_snake_case ===

    #[test]
    fn snake_case_splits_lower_upper_boundaries() {
        assert_eq!(to_snake_case("ListBuckets"), "list_buckets");
        assert_eq!(to_snake_case("GetObjectAcl"), "get_object_acl");
        assert_eq!(to_snake_case("a"), "a");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn snake_case_keeps_capital_runs_together() {
        assert_eq!(to_snake_case("DescribeDBInstances"), "describe_dbinstances");
        assert_eq!(to_snake_case("SSEKMSKeyId"), "ssekmskey_id");
    }

    #[test]
    fn snake_case_is_idempotent() {
        for name in ["ListBuckets", "DescribeDBInstances", "PutBucketACL", "x"] {
            let once = to_snake_case(name);
            assert_eq!(to_snake_case(&once), once);
        }
    }

    // === join_with_or ===

    #[test]
    fn join_with_or_many() {
        assert_eq!(
            join_with_or(&["`A`", "`B`", "`C`", "`D`"]),
            "`A`, `B`, `C` or `D`"
        );
    }

    #[test]
    fn join_with_or_accepts_owned_strings() {
        let words = vec!["x".to_string(), "y".to_string()];
        assert_eq!(join_with_or(&words), "x or y");
    }

    // === effective_member_name ===

    #[test]
    fn member_name_falls_back_to_raw_name() {
        let service = ServiceDefinition::new(Metadata::new(Protocol::Json, "dynamodb", "v"));
        assert_eq!(
            effective_member_name(&service, "TableName", &MemberRef::new("String")),
            "TableName"
        );
    }

    #[test]
    fn ec2_detection_uses_signing_name() {
        let mut meta = Metadata::new(Protocol::Query, "compute", "v");
        meta.signing_name = Some(EC2_SIGNING_NAME.to_string());
        let service = ServiceDefinition::new(meta);
        let member = MemberRef::new("String").with_location_name("instanceId");
        assert_eq!(
            effective_member_name(&service, "InstanceId", &member),
            "InstanceId"
        );
    }

    // === identifiers ===

    #[test]
    fn identifiers_and_module_names() {
        assert_eq!(to_identifier("runtime.lex"), "runtime_lex");
        assert_eq!(to_identifier("DynamoDB"), "dynamo_db");
        assert_eq!(to_module_name("Elastic Load Balancing v2"), "ElasticLoadBalancingV2");
        assert_eq!(to_module_name("s3"), "S3");
    }
}

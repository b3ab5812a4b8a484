//! Path parameter extraction from request-URI templates.
//!
//! Request URIs mark path parameters with braces: `/{Bucket}/{Key+}`. A
//! trailing `+` marks a greedy parameter that may span several segments; it is
//! not part of the parameter's name.

/// Extracts path parameter names from a request-URI template.
///
/// ## Examples
///
/// ```
/// use sdkgen_gen::parser::path_params;
///
/// assert_eq!(path_params("/"), Vec::<&str>::new());
/// assert_eq!(path_params("/{Bucket}"), vec!["Bucket"]);
/// assert_eq!(path_params("/{Bucket}/{Key+}?uploads"), vec!["Bucket", "Key"]);
/// ```
pub fn path_params(uri: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut rest = uri;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = after[..close].trim_end_matches('+');
        if !name.is_empty() {
            params.push(name);
        }
        rest = &after[close + 1..];
    }

    params
}

/// Returns `true` if the request-URI template has any path parameter.
pub fn has_path_params(uri: &str) -> bool {
    !path_params(uri).is_empty()
}

//! Protocol family classification and dispatcher parameter resolution.
//!
//! A service's protocol decides which request parameters vary per operation
//! and which are fixed for the whole service:
//!
//! | family        | protocols                 | verb / resource     | operation |
//! |---------------|---------------------------|---------------------|-----------|
//! | `SimplePost`  | json, query, ec2          | fixed `POST` / `/`  | forwarded |
//! | `Rpc`         | query (`importexport`)    | forwarded           | forwarded |
//! | `Rest`        | rest-json, rest-xml       | forwarded           | omitted   |
//!
//! [`DispatchPlan`] is computed once per service and is the single source of
//! truth for both the per-operation bindings and the service dispatcher.

use sdkgen_define::{Protocol, ServiceDefinition};

/// Endpoint prefix of the one query service that binds every operation to its
/// own HTTP method and resource instead of `POST /`.
pub const LEGACY_ENDPOINT_PREFIX: &str = "importexport";

/// JSON protocol version assumed when a service does not declare one.
pub const DEFAULT_JSON_VERSION: &str = "1.0";

/// How a service binds operations onto HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFamily {
    /// Every request is `POST /`; the operation name selects the action.
    SimplePost,
    /// RPC protocol whose operations nonetheless carry their own HTTP method
    /// and resource (the legacy import/export service).
    Rpc,
    /// Per-operation HTTP method and resource path, with path parameters.
    Rest,
}

impl ProtocolFamily {
    /// Classifies a service.
    ///
    /// ## Examples
    ///
    /// ```
    /// use sdkgen_define::{Metadata, Protocol, ServiceDefinition};
    /// use sdkgen_gen::protocol::ProtocolFamily;
    ///
    /// let classify = |protocol, prefix| {
    ///     ProtocolFamily::classify(&ServiceDefinition::new(Metadata::new(protocol, prefix, "v")))
    /// };
    ///
    /// assert_eq!(classify(Protocol::Json, "dynamodb"), ProtocolFamily::SimplePost);
    /// assert_eq!(classify(Protocol::Query, "importexport"), ProtocolFamily::Rpc);
    /// assert_eq!(classify(Protocol::RestXml, "s3"), ProtocolFamily::Rest);
    /// ```
    pub fn classify(service: &ServiceDefinition) -> Self {
        let meta = &service.metadata;
        match meta.protocol {
            p if p.is_rest() => ProtocolFamily::Rest,
            Protocol::Json | Protocol::Query | Protocol::Ec2
                if meta.endpoint_prefix != LEGACY_ENDPOINT_PREFIX =>
            {
                ProtocolFamily::SimplePost
            }
            _ => ProtocolFamily::Rpc,
        }
    }

    /// Whether each call passes its own HTTP method and resource path.
    pub fn forwards_http_binding(self) -> bool {
        self != ProtocolFamily::SimplePost
    }

    /// Whether each call passes the operation name.
    pub fn forwards_operation(self) -> bool {
        self != ProtocolFamily::Rest
    }

    /// Whether `{Param}` placeholders may appear in request URIs.
    pub fn allows_path_params(self) -> bool {
        self == ProtocolFamily::Rest
    }
}

/// Where a dispatcher parameter's value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Passed in by the caller under the parameter's own name.
    Forwarded,
    /// Baked into the dispatcher as a string literal.
    Literal(String),
}

/// One keyword parameter the dispatcher hands to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchParam {
    pub name: &'static str,
    pub value: ParamValue,
}

impl DispatchParam {
    fn literal(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: ParamValue::Literal(value.into()),
        }
    }

    fn forwarded(name: &'static str) -> Self {
        Self {
            name,
            value: ParamValue::Forwarded,
        }
    }

    /// `name="literal"` or `name=name`.
    pub fn keyword(&self) -> String {
        match &self.value {
            ParamValue::Literal(v) => format!("{}=\"{}\"", self.name, v),
            ParamValue::Forwarded => format!("{0}={0}", self.name),
        }
    }
}

/// Resolved dispatch parameters of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    /// Protocol family the plan was derived from.
    pub family: ProtocolFamily,
    /// Protocol used for serialization (`ec2` folds into `query`).
    pub serialization: Protocol,
    /// Keyword parameters in dispatch order.
    pub params: Vec<DispatchParam>,
}

impl DispatchPlan {
    /// Resolves the dispatcher parameters for `service`.
    ///
    /// Order: `service`, `version`, `endpoint` (only when it differs from the
    /// signing name), `verb`, `resource`, `json_version` and `target` (json
    /// only), `operation` (not for REST).
    ///
    /// ## Examples
    ///
    /// ```
    /// use sdkgen_define::{Metadata, Protocol, ServiceDefinition};
    /// use sdkgen_gen::protocol::DispatchPlan;
    ///
    /// let service = ServiceDefinition::new(Metadata::new(Protocol::Json, "dynamodb", "2012-08-10"));
    /// let plan = DispatchPlan::resolve(&service);
    /// assert_eq!(
    ///     plan.names(),
    ///     vec!["service", "version", "verb", "resource", "json_version", "target", "operation"]
    /// );
    /// ```
    pub fn resolve(service: &ServiceDefinition) -> Self {
        let meta = &service.metadata;
        let family = ProtocolFamily::classify(service);
        let signing_name = meta.signing_name();

        let mut params = vec![
            DispatchParam::literal("service", signing_name),
            DispatchParam::literal("version", meta.api_version.as_str()),
        ];

        if meta.endpoint_prefix != signing_name {
            params.push(DispatchParam::literal("endpoint", meta.endpoint_prefix.as_str()));
        }

        if family.forwards_http_binding() {
            params.push(DispatchParam::forwarded("verb"));
            params.push(DispatchParam::forwarded("resource"));
        } else {
            params.push(DispatchParam::literal("verb", "POST"));
            params.push(DispatchParam::literal("resource", "/"));
        }

        if meta.protocol == Protocol::Json {
            params.push(DispatchParam::literal(
                "json_version",
                normalize_json_version(meta.json_version.as_deref()),
            ));
            params.push(DispatchParam::literal(
                "target",
                meta.target_prefix.as_deref().unwrap_or_default(),
            ));
        }

        if family.forwards_operation() {
            params.push(DispatchParam::forwarded("operation"));
        }

        Self {
            family,
            serialization: meta.protocol.serialization(),
            params,
        }
    }

    /// Parameter names in dispatch order.
    pub fn names(&self) -> Vec<&'static str> {
        self.params.iter().map(|p| p.name).collect()
    }

    /// Names of the parameters the caller supplies, in order.
    pub fn forwarded(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .filter(|p| p.value == ParamValue::Forwarded)
            .map(|p| p.name)
            .collect()
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&DispatchParam> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Transport entry point for this plan's serialization protocol.
    pub fn transport_function(&self) -> String {
        format!("service_{}", self.serialization.to_string().replace('-', "_"))
    }
}

/// Normalizes a declared JSON version; absent or bare `"1"` means `"1.0"`.
///
/// ```
/// use sdkgen_gen::protocol::normalize_json_version;
///
/// assert_eq!(normalize_json_version(None), "1.0");
/// assert_eq!(normalize_json_version(Some("1")), "1.0");
/// assert_eq!(normalize_json_version(Some("1.1")), "1.1");
/// ```
pub fn normalize_json_version(declared: Option<&str>) -> String {
    match declared {
        None | Some("1") => DEFAULT_JSON_VERSION.to_string(),
        Some(v) => v.to_string(),
    }
}

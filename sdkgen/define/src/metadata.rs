//! Service-level metadata and protocol tags.
//!
//! - [`Protocol`] - The serialization protocol a service speaks
//! - [`Metadata`] - Signing, endpoint and versioning details for a service

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Wire protocol declared by a service description.
///
/// The string forms match the tags used in the description documents.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use sdkgen_define::Protocol;
///
/// assert_eq!(Protocol::from_str("rest-json").unwrap(), Protocol::RestJson);
/// assert_eq!(Protocol::Ec2.to_string(), "ec2");
/// assert!(Protocol::RestXml.is_rest());
/// assert!(!Protocol::Query.is_rest());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Protocol {
    /// JSON bodies POSTed to `/`, operation selected by a target header.
    Json,
    /// Form-encoded query parameters POSTed to `/`.
    Query,
    /// The EC2 dialect of `query`.
    Ec2,
    /// JSON bodies with per-operation HTTP method and resource path.
    RestJson,
    /// XML bodies with per-operation HTTP method and resource path.
    RestXml,
}

impl Protocol {
    /// Returns `true` for the REST-style protocols (`rest-json`, `rest-xml`).
    pub fn is_rest(self) -> bool {
        matches!(self, Protocol::RestJson | Protocol::RestXml)
    }

    /// Returns the protocol used for request serialization.
    ///
    /// `ec2` serializes exactly like `query`; every other protocol is its own
    /// serialization.
    ///
    /// ```
    /// use sdkgen_define::Protocol;
    ///
    /// assert_eq!(Protocol::Ec2.serialization(), Protocol::Query);
    /// assert_eq!(Protocol::Json.serialization(), Protocol::Json);
    /// ```
    pub fn serialization(self) -> Protocol {
        match self {
            Protocol::Ec2 => Protocol::Query,
            other => other,
        }
    }
}

/// Metadata block of a service description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Wire protocol.
    pub protocol: Protocol,
    /// Name used when signing requests. Many descriptions omit it, in which
    /// case [`Metadata::signing_name`] falls back to the endpoint prefix.
    #[serde(default)]
    pub signing_name: Option<String>,
    /// Host prefix of the service endpoint (e.g. `dynamodb`, `s3`).
    pub endpoint_prefix: String,
    /// API version string (e.g. `2012-08-10`).
    pub api_version: String,
    /// JSON protocol version (`1.0`, `1.1`); only meaningful for `json`.
    #[serde(default)]
    pub json_version: Option<String>,
    /// Target header prefix; only meaningful for `json`.
    #[serde(default)]
    pub target_prefix: Option<String>,
    /// Unique identifier of this API revision, used for reference links.
    #[serde(default)]
    pub uid: Option<String>,
    /// Short display name of the service (e.g. `DynamoDB`).
    #[serde(default)]
    pub service_id: Option<String>,
    /// Long display name of the service.
    #[serde(default)]
    pub service_full_name: Option<String>,
}

impl Metadata {
    /// Returns the signing name, defaulting to the endpoint prefix.
    ///
    /// ```
    /// use sdkgen_define::{Metadata, Protocol};
    ///
    /// let mut meta = Metadata::new(Protocol::Query, "sdb", "2009-04-15");
    /// assert_eq!(meta.signing_name(), "sdb");
    ///
    /// meta.signing_name = Some("simpledb".to_string());
    /// assert_eq!(meta.signing_name(), "simpledb");
    /// ```
    pub fn signing_name(&self) -> &str {
        self.signing_name
            .as_deref()
            .unwrap_or(&self.endpoint_prefix)
    }

    /// Creates metadata with only the mandatory fields set.
    pub fn new(
        protocol: Protocol,
        endpoint_prefix: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            protocol,
            signing_name: None,
            endpoint_prefix: endpoint_prefix.into(),
            api_version: api_version.into(),
            json_version: None,
            target_prefix: None,
            uid: None,
            service_id: None,
            service_full_name: None,
        }
    }
}

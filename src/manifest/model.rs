//! Typed manifest documents.
//!
//! Field order in each struct is the order the fields appear in the
//! emitted YAML, so it is part of the document format.

use serde::Serialize;

/// Shared object metadata carrying only a name
#[derive(Debug, Serialize)]
pub struct ObjectMeta {
    pub name: String,
}

/// Namespace manifest
#[derive(Debug, Serialize)]
pub struct Namespace {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: NamespaceMetadata,
}

#[derive(Debug, Serialize)]
pub struct NamespaceMetadata {
    pub annotations: NamespaceAnnotations,
    pub labels: NamespaceLabels,
    pub name: String,
}

/// Identifying annotations for the namespace. Unset fields are emitted as
/// empty strings rather than omitted.
#[derive(Debug, Serialize)]
pub struct NamespaceAnnotations {
    /// Index name for the cluster log forwarder
    #[serde(rename = "collectord.io/index")]
    pub log_index: String,
    #[serde(rename = "projectctl.io/team")]
    pub team: String,
    #[serde(rename = "projectctl.io/email")]
    pub email: String,
    #[serde(rename = "projectctl.io/owner")]
    pub owner: String,
    #[serde(rename = "projectctl.io/service")]
    pub service: String,
    #[serde(rename = "projectctl.io/application")]
    pub application: String,
    #[serde(rename = "projectctl.io/domain")]
    pub domain: String,
    #[serde(rename = "projectctl.io/egressip")]
    pub egress_ip: String,
    #[serde(rename = "projectctl.io/snatip")]
    pub snat_ip: String,
    #[serde(rename = "projectctl.io/namespacevip")]
    pub namespace_vip: String,
}

#[derive(Debug, Serialize)]
pub struct NamespaceLabels {
    pub application: String,
    pub service: String,
    pub domain: String,
}

/// NetNamespace manifest tying the project to its egress identity
#[derive(Debug, Serialize)]
pub struct NetNamespace {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    #[serde(rename = "egressIPs")]
    pub egress_ips: Vec<String>,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub netname: String,
    pub netid: u32,
}

/// ResourceQuota manifest capping cpu and memory for the namespace
#[derive(Debug, Serialize)]
pub struct ResourceQuota {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ResourceQuotaSpec,
}

#[derive(Debug, Serialize)]
pub struct ResourceQuotaSpec {
    pub hard: QuotaHard,
}

#[derive(Debug, Serialize)]
pub struct QuotaHard {
    /// Bare integer, no unit
    pub cpu: u32,
    /// Rendered with a binary capacity unit, e.g. "16Gi"
    pub memory: String,
}

/// Per-project kustomization overlay. The resources block always precedes
/// the patches block.
#[derive(Debug, Serialize)]
pub struct Kustomization {
    pub namespace: String,
    #[serde(rename = "commonLabels")]
    pub common_labels: CommonLabels,
    pub resources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patches: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CommonLabels {
    pub prometheus: String,
}

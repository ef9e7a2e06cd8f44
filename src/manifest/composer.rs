//! Manifest composition.
//!
//! Pure functions from a populated [`Project`] to the set of documents
//! written into the project directory. Which documents exist is decided
//! here; writing them is the writer's job.

use crate::project::Project;

use super::model::{
    CommonLabels, Kustomization, Namespace, NamespaceAnnotations, NamespaceLabels,
    NamespaceMetadata, NetNamespace, ObjectMeta, QuotaHard, ResourceQuota, ResourceQuotaSpec,
};

const CORE_API_VERSION: &str = "v1";
const NETNAMESPACE_API_VERSION: &str = "network.openshift.io/v1";

/// Shared resources every project overlay pulls in
const COMMON_RESOURCES_REF: &str = "../../../common/";
const PROMETHEUS_LABEL: &str = "appdeployment";
const QUOTA_NAME: &str = "compute";
const LOG_INDEX_PREFIX: &str = "openshift_";

/// The manifests produced for one project
#[derive(Debug)]
pub struct ManifestSet {
    pub namespace: Namespace,
    pub netnamespace: Option<NetNamespace>,
    pub resource_quota: Option<ResourceQuota>,
    pub kustomization: Kustomization,
}

/// Compose all manifests for the project
pub fn compose(project: &Project) -> ManifestSet {
    let netnamespace = netnamespace_manifest(project);
    let resource_quota = resource_quota_manifest(project);
    let kustomization =
        kustomization_manifest(project, netnamespace.is_some(), resource_quota.is_some());

    ManifestSet {
        namespace: namespace_manifest(project),
        netnamespace,
        resource_quota,
        kustomization,
    }
}

/// Namespace manifest, always produced
pub fn namespace_manifest(project: &Project) -> Namespace {
    Namespace {
        api_version: CORE_API_VERSION.to_string(),
        kind: "Namespace".to_string(),
        metadata: NamespaceMetadata {
            annotations: NamespaceAnnotations {
                log_index: format!("{}{}", LOG_INDEX_PREFIX, project.name),
                team: project.team.clone(),
                email: project.email.clone(),
                owner: project.owner.clone(),
                service: project.service.clone(),
                application: project.application.clone(),
                domain: project.domain.clone(),
                egress_ip: project.egress_ip.clone(),
                snat_ip: project.snat_ip.clone(),
                namespace_vip: project.namespace_vip.clone(),
            },
            labels: NamespaceLabels {
                application: project.application.clone(),
                service: project.service.clone(),
                domain: project.domain.clone(),
            },
            name: project.name.clone(),
        },
    }
}

/// NetNamespace manifest, produced only when an egress IP is assigned
pub fn netnamespace_manifest(project: &Project) -> Option<NetNamespace> {
    if !project.has_egress() {
        return None;
    }
    Some(NetNamespace {
        api_version: NETNAMESPACE_API_VERSION.to_string(),
        egress_ips: vec![project.egress_ip.clone()],
        kind: "NetNamespace".to_string(),
        metadata: ObjectMeta {
            name: project.name.clone(),
        },
        netname: project.name.clone(),
        netid: project.net_id.parse().unwrap_or_default(),
    })
}

/// ResourceQuota manifest, produced only when cpu and memory are both set
pub fn resource_quota_manifest(project: &Project) -> Option<ResourceQuota> {
    if !project.wants_quota() {
        return None;
    }
    Some(ResourceQuota {
        api_version: CORE_API_VERSION.to_string(),
        kind: "ResourceQuota".to_string(),
        metadata: ObjectMeta {
            name: QUOTA_NAME.to_string(),
        },
        spec: ResourceQuotaSpec {
            hard: QuotaHard {
                cpu: project.cpu,
                memory: format!("{}Gi", project.memory),
            },
        },
    })
}

/// Per-project overlay. The resource list always carries the shared common
/// reference and the namespace document; the netnamespace entry and the
/// quota patch are appended only when those documents exist.
pub fn kustomization_manifest(
    project: &Project,
    has_netnamespace: bool,
    has_quota: bool,
) -> Kustomization {
    let mut resources = vec![
        COMMON_RESOURCES_REF.to_string(),
        "namespace.yaml".to_string(),
    ];
    if has_netnamespace {
        resources.push("netnamespace.yaml".to_string());
    }

    Kustomization {
        namespace: project.name.clone(),
        common_labels: CommonLabels {
            prometheus: PROMETHEUS_LABEL.to_string(),
        },
        resources,
        patches: has_quota.then(|| vec!["resourcequota.yaml".to_string()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let mut project = Project::new("team-x");
        project.team = "platform".to_string();
        project.email = "platform@example.org".to_string();
        project.owner = "jo".to_string();
        project.service = "payments".to_string();
        project.application = "ledger".to_string();
        project.domain = "finance".to_string();
        project
    }

    #[test]
    fn test_namespace_manifest_carries_identity() {
        let mut project = sample_project();
        project.assign_egress("10.0.0.1".to_string(), "42573".to_string());

        let ns = namespace_manifest(&project);
        assert_eq!(ns.metadata.name, "team-x");
        assert_eq!(ns.metadata.annotations.log_index, "openshift_team-x");
        assert_eq!(ns.metadata.annotations.egress_ip, "10.0.0.1");
        assert_eq!(ns.metadata.labels.application, "ledger");
        // Unset optionals stay as empty strings
        assert_eq!(ns.metadata.annotations.snat_ip, "");
    }

    #[test]
    fn test_netnamespace_requires_egress_ip() {
        let mut project = sample_project();
        assert!(netnamespace_manifest(&project).is_none());

        project.assign_egress("10.0.0.1".to_string(), "42573".to_string());
        let netns = netnamespace_manifest(&project).unwrap();
        assert_eq!(netns.egress_ips, vec!["10.0.0.1".to_string()]);
        assert_eq!(netns.netname, "team-x");
        assert_eq!(netns.netid, 42573);
    }

    #[test]
    fn test_quota_requires_both_capacities() {
        let mut project = sample_project();
        project.cpu = 2;
        assert!(resource_quota_manifest(&project).is_none());

        project.memory = 16;
        let quota = resource_quota_manifest(&project).unwrap();
        assert_eq!(quota.spec.hard.cpu, 2);
        assert_eq!(quota.spec.hard.memory, "16Gi");
        assert_eq!(quota.metadata.name, "compute");

        project.cpu = 0;
        assert!(resource_quota_manifest(&project).is_none());
    }

    #[test]
    fn test_kustomization_conditional_entries() {
        let project = sample_project();

        let bare = kustomization_manifest(&project, false, false);
        assert_eq!(bare.resources, vec!["../../../common/", "namespace.yaml"]);
        assert!(bare.patches.is_none());

        let full = kustomization_manifest(&project, true, true);
        assert_eq!(
            full.resources,
            vec!["../../../common/", "namespace.yaml", "netnamespace.yaml"]
        );
        assert_eq!(full.patches, Some(vec!["resourcequota.yaml".to_string()]));
    }

    #[test]
    fn test_kustomization_resources_precede_patches() {
        let project = sample_project();
        let yaml =
            serde_yaml::to_string(&kustomization_manifest(&project, true, true)).unwrap();

        let resources_at = yaml.find("resources:").unwrap();
        let patches_at = yaml.find("patches:").unwrap();
        assert!(resources_at < patches_at);
        assert!(yaml.contains("namespace: team-x"));
        assert!(yaml.contains("prometheus: appdeployment"));
    }

    #[test]
    fn test_compose_bundles_conditionals() {
        let mut project = sample_project();
        project.cpu = 2;
        project.memory = 16;
        project.assign_egress("10.0.0.1".to_string(), "42573".to_string());

        let manifests = compose(&project);
        assert!(manifests.netnamespace.is_some());
        assert!(manifests.resource_quota.is_some());
        assert!(manifests
            .kustomization
            .resources
            .contains(&"netnamespace.yaml".to_string()));

        project.egress_ip.clear();
        project.net_id.clear();
        let manifests = compose(&project);
        assert!(manifests.netnamespace.is_none());
        assert!(!manifests
            .kustomization
            .resources
            .contains(&"netnamespace.yaml".to_string()));
    }

    #[test]
    fn test_annotation_values_are_escaped_by_encoder() {
        let mut project = sample_project();
        project.team = "platform: core".to_string();

        let yaml = serde_yaml::to_string(&namespace_manifest(&project)).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            parsed["metadata"]["annotations"]["projectctl.io/team"],
            "platform: core"
        );
    }
}

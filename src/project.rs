//! Project record and validation.
//!
//! A [`Project`] is the unit of work for onboarding: constructed once per
//! invocation from caller-supplied fields, mutated exactly once when an
//! egress IP is allocated, and read-only afterwards. The record itself is
//! never persisted; only its rendered manifests are.

use serde::{Deserialize, Serialize};

/// Project details for onboarding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project name, unique within a cluster build; always lower-cased
    pub name: String,
    pub team: String,
    pub email: String,
    pub owner: String,
    pub service: String,
    pub application: String,
    pub domain: String,
    /// Requested cpu capacity, 0 = unset
    pub cpu: u32,
    /// Requested memory capacity in GiB, 0 = unset
    pub memory: u32,
    /// Allocated egress IP; set together with `net_id` or not at all
    #[serde(default)]
    pub egress_ip: String,
    /// Network id derived from the egress IP
    #[serde(default)]
    pub net_id: String,
    #[serde(default)]
    pub snat_ip: String,
    #[serde(default)]
    pub namespace_vip: String,
}

/// Project validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid project: {0}")]
    InvalidProject(String),
}

impl Project {
    /// Create a record with the given name (lower-cased) and empty defaults
    pub fn new(name: &str) -> Self {
        Project {
            name: name.to_lowercase(),
            ..Project::default()
        }
    }

    /// Validate the record before any file operation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::InvalidProject(
                "project name cannot be empty".to_string(),
            ));
        }
        if self.egress_ip.is_empty() != self.net_id.is_empty() {
            return Err(ValidationError::InvalidProject(
                "egress IP and network id must be set together".to_string(),
            ));
        }
        Ok(())
    }

    /// Record an egress IP allocation. This is the only mutation the record
    /// sees after construction.
    pub fn assign_egress(&mut self, egress_ip: String, net_id: String) {
        self.egress_ip = egress_ip;
        self.net_id = net_id;
    }

    /// Whether the project carries an egress identity
    pub fn has_egress(&self) -> bool {
        !self.egress_ip.is_empty()
    }

    /// Whether a resource quota should be emitted. Cpu and memory are a
    /// pair: a quota makes sense only when both are set.
    pub fn wants_quota(&self) -> bool {
        self.cpu != 0 && self.memory != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_name() {
        let project = Project::new("Team-X");
        assert_eq!(project.name, "team-x");
        assert!(project.egress_ip.is_empty());
        assert!(project.net_id.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let project = Project::default();
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_partial_egress_identity() {
        let mut project = Project::new("team-x");
        project.egress_ip = "10.0.0.1".to_string();
        assert!(project.validate().is_err());

        project.net_id = "42573".to_string();
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_assign_egress_keeps_invariant() {
        let mut project = Project::new("team-x");
        project.assign_egress("10.0.0.1".to_string(), "42573".to_string());
        assert!(project.has_egress());
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_wants_quota_requires_both_capacities() {
        let mut project = Project::new("team-x");
        assert!(!project.wants_quota());
        project.cpu = 2;
        assert!(!project.wants_quota());
        project.memory = 16;
        assert!(project.wants_quota());
    }
}

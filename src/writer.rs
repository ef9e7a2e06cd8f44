//! Project directory and overlay index writing.
//!
//! One directory per project, one file per produced manifest, and exactly
//! one line appended to the pre-existing cluster overlay index. Files
//! already written are not cleaned up when a later write fails.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Serialize;

use crate::manifest::ManifestSet;
use crate::project::Project;

pub const NAMESPACE_FILE: &str = "namespace.yaml";
pub const NETNAMESPACE_FILE: &str = "netnamespace.yaml";
pub const RESOURCEQUOTA_FILE: &str = "resourcequota.yaml";
pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";

/// Create the per-project directory under the cluster build directory.
/// An already-existing directory is an error; onboarding the same project
/// twice has to fail before an egress IP is allocated for it.
pub fn create_project_dir(base: &Path, name: &str) -> Result<PathBuf> {
    let dir = base.join(name);
    fs::create_dir(&dir)
        .wrap_err_with(|| format!("Failed to create project directory '{}'", dir.display()))?;
    Ok(dir)
}

/// Write every produced manifest into the project directory
pub fn write_manifests(base: &Path, project: &Project, manifests: &ManifestSet) -> Result<()> {
    let dir = base.join(&project.name);

    write_yaml(&dir.join(NAMESPACE_FILE), &manifests.namespace)?;
    if let Some(netnamespace) = &manifests.netnamespace {
        write_yaml(&dir.join(NETNAMESPACE_FILE), netnamespace)?;
    }
    if let Some(quota) = &manifests.resource_quota {
        write_yaml(&dir.join(RESOURCEQUOTA_FILE), quota)?;
    }
    write_yaml(&dir.join(KUSTOMIZATION_FILE), &manifests.kustomization)?;
    Ok(())
}

fn write_yaml<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(document)
        .wrap_err_with(|| format!("Failed to serialize '{}'", path.display()))?;
    fs::write(path, yaml).wrap_err_with(|| format!("Failed to write '{}'", path.display()))
}

/// Append the project to the cluster overlay index. The index is owned by
/// the cluster build, not this tool: it must already exist.
pub fn append_to_cluster_index(base: &Path, name: &str) -> Result<()> {
    let index = base.join(KUSTOMIZATION_FILE);
    let mut file = OpenOptions::new()
        .append(true)
        .open(&index)
        .wrap_err_with(|| format!("Failed to open cluster index '{}'", index.display()))?;
    writeln!(file, "  - {}", name)
        .wrap_err_with(|| format!("Failed to update cluster index '{}'", index.display()))
}

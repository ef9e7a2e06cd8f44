//! Onboarding pipeline orchestration.
//!
//! This module coordinates the overall onboarding flow for one project:
//! validate the record, create its directory, allocate an egress IP,
//! compose the manifests, write them, and register the project in the
//! cluster overlay index.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;

use crate::egress::{self, AllocationOutcome};
use crate::manifest;
use crate::project::Project;
use crate::writer;

/// Name of the shared egress pool file inside the cluster build directory
pub const ALLOCATIONS_FILE: &str = "egress-ip-allocations.json";

/// Onboard one project under `base` (the `<cluster>/<buildnumber>/`
/// directory).
///
/// Steps run in a fixed order and any failure aborts the rest; manifests
/// already on disk are left in place. The overlay index is only touched
/// after every per-project manifest was written, and the egress pool is
/// only touched after the project directory was created.
pub fn onboard_project(base: &Path, project: &mut Project) -> Result<()> {
    project
        .validate()
        .wrap_err("Refusing to onboard invalid project")?;

    let dir = writer::create_project_dir(base, &project.name)?;
    info!("Created project directory {}", dir.display());

    match egress::allocate(&base.join(ALLOCATIONS_FILE), &project.name)? {
        AllocationOutcome::Allocated { egress_ip, net_id } => {
            project.assign_egress(egress_ip, net_id);
        }
        AllocationOutcome::NoPool => {}
    }

    let manifests = manifest::compose(project);
    writer::write_manifests(base, project, &manifests)?;
    writer::append_to_cluster_index(base, &project.name)?;

    info!("Project {} onboarded under {}", project.name, base.display());
    Ok(())
}

//! Manifest documents and composition.
//!
//! Manifests are modeled as typed documents and serialized through
//! `serde_yaml`, so field values are escaped by the encoder rather than
//! spliced into templates.

pub mod composer;
pub mod model;

// Re-export commonly used types
pub use composer::{compose, ManifestSet};
pub use model::{Kustomization, Namespace, NetNamespace, ObjectMeta, ResourceQuota};

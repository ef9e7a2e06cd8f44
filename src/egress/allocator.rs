//! Egress IP allocation store.
//!
//! The pool is a single JSON file per cluster build mapping egress IP to
//! the name of the project it is assigned to; the empty string marks a
//! free entry. The file is read fully, mutated in memory, and written back
//! fully (last writer wins). There is no file locking: concurrent
//! invocations against the same build directory race, and single-process,
//! single-invocation use is assumed.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use super::netid::derive_net_id;

/// Egress IP pool: IP address -> assigned project name, empty = free.
/// A `BTreeMap` fixes scan order to lexicographic by key, so the lowest
/// free IP always wins.
pub type EgressAllocations = BTreeMap<String, String>;

/// Errors that can occur while reading, updating, or writing the pool
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("Cannot read allocation file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed allocation file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("Cannot allocate egress IP: no free entry in {path}")]
    PoolExhausted { path: String },

    #[error("Cannot write allocation file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot encode allocation table: {0}")]
    Encode(serde_json::Error),
}

/// Result of an allocation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// A free entry was assigned to the project
    Allocated { egress_ip: String, net_id: String },
    /// No pool file or an empty pool; the project proceeds without an
    /// egress identity
    NoPool,
}

/// Load the allocation table. A missing file is not an error: it means no
/// egress IPs are configured for this cluster, distinct from a file that
/// exists but cannot be read or decoded.
pub fn load_allocations(path: &Path) -> Result<Option<EgressAllocations>, AllocationError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(AllocationError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };

    // A zero-byte file counts as an empty pool, not as malformed JSON
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Some(EgressAllocations::new()));
    }

    let table = serde_json::from_slice(&bytes).map_err(|source| AllocationError::Malformed {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(table))
}

/// Write the allocation table back, overwriting prior content
pub fn store_allocations(path: &Path, table: &EgressAllocations) -> Result<(), AllocationError> {
    let json = serde_json::to_string_pretty(table).map_err(AllocationError::Encode)?;
    fs::write(path, json).map_err(|source| AllocationError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Allocate the first free egress IP (lexicographically lowest key) to
/// `project_name` and persist the updated table.
///
/// Pool exhaustion is fatal to the caller and leaves the file unmodified.
/// A missing file or empty pool is a soft no-op reported as
/// [`AllocationOutcome::NoPool`].
pub fn allocate(path: &Path, project_name: &str) -> Result<AllocationOutcome, AllocationError> {
    let mut table = match load_allocations(path)? {
        Some(table) => table,
        None => {
            info!(
                "No egress allocation file at {}, continuing without egress identity",
                path.display()
            );
            return Ok(AllocationOutcome::NoPool);
        }
    };

    if table.is_empty() {
        info!("No egress IPs configured for this cluster");
        return Ok(AllocationOutcome::NoPool);
    }

    let free_ip = table
        .iter()
        .find(|(_, assignee)| assignee.is_empty())
        .map(|(ip, _)| ip.clone());

    let egress_ip = match free_ip {
        Some(ip) => ip,
        None => {
            return Err(AllocationError::PoolExhausted {
                path: path.display().to_string(),
            })
        }
    };

    table.insert(egress_ip.clone(), project_name.to_string());
    store_allocations(path, &table)?;

    let net_id = derive_net_id(&egress_ip);
    info!(
        "Allocated egress IP {} (netid {}) to project {}",
        egress_ip, net_id, project_name
    );
    Ok(AllocationOutcome::Allocated { egress_ip, net_id })
}

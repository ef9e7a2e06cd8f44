//! Egress IP pool management.
//!
//! This module handles exclusive allocation of egress IPs from the shared
//! per-build pool file and derivation of the network identifier tied to
//! each assignment.

pub mod allocator;
pub mod netid;

// Re-export commonly used types
pub use allocator::{
    allocate, load_allocations, store_allocations, AllocationError, AllocationOutcome,
    EgressAllocations,
};
pub use netid::derive_net_id;

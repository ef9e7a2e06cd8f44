//! Network identifier derivation.
//!
//! Every egress IP assignment carries a pseudo-numeric network id. The id
//! is a direct transform of the IP string, so the same IP always maps to
//! the same id across calls and process restarts.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// Network ids are drawn from [0, 1_000_000)
const NET_ID_SPACE: u32 = 1_000_000;

/// FNV-1a 32-bit hash
fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the network id for an egress IP, as a decimal string.
pub fn derive_net_id(seed: &str) -> String {
    (fnv1a_32(seed.as_bytes()) % NET_ID_SPACE).to_string()
}

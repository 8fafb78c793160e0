//! Domain models for network subtraction.
//!
//! - [`Network`] - IPv4/IPv6 CIDR block
//! - [`NetworkSet`] - ordered set of networks

mod network;
mod network_set;

// Re-export public types
pub use network::{cut_addr, host_mask, Family, Network, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use network_set::NetworkSet;

//! Network set processing logic.
//!
//! - [`subtract`] - Subtracting an exclude set from an include set
//! - [`overlap`] - Overlap lookups and the disjointness check

mod overlap;
mod subtract;

// Re-export public functions
pub use overlap::{find_overlap, find_overlapping_pair, verify_disjoint};
pub use subtract::{subtract, subtract_in_order, WorkOrder};

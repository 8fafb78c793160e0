//! Network set subtraction.
//!
//! Include networks are split against exclude networks until no fragment
//! overlaps any exclude entry. Every split lengthens the prefix by one, so the
//! work-list drains after at most address-width splits per include network
//! and intersecting exclude.

use super::overlap::{find_overlap, verify_disjoint};
use crate::error::Result;
use crate::models::NetworkSet;
use std::collections::VecDeque;

/// Work-list discipline. The result does not depend on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WorkOrder {
    /// Pop the most recently pushed network.
    #[default]
    Stack,
    /// Pop the oldest network.
    Queue,
}

/// Subtract `exclude` from `include`.
///
/// # Arguments
/// * `include` - Networks to keep, consumed
/// * `exclude` - Networks to remove
///
/// # Returns
/// * `Ok(NetworkSet)` - Disjoint blocks covering exactly `include` minus `exclude`
/// * `Err(Error::InvariantViolation)` - If an output block still overlaps an exclude
///
/// # Examples
/// ```
/// use ip_exclude::models::{Network, NetworkSet};
/// use ip_exclude::processing::subtract;
/// let include: NetworkSet = ["10.0.0.0/24".parse::<Network>().unwrap()].into_iter().collect();
/// let exclude: NetworkSet = ["10.0.0.128/25".parse::<Network>().unwrap()].into_iter().collect();
/// let out = subtract(include, &exclude).unwrap();
/// assert_eq!(out.iter().map(|n| n.to_string()).collect::<Vec<_>>(), vec!["10.0.0.0/25"]);
/// ```
pub fn subtract(include: NetworkSet, exclude: &NetworkSet) -> Result<NetworkSet> {
    subtract_in_order(include, exclude, WorkOrder::default())
}

/// [`subtract`] with an explicit work-list discipline.
pub fn subtract_in_order(
    include: NetworkSet,
    exclude: &NetworkSet,
    order: WorkOrder,
) -> Result<NetworkSet> {
    log::info!(
        "Subtracting {} exclude networks from {} include networks",
        exclude.len(),
        include.len()
    );
    let mut work: VecDeque<_> = include.into_iter().collect();
    let mut output = NetworkSet::new();
    let mut splits = 0usize;

    loop {
        let next = match order {
            WorkOrder::Stack => work.pop_back(),
            WorkOrder::Queue => work.pop_front(),
        };
        let Some(net) = next else {
            break;
        };
        match find_overlap(exclude, &net) {
            Some(ex) => {
                let fragments = net.exclude(&ex);
                log::debug!("{net} overlaps {ex}: {} fragments", fragments.len());
                for frag in &fragments {
                    log::trace!("  fragment {frag}");
                }
                splits += 1;
                work.extend(fragments);
            }
            None => {
                output.insert(net);
            }
        }
    }

    log::info!("{splits} splits, {} output networks", output.len());
    verify_disjoint(&output, exclude)?;
    Ok(output)
}

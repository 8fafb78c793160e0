//! Overlap detection between network sets.

use crate::error::{Error, Result};
use crate::models::{Network, NetworkSet};
use itertools::Itertools;

/// Find a member of `set` that overlaps `net`.
///
/// Ancestors of `net` are looked up by membership, descendants (and `net`
/// itself) with one range query over the ordered set.
pub fn find_overlap(set: &NetworkSet, net: &Network) -> Option<Network> {
    let ancestor = (0..net.prefix())
        .filter_map(|len| net.supernet(len))
        .find(|sup| set.contains(sup));
    if ancestor.is_some() {
        return ancestor;
    }
    // A member whose base lies inside `net` with an equal or longer prefix is
    // contained in `net`. Shorter prefixes at the same base were handled above.
    set.range(*net..=net.last()).next().copied()
}

/// Check that no member of `output` overlaps any member of `exclude`.
///
/// Walks both sorted sets merged into one sequence. A network can only be
/// contained in one that sorts before it, and of the earlier networks from
/// the other set the one reaching furthest covers it if any does, so each
/// network is compared against that single candidate.
///
/// # Returns
/// * `Err(Error::InvariantViolation)` - Naming the first offending pair
pub fn verify_disjoint(output: &NetworkSet, exclude: &NetworkSet) -> Result<()> {
    const OUTPUT: usize = 0;
    const EXCLUDE: usize = 1;
    let mut reach: [Option<Network>; 2] = [None, None];

    let merged = output
        .iter()
        .map(|n| (*n, OUTPUT))
        .merge_by(exclude.iter().map(|n| (*n, EXCLUDE)), |a, b| a.0 <= b.0);
    for (net, side) in merged {
        if let Some(other) = reach[1 - side].filter(|o| o.overlaps(&net)) {
            let (output, exclude) = if side == OUTPUT {
                (net, other)
            } else {
                (other, net)
            };
            log::error!("Output network {output} overlaps exclude network {exclude}");
            return Err(Error::InvariantViolation { output, exclude });
        }
        let further = match reach[side] {
            Some(r) => r.family() != net.family() || net.hi_bits() > r.hi_bits(),
            None => true,
        };
        if further {
            reach[side] = Some(net);
        }
    }
    Ok(())
}

/// Find two members of `set` that overlap each other.
///
/// In sorted order a network is followed directly by anything it contains, so
/// only neighbours need comparing.
pub fn find_overlapping_pair(set: &NetworkSet) -> Option<(Network, Network)> {
    set.iter()
        .tuple_windows()
        .find(|(a, b)| a.overlaps(b))
        .map(|(a, b)| (*a, *b))
}

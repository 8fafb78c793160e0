//! Ordered, de-duplicated collection of [`Network`]s.

use super::network::Network;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::ops::RangeBounds;

/// A set of networks kept in [`Network`] order (family, base address,
/// prefix length).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkSet {
    nets: BTreeSet<Network>,
}

impl NetworkSet {
    pub fn new() -> NetworkSet {
        NetworkSet::default()
    }

    /// Returns false if `net` was already present.
    pub fn insert(&mut self, net: Network) -> bool {
        self.nets.insert(net)
    }

    pub fn contains(&self, net: &Network) -> bool {
        self.nets.contains(net)
    }

    pub fn remove(&mut self, net: &Network) -> bool {
        self.nets.remove(net)
    }

    /// Remove and return some element, `None` when empty.
    pub fn pop(&mut self) -> Option<Network> {
        self.nets.pop_first()
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Network> {
        self.nets.iter()
    }

    pub fn range<R: RangeBounds<Network>>(&self, range: R) -> btree_set::Range<'_, Network> {
        self.nets.range(range)
    }

    /// Total addresses covered, counting overlapping members once per member.
    /// `None` if the sum does not fit in `u128`.
    pub fn num_addresses(&self) -> Option<u128> {
        self.nets
            .iter()
            .try_fold(0u128, |acc, net| acc.checked_add(net.num_addresses()?))
    }
}

impl FromIterator<Network> for NetworkSet {
    fn from_iter<I: IntoIterator<Item = Network>>(iter: I) -> NetworkSet {
        NetworkSet {
            nets: iter.into_iter().collect(),
        }
    }
}

impl Extend<Network> for NetworkSet {
    fn extend<I: IntoIterator<Item = Network>>(&mut self, iter: I) {
        self.nets.extend(iter)
    }
}

impl IntoIterator for NetworkSet {
    type Item = Network;
    type IntoIter = btree_set::IntoIter<Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.nets.into_iter()
    }
}

impl<'a> IntoIterator for &'a NetworkSet {
    type Item = &'a Network;
    type IntoIter = btree_set::Iter<'a, Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.nets.iter()
    }
}

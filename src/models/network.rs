//! IPv4/IPv6 network value type with strict CIDR parsing.
//!
//! Provides [`Network`], a normalized `address/prefix` block, along with the
//! bit helpers used for containment and address exclusion.

use crate::error::NetworkError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length of an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length of an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Address family of a [`Network`].
///
/// V4 sorts before V6.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of the address in bits.
    pub fn max_length(self) -> u8 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }
}

/// Mask with the low `host_bits` bits set.
pub fn host_mask(host_bits: u8) -> u128 {
    if host_bits >= MAX_LENGTH_V6 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// Network part of a `family` address for the given prefix length.
pub fn cut_addr(family: Family, addr: u128, len: u8) -> u128 {
    addr & !host_mask(family.max_length() - len)
}

/// A CIDR block: family, base address with host bits cleared, prefix length.
///
/// Field order drives the derived ordering: family, then base address, then
/// prefix length ascending.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    family: Family,
    addr: u128,
    prefix: u8,
}

impl Network {
    /// Build a network from its parts. Fails if `prefix` is too long for the
    /// family or `addr` has host bits set.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Network, NetworkError> {
        let (family, bits) = match addr {
            IpAddr::V4(a) => (Family::V4, u32::from(a) as u128),
            IpAddr::V6(a) => (Family::V6, u128::from(a)),
        };
        let max = family.max_length();
        if prefix > max {
            return Err(NetworkError::PrefixTooLong {
                text: format!("{addr}/{prefix}"),
                max,
            });
        }
        if cut_addr(family, bits, prefix) != bits {
            return Err(NetworkError::HostBitsSet(format!("{addr}/{prefix}")));
        }
        Ok(Network {
            family,
            addr: bits,
            prefix,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Base (lowest) address as an integer.
    pub fn lo_bits(&self) -> u128 {
        self.addr
    }

    /// Highest address as an integer.
    pub fn hi_bits(&self) -> u128 {
        self.addr | host_mask(self.host_bits())
    }

    /// Base (lowest) address of the block.
    pub fn lo(&self) -> IpAddr {
        self.to_ip(self.addr)
    }

    /// Highest address of the block (broadcast address for IPv4).
    pub fn hi(&self) -> IpAddr {
        self.to_ip(self.hi_bits())
    }

    /// Number of addresses in the block, `None` for `::/0`.
    pub fn num_addresses(&self) -> Option<u128> {
        1u128.checked_shl(self.host_bits() as u32)
    }

    fn host_bits(&self) -> u8 {
        self.family.max_length() - self.prefix
    }

    fn to_ip(&self, bits: u128) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    /// True if every address of `other` is inside `self`.
    pub fn contains(&self, other: &Network) -> bool {
        self.family == other.family
            && self.prefix <= other.prefix
            && cut_addr(self.family, other.addr, self.prefix) == self.addr
    }

    /// CIDR blocks intersect only by containment, so overlap is containment
    /// in either direction.
    pub fn overlaps(&self, other: &Network) -> bool {
        self.contains(other) || other.contains(self)
    }

    /// The two halves of this block, `None` for a single address.
    pub fn subnets(&self) -> Option<(Network, Network)> {
        if self.prefix >= self.family.max_length() {
            return None;
        }
        let prefix = self.prefix + 1;
        let lower = Network {
            family: self.family,
            addr: self.addr,
            prefix,
        };
        let upper = Network {
            family: self.family,
            addr: self.addr | (1u128 << (self.host_bits() - 1)),
            prefix,
        };
        Some((lower, upper))
    }

    /// The highest address of the block as a single-address network.
    pub fn last(&self) -> Network {
        Network {
            family: self.family,
            addr: self.hi_bits(),
            prefix: self.family.max_length(),
        }
    }

    /// The block of length `len` containing this one, `None` if `len` is
    /// longer than this prefix.
    pub fn supernet(&self, len: u8) -> Option<Network> {
        if len > self.prefix {
            return None;
        }
        Some(Network {
            family: self.family,
            addr: cut_addr(self.family, self.addr, len),
            prefix: len,
        })
    }

    /// Address exclusion: the minimal set of blocks covering `self` minus
    /// `other`, largest block first.
    ///
    /// # Examples
    /// ```
    /// use ip_exclude::models::Network;
    /// let net: Network = "10.0.0.0/24".parse().unwrap();
    /// let hole: Network = "10.0.0.128/25".parse().unwrap();
    /// assert_eq!(net.exclude(&hole), vec!["10.0.0.0/25".parse::<Network>().unwrap()]);
    /// ```
    pub fn exclude(&self, other: &Network) -> Vec<Network> {
        if !self.overlaps(other) {
            return vec![*self];
        }
        let mut fragments = Vec::new();
        let mut current = *self;
        // `current` strictly contains `other` on every iteration, so it always
        // has children.
        while current != *other && current.prefix < other.prefix {
            let Some((lower, upper)) = current.subnets() else {
                break;
            };
            if lower.contains(other) {
                fragments.push(upper);
                current = lower;
            } else {
                fragments.push(lower);
                current = upper;
            }
        }
        fragments
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    /// Parse strict `address/prefix` text (e.g. "10.0.0.0/24").
    fn from_str(addr_cidr: &str) -> Result<Network, NetworkError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| NetworkError::MissingPrefix(addr_cidr.to_string()))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| NetworkError::InvalidAddress(addr_cidr.to_string()))?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetworkError::InvalidPrefix(addr_cidr.to_string()));
        }
        let max = match addr {
            IpAddr::V4(_) => MAX_LENGTH_V4,
            IpAddr::V6(_) => MAX_LENGTH_V6,
        };
        // digits only, so the parse can only fail on overflow
        let prefix: u8 = prefix.parse().map_err(|_| NetworkError::PrefixTooLong {
            text: addr_cidr.to_string(),
            max,
        })?;
        Network::new(addr, prefix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.lo(), self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}

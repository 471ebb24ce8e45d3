//! Random network identifiers.
//!
//! Fixed prefix and flag bits are overlaid on random bytes taken from
//! little-endian entropy draws.

use super::kind::{MulticastScope, UnicastType};
use crate::entropy::EntropySource;
use std::net::{Ipv4Addr, Ipv6Addr};

/// U/L bit: set for locally administered addresses.
const MAC_LOCAL_BIT: u8 = 0x02;
/// I/G bit: set for group (multicast) addresses.
const MAC_MULTICAST_BIT: u8 = 0x01;

/// A 48-bit IEEE 802 MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// Creates an address from its six octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the six octets.
    #[inline]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Returns true if the U/L bit is set.
    #[inline]
    pub fn is_local(&self) -> bool {
        self.0[0] & MAC_LOCAL_BIT != 0
    }

    /// Returns true if the I/G bit is set.
    #[inline]
    pub fn is_multicast(&self) -> bool {
        self.0[0] & MAC_MULTICAST_BIT != 0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl std::fmt::Display for MacAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Draws a random IPv4 address from the low four bytes of one draw.
pub fn ipv4_addr(source: &(impl EntropySource + ?Sized)) -> Ipv4Addr {
    let x = source.next_u64().to_le_bytes();
    Ipv4Addr::new(x[0], x[1], x[2], x[3])
}

/// Draws a random IPv6 address from two consecutive draws.
pub fn ipv6_addr(source: &(impl EntropySource + ?Sized)) -> Ipv6Addr {
    let mut octets = [0u8; 16];
    octets[..8].copy_from_slice(&source.next_u64().to_le_bytes());
    octets[8..].copy_from_slice(&source.next_u64().to_le_bytes());
    Ipv6Addr::from(octets)
}

/// Draws a random MAC address with the U/L and I/G bits forced.
pub fn mac_addr(source: &(impl EntropySource + ?Sized), local: bool, multicast: bool) -> MacAddr {
    let x = source.next_u64().to_le_bytes();
    let mut octets = [x[0], x[1], x[2], x[3], x[4], x[5]];

    if local {
        octets[0] |= MAC_LOCAL_BIT;
    } else {
        octets[0] &= !MAC_LOCAL_BIT;
    }
    if multicast {
        octets[0] |= MAC_MULTICAST_BIT;
    } else {
        octets[0] &= !MAC_MULTICAST_BIT;
    }

    MacAddr(octets)
}

/// Draws a random IPv6 unicast address of the given class.
///
/// The upper eight bytes hold only the class prefix; the lower eight are
/// one draw. For global addresses the second byte is the byte sum of draw
/// bytes 1 to 4, which is a cheap extra scramble and not a checksum.
pub fn ipv6_unicast_addr(source: &(impl EntropySource + ?Sized), kind: UnicastType) -> Ipv6Addr {
    let hash = source.next_u64().to_le_bytes();
    let mut octets = [0u8; 16];
    octets[8..].copy_from_slice(&hash);

    match kind.prefix() {
        Some(prefix) => octets[..2].copy_from_slice(&prefix),
        None => {
            octets[0] = (octets[0] & 0x1F) | 0x20;
            octets[1] = hash[1..5].iter().fold(0u8, |sum, b| sum.wrapping_add(*b));
        }
    }

    Ipv6Addr::from(octets)
}

/// Draws a random IPv6 multicast address with the given scope.
pub fn ipv6_multicast_addr(
    source: &(impl EntropySource + ?Sized),
    scope: MulticastScope,
) -> Ipv6Addr {
    let mut octets = [0u8; 16];
    octets[0] = 0xFF;
    octets[1] = (octets[1] & 0xF0) | scope.nibble();
    octets[8..].copy_from_slice(&source.next_u64().to_le_bytes());
    Ipv6Addr::from(octets)
}

//! Network identifier derivation.
//!
//! Builds IPv4, IPv6 and MAC addresses from entropy draws, including
//! RFC 3513 scoped IPv6 unicast and multicast addresses. Address classes
//! are closed enums; raw values go through `TryFrom<u8>`, which rejects
//! anything unknown instead of producing an unscoped address.

mod address;
mod kind;

pub use address::{
    ipv4_addr, ipv6_addr, ipv6_multicast_addr, ipv6_unicast_addr, mac_addr, MacAddr,
};
pub use kind::{AddressError, MulticastScope, UnicastType};

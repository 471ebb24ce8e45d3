//! IPv6 address classes.
//!
//! See RFC 3513 §2.5 (unicast) and §2.7 (multicast scopes).

use thiserror::Error;

/// Errors converting raw enumerator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("unknown IPv6 unicast type {0}")]
    UnknownUnicastType(u8),
    #[error("unknown IPv6 multicast scope {0:#x}")]
    UnknownMulticastScope(u8),
}

/// IPv6 unicast address class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnicastType {
    /// Global unicast, `2000::/3`.
    Global = 1,
    /// Link-local, `fe80::/10`.
    LinkLocal = 2,
    /// Site-local (deprecated), `fec0::/10`.
    SiteLocal = 3,
    /// Unique local, `fd00::/8`.
    UniqueLocal = 4,
}

impl UnicastType {
    /// Private addressing, an alias of [`UnicastType::UniqueLocal`].
    pub const PRIVATE: UnicastType = UnicastType::UniqueLocal;

    /// Returns the two leading prefix bytes for this class.
    ///
    /// Global addresses only fix the top three bits of the first byte; the
    /// second byte is filled from the draw.
    pub(crate) fn prefix(self) -> Option<[u8; 2]> {
        match self {
            UnicastType::Global => None,
            UnicastType::LinkLocal => Some([0xFE, 0x80]),
            UnicastType::SiteLocal => Some([0xFE, 0xC0]),
            UnicastType::UniqueLocal => Some([0xFD, 0x00]),
        }
    }
}

impl TryFrom<u8> for UnicastType {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(UnicastType::Global),
            2 => Ok(UnicastType::LinkLocal),
            3 => Ok(UnicastType::SiteLocal),
            4 => Ok(UnicastType::UniqueLocal),
            other => Err(AddressError::UnknownUnicastType(other)),
        }
    }
}

/// IPv6 multicast scope, stored as its 4-bit scope value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MulticastScope {
    /// Loopback transmission on a single interface.
    InterfaceLocal = 0x1,
    /// Same link as the sender.
    LinkLocal = 0x2,
    /// Administratively configured.
    AdminLocal = 0x4,
    /// Single site.
    SiteLocal = 0x5,
    /// Multiple sites of one organization.
    OrgLocal = 0x8,
    /// Global.
    Global = 0xE,
}

impl MulticastScope {
    /// Returns the scope nibble.
    #[inline]
    pub fn nibble(self) -> u8 {
        self as u8 & 0x0F
    }
}

impl TryFrom<u8> for MulticastScope {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x1 => Ok(MulticastScope::InterfaceLocal),
            0x2 => Ok(MulticastScope::LinkLocal),
            0x4 => Ok(MulticastScope::AdminLocal),
            0x5 => Ok(MulticastScope::SiteLocal),
            0x8 => Ok(MulticastScope::OrgLocal),
            0xE => Ok(MulticastScope::Global),
            other => Err(AddressError::UnknownMulticastScope(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicast_round_trip_discriminants() {
        for t in [
            UnicastType::Global,
            UnicastType::LinkLocal,
            UnicastType::SiteLocal,
            UnicastType::UniqueLocal,
        ] {
            assert_eq!(UnicastType::try_from(t as u8), Ok(t));
        }
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert_eq!(
            UnicastType::try_from(0),
            Err(AddressError::UnknownUnicastType(0))
        );
        assert_eq!(
            MulticastScope::try_from(0x3),
            Err(AddressError::UnknownMulticastScope(0x3))
        );
        assert_eq!(
            MulticastScope::try_from(0xF),
            Err(AddressError::UnknownMulticastScope(0xF))
        );
    }

    #[test]
    fn test_private_alias() {
        assert_eq!(UnicastType::PRIVATE, UnicastType::UniqueLocal);
    }

    #[test]
    fn test_scope_nibbles() {
        assert_eq!(MulticastScope::Global.nibble(), 0xE);
        assert_eq!(MulticastScope::try_from(0x8).map(MulticastScope::nibble), Ok(0x8));
    }
}

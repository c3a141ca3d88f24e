use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Hardware (MAC) address of a host-only adapter
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// Construct a new MacAddr instance from the given octets
    pub fn from_octets(octets: [u8; 6]) -> MacAddr {
        MacAddr(octets)
    }
    /// Returns an array of MAC address octets
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
    /// Construct an all-zero MacAddr instance
    pub fn zero() -> MacAddr {
        MacAddr([0; 6])
    }
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

/// Represents an error which occurred whilst parsing a MAC address
#[derive(Copy, Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ParseMacAddrError {
    /// The MAC address has too many components, eg. 00:11:22:33:44:55:66
    #[error("too many components in a MAC address string")]
    TooManyComponents,
    /// The MAC address has too few components, eg. 00:11
    #[error("too few components in a MAC address string")]
    TooFewComponents,
    /// One of the components contains an invalid value, eg. 00:GG:22:33:44:55
    #[error("invalid component in a MAC address string")]
    InvalidComponent,
}

impl FromStr for MacAddr {
    type Err = ParseMacAddrError;

    fn from_str(s: &str) -> Result<MacAddr, ParseMacAddrError> {
        let mut octets = [0u8; 6];
        let mut count = 0;
        for part in s.split(':') {
            if count == 6 {
                return Err(ParseMacAddrError::TooManyComponents);
            }
            // VBoxManage always prints two hex digits per octet
            if part.is_empty() || part.len() > 2 {
                return Err(ParseMacAddrError::InvalidComponent);
            }
            octets[count] =
                u8::from_str_radix(part, 16).map_err(|_| ParseMacAddrError::InvalidComponent)?;
            count += 1;
        }
        if count < 6 {
            return Err(ParseMacAddrError::TooFewComponents);
        }
        Ok(MacAddr(octets))
    }
}

#[cfg(feature = "serde")]
impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MacAddrVisitor;
        impl<'de> de::Visitor<'de> for MacAddrVisitor {
            type Value = MacAddr;

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MacAddr, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<MacAddr, E> {
                <[u8; 6]>::try_from(v)
                    .map(MacAddr)
                    .map_err(|_| E::invalid_length(v.len(), &self))
            }

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "either a string representation of a MAC address or 6-element byte array"
                )
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(MacAddrVisitor)
        } else {
            deserializer.deserialize_bytes(MacAddrVisitor)
        }
    }
}

use std::fmt;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Netmask reported by some VirtualBox releases instead of the configured one.
///
/// Seen on Windows 10 hosts right after an adapter is created: the mask reads
/// back as `15.0.0.0` (`0f000000`) regardless of what was set.
pub const BUGGY_NETMASK: Ipv4Addr = Ipv4Addr::new(15, 0, 0, 0);

/// Returns [`true`] if `netmask` is the value emitted by the netmask misreport bug.
pub fn is_buggy_netmask(netmask: Ipv4Addr) -> bool {
    netmask == BUGGY_NETMASK
}

/// IPv4 address and netmask pair as reported for a host-only adapter.
///
/// Unlike [`Ipv4Net`] the mask is stored verbatim, so non-contiguous masks
/// (including [`BUGGY_NETMASK`]) survive parsing.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ipv4Subnet {
    /// IPv4 Address
    pub addr: Ipv4Addr,
    /// Network Mask
    pub netmask: Ipv4Addr,
}

impl Ipv4Subnet {
    pub fn new(addr: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Subnet {
        Ipv4Subnet { addr, netmask }
    }
    /// Construct from an address and a prefix length (0..=32)
    pub fn with_prefix(addr: Ipv4Addr, prefix_len: u8) -> Ipv4Subnet {
        Ipv4Subnet {
            addr,
            netmask: prefix_to_ipv4_netmask(prefix_len),
        }
    }
    /// Returns the network address (`addr & netmask`)
    pub fn network(&self) -> Ipv4Addr {
        mask_ipv4(self.addr, self.netmask)
    }
    /// Returns [`true`] if `ip` falls in the same network under this netmask
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        mask_ipv4(ip, self.netmask) == self.network()
    }
    /// Prefix length of the netmask, `None` if the mask is not contiguous
    pub fn prefix_len(&self) -> Option<u8> {
        ipnet::ipv4_mask_to_prefix(self.netmask).ok()
    }
    /// Netmask as eight lowercase hex digits, e.g. `ffffff00`
    pub fn mask_hex(&self) -> String {
        format!("{:08x}", u32::from(self.netmask))
    }
    /// Returns [`true`] if neither address nor netmask is set
    pub fn is_unspecified(&self) -> bool {
        self.addr.is_unspecified() && self.netmask.is_unspecified()
    }
    /// Returns [`true`] if the netmask is the misreported [`BUGGY_NETMASK`]
    pub fn has_buggy_netmask(&self) -> bool {
        is_buggy_netmask(self.netmask)
    }
    /// Convert to [`Ipv4Net`], `None` if the mask is not contiguous
    pub fn to_ipnet(&self) -> Option<Ipv4Net> {
        Ipv4Net::with_netmask(self.addr, self.netmask).ok()
    }
}

impl Default for Ipv4Subnet {
    fn default() -> Self {
        Ipv4Subnet::new(Ipv4Addr::UNSPECIFIED, Ipv4Addr::UNSPECIFIED)
    }
}

impl fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len() {
            Some(prefix) => write!(f, "{}/{}", self.addr, prefix),
            None => write!(f, "{}/{}", self.addr, self.netmask),
        }
    }
}

impl From<Ipv4Net> for Ipv4Subnet {
    fn from(net: Ipv4Net) -> Self {
        Ipv4Subnet::new(net.addr(), net.netmask())
    }
}

/// Apply `netmask` to `addr`
pub fn mask_ipv4(addr: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(netmask))
}

/// Parse a dotted-quad netmask such as `255.255.255.0`.
///
/// Any four-octet value is accepted; contiguity is not checked because
/// VBoxManage can report masks that are not.
pub fn parse_ipv4_mask(s: &str) -> Option<Ipv4Addr> {
    s.trim().parse::<Ipv4Addr>().ok()
}

fn prefix_to_ipv4_netmask(prefix_len: u8) -> Ipv4Addr {
    let netmask_u32: u32 = u32::MAX
        .checked_shl(32 - u32::from(prefix_len.min(32)))
        .unwrap_or(0);
    Ipv4Addr::from(netmask_u32)
}

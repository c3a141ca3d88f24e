mod matcher;
mod parser;
mod resolve;

pub use self::matcher::{find_candidates, get_host_only_network, Candidate, MatchKind};
pub use self::parser::parse_host_only_networks;
pub use self::resolve::{
    get_or_create_host_only_network, list_host_only_networks, resolve_host_only_network,
    CreateRequest, DhcpConfig, HostOnlyNetworkCreator,
};

use std::collections::HashMap;
use std::fmt;

use ipnet::Ipv6Net;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ip::Ipv4Subnet;
use crate::mac::MacAddr;

/// Host-only networks keyed by their `VBoxNetworkName`
pub type NetworkTable = HashMap<String, HostOnlyNetwork>;

/// Structure of a VirtualBox host-only network as listed by
/// `VBoxManage list hostonlyifs`
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HostOnlyNetwork {
    /// Interface name, e.g. `vboxnet0`
    pub name: String,
    /// Interface GUID
    pub guid: String,
    /// Whether the DHCP server of this network is enabled
    pub dhcp: bool,
    /// IPv4 address and netmask, verbatim from the tool
    pub ipv4: Ipv4Subnet,
    /// IPv6 address and prefix, `None` when not configured
    pub ipv6: Option<Ipv6Net>,
    /// MAC address of the host side adapter
    pub hw_addr: MacAddr,
    /// Medium type, e.g. `Ethernet`
    pub medium: String,
    /// Link status, e.g. `Up` or `Down`
    pub status: String,
    /// Fully qualified name, e.g. `HostInterfaceNetworking-vboxnet0`.
    /// Used as the key of a [`NetworkTable`].
    pub network_name: String,
}

impl HostOnlyNetwork {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}

impl fmt::Display for HostOnlyNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {} dhcp={}",
            self.name,
            self.network_name,
            self.ipv4,
            self.status,
            if self.dhcp { "enabled" } else { "disabled" }
        )
    }
}

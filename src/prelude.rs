pub use crate::error::{Error, Result};
pub use crate::ip::{Ipv4Subnet, BUGGY_NETMASK};
pub use crate::mac::MacAddr;
pub use crate::network::{
    get_or_create_host_only_network, list_host_only_networks, resolve_host_only_network,
    CreateRequest, DhcpConfig, HostOnlyNetwork, HostOnlyNetworkCreator, MatchKind, NetworkTable,
};
pub use crate::vbox::{VBoxManageCommand, VBoxManageConfig, VBoxManager};
pub use ipnet::Ipv6Net;

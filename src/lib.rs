//! Find VirtualBox host-only networks by address.
//!
//! Networks are enumerated with `VBoxManage list hostonlyifs`, parsed into a
//! [`NetworkTable`] and matched against a requested IPv4 address and netmask.
//! See [`resolve_host_only_network`] and [`get_or_create_host_only_network`].

pub mod error;
pub mod ip;
pub mod mac;
pub mod network;
pub mod prelude;
pub mod vbox;

pub use error::{Error, Result};
pub use ip::Ipv4Subnet;
pub use mac::MacAddr;
pub use network::get_or_create_host_only_network;
pub use network::list_host_only_networks;
pub use network::resolve_host_only_network;
pub use network::HostOnlyNetwork;
pub use network::NetworkTable;
pub use vbox::{VBoxManageCommand, VBoxManager};

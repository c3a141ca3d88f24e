use std::net::Ipv4Addr;

use tracing::{debug, info};

use super::{find_candidates, parse_host_only_networks, HostOnlyNetwork, NetworkTable};
use crate::error::{Error, Result};
use crate::vbox::VBoxManager;

/// DHCP server settings requested for a new host-only network
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct DhcpConfig {
    /// Address of the DHCP server on the new network
    pub server_ip: Ipv4Addr,
    /// Whether the DHCP server should be enabled
    pub enabled: bool,
}

/// Parameters handed to a [`HostOnlyNetworkCreator`] when no existing
/// network matches. They are passed through untouched.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct CreateRequest {
    /// Requested host address
    pub ip: Ipv4Addr,
    /// Requested netmask
    pub netmask: Ipv4Addr,
    /// Lower bound of the DHCP address range
    pub lower_ip: Option<Ipv4Addr>,
    /// Upper bound of the DHCP address range
    pub upper_ip: Option<Ipv4Addr>,
    /// DHCP server settings, if any
    pub dhcp: Option<DhcpConfig>,
}

/// Creates a host-only network when none matches the request
pub trait HostOnlyNetworkCreator {
    fn create(&self, vbox: &dyn VBoxManager, request: &CreateRequest) -> Result<HostOnlyNetwork>;
}

impl<F> HostOnlyNetworkCreator for F
where
    F: Fn(&dyn VBoxManager, &CreateRequest) -> Result<HostOnlyNetwork>,
{
    fn create(&self, vbox: &dyn VBoxManager, request: &CreateRequest) -> Result<HostOnlyNetwork> {
        self(vbox, request)
    }
}

/// List the host-only networks known to VirtualBox
pub fn list_host_only_networks(vbox: &dyn VBoxManager) -> Result<NetworkTable> {
    let out = vbox.vbm_out(&["list", "hostonlyifs"])?;
    parse_host_only_networks(&out)
}

/// Find the existing host-only network for `ip`/`netmask`.
///
/// Returns `Ok(None)` if there is none, and
/// [`Error::DuplicateHostOnlyNetworks`] if more than one is compatible with
/// the request.
pub fn resolve_host_only_network(
    ip: Ipv4Addr,
    netmask: Ipv4Addr,
    vbox: &dyn VBoxManager,
) -> Result<Option<HostOnlyNetwork>> {
    let nets = list_host_only_networks(vbox)?;
    let mut candidates = find_candidates(&nets, ip, netmask);

    match candidates.len() {
        0 => {
            debug!(%ip, %netmask, "no matching host-only network");
            Ok(None)
        }
        1 => {
            let candidate = candidates.remove(0);
            debug!(name = %candidate.network.name, kind = ?candidate.kind, "found host-only network");
            Ok(Some(candidate.network.clone()))
        }
        _ => Err(Error::DuplicateHostOnlyNetworks {
            ip,
            names: candidates
                .iter()
                .map(|c| c.network.network_name.clone())
                .collect(),
        }),
    }
}

/// Find the host-only network for `ip`/`netmask`, asking `creator` to make
/// one only if none exists.
pub fn get_or_create_host_only_network(
    ip: Ipv4Addr,
    netmask: Ipv4Addr,
    lower_ip: Option<Ipv4Addr>,
    upper_ip: Option<Ipv4Addr>,
    dhcp: Option<DhcpConfig>,
    vbox: &dyn VBoxManager,
    creator: &dyn HostOnlyNetworkCreator,
) -> Result<HostOnlyNetwork> {
    if let Some(net) = resolve_host_only_network(ip, netmask, vbox)? {
        return Ok(net);
    }
    let request = CreateRequest {
        ip,
        netmask,
        lower_ip,
        upper_ip,
        dhcp,
    };
    info!(%ip, %netmask, "creating a new host-only network");
    creator.create(vbox, &request)
}

use std::net::Ipv4Addr;

use tracing::debug;

use super::{HostOnlyNetwork, NetworkTable};
use crate::ip::mask_ipv4;

/// How a host-only network was found to be compatible with a request
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum MatchKind {
    /// Same netmask and same network address
    ExactMask,
    /// The network reports the misreported netmask; only the address was
    /// compared, under the requested netmask
    BuggyMask,
}

/// A host-only network compatible with the requested address and netmask
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    /// The matching network, as parsed
    pub network: &'a HostOnlyNetwork,
    /// Which comparison matched it
    pub kind: MatchKind,
}

fn match_kind(net: &HostOnlyNetwork, ip: Ipv4Addr, netmask: Ipv4Addr) -> Option<MatchKind> {
    // no IPv4 configuration reported
    if net.ipv4.is_unspecified() {
        return None;
    }
    let wanted = mask_ipv4(ip, netmask);
    if net.ipv4.netmask == netmask {
        return (net.ipv4.network() == wanted).then_some(MatchKind::ExactMask);
    }
    // The reported mask is garbage here, the configured one can't be recovered.
    if net.ipv4.has_buggy_netmask() && mask_ipv4(net.ipv4.addr, netmask) == wanted {
        return Some(MatchKind::BuggyMask);
    }
    None
}

/// Returns every host-only network in `nets` compatible with `ip`/`netmask`.
pub fn find_candidates(nets: &NetworkTable, ip: Ipv4Addr, netmask: Ipv4Addr) -> Vec<Candidate<'_>> {
    let mut candidates: Vec<Candidate> = nets
        .values()
        .filter_map(|net| {
            match_kind(net, ip, netmask).map(|kind| Candidate { network: net, kind })
        })
        .collect();
    // table order is unspecified, keep results stable for callers and logs
    candidates.sort_by(|a, b| a.network.network_name.cmp(&b.network.network_name));
    candidates
}

/// Returns a host-only network compatible with `ip`/`netmask`, if any.
///
/// Uniqueness is not checked here, see
/// [`resolve_host_only_network`](super::resolve_host_only_network).
pub fn get_host_only_network(
    nets: &NetworkTable,
    ip: Ipv4Addr,
    netmask: Ipv4Addr,
) -> Option<&HostOnlyNetwork> {
    match find_candidates(nets, ip, netmask).first() {
        Some(candidate) => {
            debug!(name = %candidate.network.name, kind = ?candidate.kind, "found host-only network");
            Some(candidate.network)
        }
        None => {
            debug!(%ip, %netmask, "no matching host-only network");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip::{Ipv4Subnet, BUGGY_NETMASK};

    const MASK_24: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

    fn table(entries: &[(&str, Ipv4Subnet)]) -> NetworkTable {
        entries
            .iter()
            .map(|(name, ipv4)| {
                let network_name = format!("HostInterfaceNetworking-{}", name);
                let net = HostOnlyNetwork {
                    name: name.to_string(),
                    ipv4: *ipv4,
                    network_name: network_name.clone(),
                    ..Default::default()
                };
                (network_name, net)
            })
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 99, 0), MASK_24))]);
        let net = get_host_only_network(&nets, Ipv4Addr::new(192, 168, 99, 0), MASK_24).unwrap();
        assert_eq!(net, &nets["HostInterfaceNetworking-vboxnet0"]);
    }

    #[test]
    fn test_host_address_in_network() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 99, 1), MASK_24))]);
        let candidates = find_candidates(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, MatchKind::ExactMask);
    }

    #[test]
    fn test_not_found() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 99, 0), MASK_24))]);
        assert!(get_host_only_network(&nets, Ipv4Addr::new(192, 168, 59, 0), MASK_24).is_none());
    }

    #[test]
    fn test_different_mask_not_found() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::with_prefix(Ipv4Addr::new(192, 168, 99, 1), 16))]);
        assert!(get_host_only_network(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24).is_none());
    }

    #[test]
    fn test_buggy_netmask() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 99, 0), BUGGY_NETMASK))]);
        let candidates = find_candidates(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, MatchKind::BuggyMask);
        // returned as reported, mask untouched
        assert_eq!(candidates[0].network.ipv4.netmask, BUGGY_NETMASK);

        let net = get_host_only_network(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24).unwrap();
        assert_eq!(net, &nets["HostInterfaceNetworking-vboxnet0"]);
    }

    #[test]
    fn test_buggy_netmask_other_network() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 56, 1), BUGGY_NETMASK))]);
        assert!(get_host_only_network(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24).is_none());
    }

    #[test]
    fn test_multiple_candidates_sorted() {
        let nets = table(&[
            ("vboxnet1", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 99, 1), MASK_24)),
            ("vboxnet0", Ipv4Subnet::new(Ipv4Addr::new(192, 168, 99, 1), BUGGY_NETMASK)),
            ("vboxnet2", Ipv4Subnet::new(Ipv4Addr::new(10, 0, 0, 1), MASK_24)),
        ]);
        let candidates = find_candidates(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24);
        let names: Vec<&str> = candidates.iter().map(|c| c.network.name.as_str()).collect();
        assert_eq!(names, ["vboxnet0", "vboxnet1"]);
    }

    #[test]
    fn test_unconfigured_network_never_matches() {
        let nets = table(&[("vboxnet0", Ipv4Subnet::default())]);
        assert!(find_candidates(&nets, Ipv4Addr::UNSPECIFIED, Ipv4Addr::UNSPECIFIED).is_empty());
        assert!(get_host_only_network(&nets, Ipv4Addr::new(192, 168, 99, 1), MASK_24).is_none());
    }
}

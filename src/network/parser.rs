use std::net::{Ipv4Addr, Ipv6Addr};

use ipnet::Ipv6Net;
use tracing::{trace, warn};

use super::{HostOnlyNetwork, NetworkTable};
use crate::error::{Error, Result};
use crate::ip::{parse_ipv4_mask, Ipv4Subnet};
use crate::mac::MacAddr;

/// Fields of the record currently being read. Address halves are kept apart
/// until the record is committed since their order in the output varies.
#[derive(Default)]
struct OpenRecord {
    net: HostOnlyNetwork,
    ipv4_addr: Option<Ipv4Addr>,
    ipv4_mask: Option<Ipv4Addr>,
    ipv6_addr: Option<Ipv6Addr>,
    ipv6_prefix: Option<u8>,
}

impl OpenRecord {
    fn new(name: &str) -> OpenRecord {
        let mut record = OpenRecord::default();
        record.net.name = name.to_owned();
        record
    }

    fn set(&mut self, label: &str, value: &str) -> Result<()> {
        match label {
            "GUID" => self.net.guid = value.to_owned(),
            "DHCP" => self.net.dhcp = value == "Enabled",
            "IPAddress" => {
                let addr = value
                    .parse::<Ipv4Addr>()
                    .map_err(|_| Error::parse(label, value))?;
                self.ipv4_addr = Some(addr);
            }
            "NetworkMask" => {
                let mask = parse_ipv4_mask(value).ok_or_else(|| Error::parse(label, value))?;
                self.ipv4_mask = Some(mask);
            }
            "IPV6Address" => {
                if !value.is_empty() {
                    let addr = value
                        .parse::<Ipv6Addr>()
                        .map_err(|_| Error::parse(label, value))?;
                    self.ipv6_addr = Some(addr);
                }
            }
            "IPV6NetworkMaskPrefixLength" => {
                if !value.is_empty() {
                    let prefix = value
                        .parse::<u8>()
                        .ok()
                        .filter(|p| *p <= 128)
                        .ok_or_else(|| Error::parse(label, value))?;
                    self.ipv6_prefix = Some(prefix);
                }
            }
            "HardwareAddress" => {
                if !value.is_empty() {
                    self.net.hw_addr = value
                        .parse::<MacAddr>()
                        .map_err(|_| Error::parse(label, value))?;
                }
            }
            "MediumType" => self.net.medium = value.to_owned(),
            "Status" => self.net.status = value.to_owned(),
            "VBoxNetworkName" => self.net.network_name = value.to_owned(),
            _ => trace!(label, "ignoring unknown label"),
        }
        Ok(())
    }

    fn finish(self) -> HostOnlyNetwork {
        let mut net = self.net;
        match (self.ipv4_addr, self.ipv4_mask) {
            (Some(addr), Some(mask)) => net.ipv4 = Ipv4Subnet::new(addr, mask),
            (None, None) => {}
            (addr, mask) => trace!(
                name = %net.name,
                ?addr,
                ?mask,
                "incomplete IPv4 configuration, leaving it unset"
            ),
        }
        if let Some(addr) = self.ipv6_addr {
            // prefix length was validated in `set`
            net.ipv6 = Ipv6Net::new(addr, self.ipv6_prefix.unwrap_or(0)).ok();
        }
        net
    }
}

fn commit(table: &mut NetworkTable, record: OpenRecord) {
    let net = record.finish();
    if net.network_name.is_empty() {
        trace!(name = %net.name, "dropping host-only network without VBoxNetworkName");
        return;
    }
    if let Some(previous) = table.insert(net.network_name.clone(), net) {
        warn!(
            network_name = %previous.network_name,
            "VBoxNetworkName listed more than once, keeping the last entry"
        );
    }
}

/// Parse the output of `VBoxManage list hostonlyifs`.
///
/// Records start at each `Name:` line. Blank lines between records are
/// optional, some VirtualBox versions leave them out.
pub fn parse_host_only_networks(output: &str) -> Result<NetworkTable> {
    let mut table = NetworkTable::new();
    let mut open: Option<OpenRecord> = None;

    for line in output.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim();
        let value = value.trim();

        if label == "Name" {
            if let Some(record) = open.take() {
                commit(&mut table, record);
            }
            open = Some(OpenRecord::new(value));
            continue;
        }

        match open.as_mut() {
            Some(record) => record.set(label, value)?,
            None => trace!(label, "ignoring line outside of a record"),
        }
    }

    if let Some(record) = open {
        commit(&mut table, record);
    }

    Ok(table)
}

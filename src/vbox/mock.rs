use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::VBoxManager;
use crate::error::{Error, Result};

pub(crate) const ONE_HOST_ONLY_NETWORK: &str = "Name:            vboxnet0
GUID:            786f6276-656e-4074-8000-0a0027000000
DHCP:            Disabled
IPAddress:       192.168.99.1
NetworkMask:     255.255.255.0
IPV6Address:
IPV6NetworkMaskPrefixLength: 0
HardwareAddress: 0a:00:27:00:00:00
MediumType:      Ethernet
Status:          Up
VBoxNetworkName: HostInterfaceNetworking-vboxnet0

";

pub(crate) const TWO_HOST_ONLY_NETWORKS: &str = "Name:            vboxnet0
GUID:            786f6276-656e-4074-8000-0a0027000000
DHCP:            Disabled
IPAddress:       192.168.99.1
NetworkMask:     255.255.255.0
IPV6Address:
IPV6NetworkMaskPrefixLength: 0
HardwareAddress: 0a:00:27:00:00:00
MediumType:      Ethernet
Status:          Up
VBoxNetworkName: HostInterfaceNetworking-vboxnet0

Name:            vboxnet1
GUID:            786f6276-656e-4174-8000-0a0027000001
DHCP:            Disabled
IPAddress:       192.168.99.1
NetworkMask:     255.255.255.0
IPV6Address:
IPV6NetworkMaskPrefixLength: 0
HardwareAddress: 0a:00:27:00:00:01
MediumType:      Ethernet
Status:          Up
VBoxNetworkName: HostInterfaceNetworking-vboxnet1

";

/// Answers a single expected command line with canned output
pub(crate) struct MockVBoxManager {
    args: &'static str,
    stdout: &'static str,
    calls: AtomicUsize,
}

impl MockVBoxManager {
    pub(crate) fn new(args: &'static str, stdout: &'static str) -> MockVBoxManager {
        MockVBoxManager {
            args,
            stdout,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VBoxManager for MockVBoxManager {
    fn vbm_out(&self, args: &[&str]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if args.join(" ") == self.args {
            Ok(self.stdout.to_owned())
        } else {
            Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unexpected arguments: {:?}", args),
            )))
        }
    }
}

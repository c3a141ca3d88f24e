use std::io;
use std::net::Ipv4Addr;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while enumerating or resolving host-only networks
#[derive(Error, Debug)]
pub enum Error {
    /// A value in the `VBoxManage` output could not be parsed.
    #[error("failed to parse {label}: {value:?}")]
    Parse { label: String, value: String },

    /// More than one host-only network is compatible with the requested subnet.
    #[error("VirtualBox is configured with multiple host-only networks matching {ip} ({}), please remove all but one", .names.join(", "))]
    DuplicateHostOnlyNetworks { ip: Ipv4Addr, names: Vec<String> },

    /// The `VBoxManage` binary could not be started.
    #[error("VBoxManage not found at {0:?}, make sure VirtualBox is installed")]
    ToolNotFound(String),

    /// `VBoxManage` ran but exited unsuccessfully.
    #[error("VBoxManage {} failed ({status}): {stderr}", .args.join(" "))]
    Command {
        args: Vec<String>,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn parse(label: &str, value: &str) -> Error {
        Error::Parse {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Returns `true` if this error reports ambiguous host-only configuration.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateHostOnlyNetworks { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = Error::parse("IPAddress", "192.168.99");
        assert_eq!(err.to_string(), "failed to parse IPAddress: \"192.168.99\"");
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_duplicate_error_message() {
        let err = Error::DuplicateHostOnlyNetworks {
            ip: Ipv4Addr::new(192, 168, 99, 1),
            names: vec![
                "HostInterfaceNetworking-vboxnet0".to_owned(),
                "HostInterfaceNetworking-vboxnet1".to_owned(),
            ],
        };
        assert!(err.is_duplicate());
        let msg = err.to_string();
        assert!(msg.contains("192.168.99.1"));
        assert!(msg.contains("HostInterfaceNetworking-vboxnet0, HostInterfaceNetworking-vboxnet1"));
    }
}

// Resolve the host-only network for an address, e.g.
// `cargo run --example resolve_network -- 192.168.99.1 255.255.255.0`
use std::net::Ipv4Addr;

use hostonlynet::ip::parse_ipv4_mask;
use hostonlynet::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let ip: Ipv4Addr = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Ipv4Addr::new(192, 168, 99, 1));
    let netmask = args
        .next()
        .and_then(|s| parse_ipv4_mask(&s))
        .unwrap_or(Ipv4Addr::new(255, 255, 255, 0));

    let vbox = VBoxManageCommand::default();
    match resolve_host_only_network(ip, netmask, &vbox) {
        Ok(Some(net)) => println!("{}", net),
        Ok(None) => println!("No host-only network for {}/{}", ip, netmask),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

use hostonlynet::prelude::*;

fn main() {
    let vbox = VBoxManageCommand::new(VBoxManageConfig::from_env());
    let nets = match list_host_only_networks(&vbox) {
        Ok(nets) => nets,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut names: Vec<&String> = nets.keys().collect();
    names.sort();
    for name in names {
        let net = &nets[name];
        println!("Host-only network");
        println!("\tName: {}", net.name);
        println!("\tNetwork name: {}", net.network_name);
        println!("\tGUID: {}", net.guid);
        println!("\tIPv4: {} (mask {})", net.ipv4, net.ipv4.mask_hex());
        if let Some(ipv6) = net.ipv6 {
            println!("\tIPv6: {}", ipv6);
        }
        println!("\tMAC: {}", net.hw_addr);
        println!("\tMedium: {}", net.medium);
        println!("\tStatus: {}", net.status);
        println!("\tDHCP: {}", net.dhcp);
        println!();
    }
}

//! Address helpers used for record inspection.

use std::net::Ipv4Addr;

/// Check if a string is a valid dotted-decimal IPv4 address
pub fn is_valid_ipv4(ip: &str) -> bool {
    ip.parse::<Ipv4Addr>().is_ok()
}

/// Check if a string is six colon-separated two-digit hex octets
pub fn is_valid_mac(mac: &str) -> bool {
    let octets: Vec<&str> = mac.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Check if `ip` lies in the network `net/prefix`. Returns `None` when either
/// address does not parse or the prefix is outside 0..=32.
pub fn in_network(ip: &str, net: &str, prefix: i64) -> Option<bool> {
    let prefix = u32::try_from(prefix).ok().filter(|p| *p <= 32)?;
    let ip: Ipv4Addr = ip.parse().ok()?;
    let net: Ipv4Addr = net.parse().ok()?;
    let mask = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
    Some(u32::from(ip) & mask == u32::from(net) & mask)
}

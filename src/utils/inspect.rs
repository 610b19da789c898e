//! Advisory inspection of loaded records.
//!
//! Hints only: nothing here rejects or rewrites a record. The CLI logs the
//! returned messages at warn level and writes the data unchanged.

use super::ip_utils::{in_network, is_valid_ipv4, is_valid_mac};
use crate::dataset::Dataset;
use crate::records::{HostRecord, PoolRecord};
use std::net::Ipv4Addr;

/// Format hints for a pool record
pub fn inspect_pool(pool: &PoolRecord) -> Vec<String> {
    let mut hints = Vec::new();

    for (field, value) in [
        ("start_address", &pool.start_address),
        ("end_address", &pool.end_address),
        ("net_address", &pool.net_address),
        ("gateway", &pool.gateway),
    ] {
        if !is_valid_ipv4(value) {
            hints.push(format!(
                "pool '{}': {} '{}' is not an IPv4 address",
                pool.name, field, value
            ));
        }
    }

    if !(0..=32).contains(&pool.netmask) {
        hints.push(format!(
            "pool '{}': netmask {} is not between 0 and 32",
            pool.name, pool.netmask
        ));
    }

    if let (Ok(start), Ok(end)) = (
        pool.start_address.parse::<Ipv4Addr>(),
        pool.end_address.parse::<Ipv4Addr>(),
    ) {
        if start > end {
            hints.push(format!("pool '{}': start {} is after end {}", pool.name, start, end));
        }
    }

    for (field, value) in [
        ("start_address", &pool.start_address),
        ("end_address", &pool.end_address),
    ] {
        if in_network(value, &pool.net_address, pool.netmask) == Some(false) {
            hints.push(format!(
                "pool '{}': {} {} is outside {}/{}",
                pool.name, field, value, pool.net_address, pool.netmask
            ));
        }
    }

    hints
}

/// Format hints for a host record
pub fn inspect_host(host: &HostRecord) -> Vec<String> {
    let mut hints = Vec::new();
    if !is_valid_ipv4(&host.ip) {
        hints.push(format!("host '{}': ip '{}' is not an IPv4 address", host.fqdn, host.ip));
    }
    if !is_valid_mac(&host.mac) {
        hints.push(format!("host '{}': mac '{}' is not six hex octets", host.fqdn, host.mac));
    }
    hints
}

/// All hints for a dataset, pools first
pub fn inspect_dataset(dataset: &Dataset) -> Vec<String> {
    dataset
        .pools
        .iter()
        .flat_map(inspect_pool)
        .chain(dataset.hosts.iter().flat_map(inspect_host))
        .collect()
}

//! DHCP address pool records.

use serde::{Deserialize, Serialize};

use super::FormRecord;

/// A network address range with its netmask and gateway.
///
/// Addresses are kept as text and are not parsed; `netmask` is expected to
/// be a prefix length between 0 and 32 but any value is carried through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRecord {
    pub name: String,
    pub start_address: String,
    pub end_address: String,
    pub netmask: i64,
    pub net_address: String,
    pub gateway: String,
}

impl FormRecord for PoolRecord {
    const KIND: &'static str = "pool";
    const HEADER: &'static [&'static str] = &[
        "name",
        "start_address",
        "end_address",
        "netmask",
        "net_address",
        "gateway",
    ];
}

impl PoolRecord {
    pub fn new(
        name: &str,
        start_address: &str,
        end_address: &str,
        netmask: i64,
        net_address: &str,
        gateway: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            start_address: start_address.to_string(),
            end_address: end_address.to_string(),
            netmask,
            net_address: net_address.to_string(),
            gateway: gateway.to_string(),
        }
    }
}

/// The built-in pool table.
///
/// Values are reproduced as-is, including net addresses that do not match
/// their ranges (Pool2, Pool3, Pool4).
pub fn builtin_pools() -> Vec<PoolRecord> {
    vec![
        PoolRecord::new(
            "Pool1",
            "192.168.1.10",
            "192.168.1.50",
            24,
            "192.168.1.0",
            "192.168.1.1",
        ),
        PoolRecord::new("Pool2", "10.0.0.10", "10.0.0.50", 24, "10.0.0.1", "10.0.0.1"),
        PoolRecord::new("Pool3", "172.16.0.10", "172.16.0.50", 16, "10.0.0.1", "172.16.0.1"),
        PoolRecord::new(
            "Pool4",
            "192.168.100.10",
            "192.168.100.50",
            24,
            "192.168.1.0",
            "192.168.100.1",
        ),
    ]
}

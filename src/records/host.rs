//! Host records: hostname to IP to MAC mappings.

use serde::{Deserialize, Serialize};

use super::FormRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    pub fqdn: String,
    pub ip: String,
    pub mac: String,
}

impl FormRecord for HostRecord {
    const KIND: &'static str = "host";
    const HEADER: &'static [&'static str] = &["fqdn", "ip", "mac"];
}

impl HostRecord {
    pub fn new(fqdn: &str, ip: &str, mac: &str) -> Self {
        Self {
            fqdn: fqdn.to_string(),
            ip: ip.to_string(),
            mac: mac.to_string(),
        }
    }
}

/// The built-in host table
pub fn builtin_hosts() -> Vec<HostRecord> {
    vec![
        HostRecord::new("machine1.domain.ch", "192.168.1.10", "80:3f:5d:00:0c:65"),
        HostRecord::new("hodor1.domain.ch", "192.168.1.13", "16:34:c3:14:11:90"),
        HostRecord::new("chasperli1.domain.ch", "192.168.1.14", "76:34:c3:13:11:90"),
        HostRecord::new("sennehund24.domain.ch", "192.168.1.15", "80:3f:5d:00:14:65"),
    ]
}

//! Record shapes written to the form data files.
//!
//! Both record types are flat rows of scalar fields. The declaration order
//! of each struct's fields is the column order of its CSV file.

pub mod host;
pub mod pool;

// Re-export commonly used types
pub use host::{builtin_hosts, HostRecord};
pub use pool::{builtin_pools, PoolRecord};

use serde::Serialize;

/// A row type that can be written as one CSV file.
///
/// `HEADER` must list the struct's serialized fields in declaration order.
pub trait FormRecord: Serialize {
    /// Short label used in log messages
    const KIND: &'static str;
    const HEADER: &'static [&'static str];
}

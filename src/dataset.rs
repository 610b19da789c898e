//! The pair of record lists that make up one run.
//!
//! A dataset is either the built-in tables or a YAML data file of the form:
//!
//! ```yaml
//! pools:
//!   - name: "Lab"
//!     start_address: "10.1.0.10"
//!     end_address: "10.1.0.200"
//!     netmask: 24
//!     net_address: "10.1.0.0"
//!     gateway: "10.1.0.1"
//! hosts:
//!   - fqdn: "lab1.example.org"
//!     ip: "10.1.0.11"
//!     mac: "52:54:00:12:34:56"
//! ```
//!
//! Either list may be omitted, in which case it is empty.

use crate::records::{builtin_hosts, builtin_pools, HostRecord, PoolRecord};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur while loading a data file
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Cannot read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub pools: Vec<PoolRecord>,
    #[serde(default)]
    pub hosts: Vec<HostRecord>,
}

impl Dataset {
    /// The hard-coded sample records
    pub fn builtin() -> Self {
        Self {
            pools: builtin_pools(),
            hosts: builtin_hosts(),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document is a valid, empty dataset
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load records from a YAML data file. Records are taken as written.
    pub fn from_yaml_file(path: &Path) -> Result<Self, DatasetError> {
        info!("Loading records from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_yaml_str(&content).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded {} pool record(s) and {} host record(s)",
            dataset.pools.len(),
            dataset.hosts.len()
        );
        Ok(dataset)
    }
}

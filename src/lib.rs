//! # Formseed - seed CSV form data for DHCP pool and host records
//!
//! Formseed writes two flat CSV files holding sample records for a DHCP
//! provisioning server:
//!
//! - `pool_form_data.csv`: `name,start_address,end_address,netmask,net_address,gateway`
//! - `hosts_form_data.csv`: `fqdn,ip,mac`
//!
//! By default the built-in sample records are written; a YAML data file can
//! replace them. Values are written exactly as given. Addresses are text
//! and are never validated or normalised.
//!
//! ## Architecture
//!
//! - `records`: record shapes and the built-in tables
//! - `dataset`: the pool and host lists of one run, built-in or from YAML
//! - `writer`: CSV emission
//! - `orchestrator`: writes the selected files into an output directory
//! - `utils`: address helpers and advisory record inspection
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use formseed::dataset::Dataset;
//! use formseed::orchestrator::{generate, Selection};
//! use std::path::Path;
//!
//! let generated = generate(&Dataset::builtin(), Path::new("."), Selection::All)?;
//! assert_eq!(generated.files().count(), 2);
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! File operations return `color_eyre::Result` with the affected path as
//! context. Loading a data file fails with [`dataset::DatasetError`].

pub mod dataset;
pub mod orchestrator;
pub mod records;
pub mod utils;
pub mod writer;

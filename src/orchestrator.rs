//! High-level orchestration of form data generation.
//!
//! Runs the two emit actions in order: the pool file first, then the hosts
//! file. Each file is completely written and closed before the next is
//! opened.

use crate::dataset::Dataset;
use crate::writer::{write_csv_file, write_records};
use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the pool form data
pub const POOL_FILE_NAME: &str = "pool_form_data.csv";

/// File name of the host form data
pub const HOST_FILE_NAME: &str = "hosts_form_data.csv";

/// Which of the two files a run emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    #[default]
    All,
    Pools,
    Hosts,
}

impl Selection {
    pub fn includes_pools(self) -> bool {
        matches!(self, Selection::All | Selection::Pools)
    }

    pub fn includes_hosts(self) -> bool {
        matches!(self, Selection::All | Selection::Hosts)
    }
}

/// A file written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Result of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub pools: Option<GeneratedFile>,
    pub hosts: Option<GeneratedFile>,
}

impl GeneratedFiles {
    /// Written files, pool file first
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.pools.iter().chain(self.hosts.iter())
    }
}

/// Write the selected form data files into `output_dir`.
///
/// The directory is created if missing. Existing files are overwritten, so
/// repeated runs over the same dataset produce identical files.
pub fn generate(
    dataset: &Dataset,
    output_dir: &Path,
    selection: Selection,
) -> Result<GeneratedFiles> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let mut generated = GeneratedFiles::default();

    if selection.includes_pools() {
        let path = output_dir.join(POOL_FILE_NAME);
        let rows = write_csv_file(&path, &dataset.pools)?;
        generated.pools = Some(GeneratedFile { path, rows });
    }

    if selection.includes_hosts() {
        let path = output_dir.join(HOST_FILE_NAME);
        let rows = write_csv_file(&path, &dataset.hosts)?;
        generated.hosts = Some(GeneratedFile { path, rows });
    }

    info!("Generated {} file(s) in {:?}", generated.files().count(), output_dir);
    Ok(generated)
}

/// Write the selected form data to a stream instead of files.
///
/// With [`Selection::All`] the pool block is written first, directly
/// followed by the host block.
pub fn render<W: Write>(dataset: &Dataset, selection: Selection, mut sink: W) -> Result<()> {
    if selection.includes_pools() {
        write_records(&mut sink, &dataset.pools)?;
    }
    if selection.includes_hosts() {
        write_records(&mut sink, &dataset.hosts)?;
    }
    Ok(())
}

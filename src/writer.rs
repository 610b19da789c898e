//! CSV emission for form records.
//!
//! Every file starts with the record type's header row, followed by one line
//! per record. Rows are terminated with `\r\n` and fields are quoted only
//! when the CSV format requires it.

use crate::records::FormRecord;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the header row and all records to `sink`.
///
/// The header is written even when `records` is empty. Returns the number
/// of data rows written.
pub fn write_records<W: Write, T: FormRecord>(sink: W, records: &[T]) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(sink);

    writer
        .write_record(T::HEADER)
        .wrap_err_with(|| format!("Failed to write {} header", T::KIND))?;

    for (index, record) in records.iter().enumerate() {
        writer
            .serialize(record)
            .wrap_err_with(|| format!("Failed to serialize {} record #{}", T::KIND, index + 1))?;
    }

    writer
        .flush()
        .wrap_err_with(|| format!("Failed to flush {} records", T::KIND))?;

    debug!("Wrote {} {} record(s)", records.len(), T::KIND);
    Ok(records.len())
}

/// Write records to a CSV file at `path`, replacing any existing file.
///
/// The file is created or truncated, written, and closed before returning.
pub fn write_csv_file<T: FormRecord>(path: &Path, records: &[T]) -> Result<usize> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create '{}'", path.display()))?;

    let rows = write_records(BufWriter::new(file), records)
        .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;

    info!("Wrote {} {} record(s) to {:?}", rows, T::KIND, path);
    Ok(rows)
}

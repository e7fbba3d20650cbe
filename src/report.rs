//! Console sample table and JSON file I/O.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;
use crate::model::Record;

pub const SAMPLE_SIZE: usize = 20;
const TITLE_WIDTH: usize = 60;
const RULE_WIDTH: usize = 80;

/// One sample row: the title cut and padded to 60 characters, then the slug.
pub fn sample_line(record: &Record) -> String {
    let title: String = record.title().chars().take(TITLE_WIDTH).collect();
    format!("{:<width$}  {}", title, record.slug(), width = TITLE_WIDTH)
}

/// Writes the sample table for the first `limit` records.
pub fn write_sample<W: Write>(out: &mut W, records: &[Record], limit: usize) -> io::Result<()> {
    let rule = "─".repeat(RULE_WIDTH);
    writeln!(out, "Sample (first {}):", limit)?;
    writeln!(out, "{}", rule)?;
    for record in records.iter().take(limit) {
        writeln!(out, "{}", sample_line(record))?;
    }
    writeln!(out, "{}", rule)
}

pub fn print_sample(records: &[Record], limit: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sample(&mut out, records, limit)
}

/// Serializes `value` as two-space indented JSON, replacing `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Reads a JSON array of records, as written by `list-charts`.
pub fn read_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

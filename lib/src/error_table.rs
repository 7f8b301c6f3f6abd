use anyhow::{anyhow, bail, Context};
use serde::{Serialize};
use std::io::{Read, Write};
use std::str::FromStr;

/// Column positions holding the vector and integral errors of the PI estimation results.
pub const PI_COLUMNS : [usize; 2] = [2, 4];
/// Column positions holding the rectangle, trapezoid and Simpson errors of a comparison file.
pub const COMPARISON_COLUMNS : [usize; 3] = [1, 2, 3];

/// Subdivision counts paired index-for-index with one or more error series.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ErrorTable {
    pub samples : Vec<u64>,
    pub series : Vec<Vec<f64>>
}

impl ErrorTable {
    pub fn with_series_count(series_count : usize) -> ErrorTable {
        ErrorTable { samples : Vec::new(), series : vec![Vec::new(); series_count] }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Errors of the three quadrature rules for one subdivision count.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct ComparisonRow {
    pub n : u64,
    pub rec : f64,
    pub trp : f64,
    pub sim : f64
}

/// Reads a semicolon separated table, skipping its header row. Field 0 of every row is the
/// subdivision count, `columns` select the error series in the order they are returned.
pub fn read_error_table<R : Read>(reader : R, columns : &[usize]) -> anyhow::Result<ErrorTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();
    match records.next() {
        Some(header) => { header.context("Could not read header row")?; },
        None => bail!("Missing header row")
    }

    let mut table = ErrorTable::with_series_count(columns.len());
    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        table.samples.push(parse_field(&record, 0, line)?);
        for (values, &column) in table.series.iter_mut().zip(columns) {
            values.push(parse_field(&record, column, line)?);
        }
    }

    Ok(table)
}

pub fn write_comparison_rows<W : Write>(writer : W, rows : &[ComparisonRow]) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

fn parse_field<T>(record : &csv::StringRecord, column : usize, line : u64) -> anyhow::Result<T>
    where T : FromStr, T::Err : std::error::Error + Send + Sync + 'static {
    let field = record.get(column).ok_or_else(|| anyhow!(
        "Line {} has {} fields, column {} is required", line, record.len(), column))?;

    field.parse::<T>()
        .with_context(|| format!("Line {}, column {}: cannot parse '{}'", line, column, field))
}

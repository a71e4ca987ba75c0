//! Reading and writing the delimited files the converters work on.
//!
//! Files are read completely before anything is written, so a failed run
//! never leaves a half-written output behind.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::convert::{self, Coordinate, RecordConversion, RecordSchema, Table};
use crate::err::ConvertError;
use crate::parser::format_decimal;
use crate::report::Reporter;

const PAIR_HEADER: [&str; 2] = ["Latitude", "Longitude"];

fn open(path: &Path) -> Result<File, ConvertError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::NotFound(path.to_owned()),
        _ => ConvertError::Io(e),
    })
}

fn to_strings(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_owned).collect()
}

/// Read `(lat, lng)` tokens from the first two columns of a delimited file.
///
/// The header row is skipped. Rows may have any number of columns; those with
/// fewer than two are ignored.
pub fn read_pairs<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
) -> Result<Vec<(String, String)>, ConvertError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(open(path.as_ref())?);

    let mut pairs = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let (Some(lat), Some(lng)) = (record.get(0), record.get(1)) {
            pairs.push((lat.trim().to_owned(), lng.trim().to_owned()));
        }
    }
    Ok(pairs)
}

/// Write coordinates as comma separated `Latitude,Longitude` rows.
pub fn write_pairs<P: AsRef<Path>>(path: P, coords: &[Coordinate]) -> Result<(), ConvertError> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(&PAIR_HEADER)?;
    for c in coords {
        wtr.write_record(&[format_decimal(c.lat), format_decimal(c.lng)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a comma separated file with a header row. Every row must have as
/// many fields as the header.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table, ConvertError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(open(path.as_ref())?);

    let headers = to_strings(rdr.headers()?);
    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(to_strings(&record?));
    }
    Ok(Table { headers, rows })
}

pub fn write_table<P: AsRef<Path>>(path: P, table: &Table) -> Result<(), ConvertError> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Convert a table of DMS pairs into a table of decimal pairs.
pub fn convert_pairs_file<P, Q, R>(
    input: P,
    output: Q,
    delimiter: u8,
    reporter: &mut R,
) -> Result<Vec<Coordinate>, ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: Reporter + ?Sized,
{
    let pairs = read_pairs(&input, delimiter)?;
    info!(
        "read {} rows from {}",
        pairs.len(),
        input.as_ref().display()
    );

    let coords = convert::convert_pairs(pairs, reporter);
    write_pairs(&output, &coords)?;
    info!(
        "wrote {} coordinates to {}",
        coords.len(),
        output.as_ref().display()
    );
    Ok(coords)
}

/// Convert the coordinate fields of a record table. `output` may be the same
/// path as `input`.
pub fn convert_records_file<P, Q, R>(
    input: P,
    output: Q,
    schema: &RecordSchema,
    reporter: &mut R,
) -> Result<RecordConversion, ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: Reporter + ?Sized,
{
    let table = read_table(&input)?;
    info!(
        "read {} records from {}",
        table.rows.len(),
        input.as_ref().display()
    );

    let result = convert::convert_records(table, schema, reporter)?;
    write_table(&output, &result.table)?;
    Ok(result)
}

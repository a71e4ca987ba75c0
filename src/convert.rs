//! Converters that apply the DMS parser to whole tables.
//!
//! The pair converter drops every row that does not yield a complete
//! coordinate. The record converter keeps every record and rewrites only the
//! fields it could parse, leaving the rest as they were.

use crate::err::ConvertError;
use crate::parser::{self, format_decimal};
use crate::report::{Diagnostic, Reporter};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Convert a single pair without reporting. Each side is `None` if it did
/// not parse.
pub fn convert_pair(lat: &str, lng: &str) -> (Option<f64>, Option<f64>) {
    (parser::parse(lat).ok(), parser::parse(lng).ok())
}

fn parse_reported<R: Reporter + ?Sized>(token: &str, reporter: &mut R) -> Option<f64> {
    match parser::parse(token) {
        Ok(v) => Some(v),
        Err(ref e) if e.is_silent() => None,
        Err(e) => {
            reporter.report(Diagnostic::Unparsable {
                token: token.to_owned(),
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Convert `(lat, lng)` token rows, keeping input order.
///
/// Rows with an empty side are skipped before parsing. A row is only emitted
/// if both sides parse.
pub fn convert_pairs<I, S, R>(rows: I, reporter: &mut R) -> Vec<Coordinate>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
    R: Reporter + ?Sized,
{
    rows.into_iter()
        .filter_map(|(lat, lng)| {
            let (lat, lng) = (lat.as_ref().trim(), lng.as_ref().trim());
            if lat.is_empty() || lng.is_empty() {
                return None;
            }

            // both sides are parsed so both get reported
            let lat = parse_reported(lat, reporter);
            let lng = parse_reported(lng, reporter);
            Some(Coordinate { lat: lat?, lng: lng? })
        })
        .collect()
}

/// Names of the columns the record converter works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Identifies a record in diagnostics.
    pub id_field: String,
    pub lat_field: String,
    pub lng_field: String,
}

impl Default for RecordSchema {
    fn default() -> Self {
        RecordSchema {
            id_field: "objectid".to_owned(),
            lat_field: "latitude".to_owned(),
            lng_field: "longitude".to_owned(),
        }
    }
}

/// A delimited table: header names and the rows below them, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of the first column called `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    id: usize,
    lat: usize,
    lng: usize,
}

/// Outcome of [`convert_records`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordConversion {
    /// Every input record, with converted fields replaced.
    pub table: Table,
    /// Number of fields replaced by their decimal value.
    pub converted: usize,
    /// Number of non-empty fields that did not parse.
    pub errors: usize,
    columns: Columns,
}

impl RecordConversion {
    /// `(id, lat, lng)` of the first `n` records whose latitude and
    /// longitude are both filled in.
    pub fn samples(&self, n: usize) -> Vec<(&str, &str, &str)> {
        let Columns { id, lat, lng } = self.columns;
        self.table
            .rows
            .iter()
            .take(n)
            .filter_map(|row| {
                let field = move |i: usize| row.get(i).map(String::as_str).unwrap_or("");
                if field(lat).is_empty() || field(lng).is_empty() {
                    return None;
                }
                Some((field(id), field(lat), field(lng)))
            })
            .collect()
    }
}

/// Convert the latitude and longitude fields of every record in place.
///
/// Fields that fail to parse keep their original text and are counted in
/// `errors`; records are never dropped. Fails only if the header lacks one of
/// the schema's columns.
pub fn convert_records<R>(
    mut table: Table,
    schema: &RecordSchema,
    reporter: &mut R,
) -> Result<RecordConversion, ConvertError>
where
    R: Reporter + ?Sized,
{
    let columns = {
        let column = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| ConvertError::MissingColumn(name.to_owned()))
        };
        Columns {
            id: column(&schema.id_field)?,
            lat: column(&schema.lat_field)?,
            lng: column(&schema.lng_field)?,
        }
    };

    let mut converted = 0;
    let mut errors = 0;
    let targets = [
        (columns.lat, &schema.lat_field),
        (columns.lng, &schema.lng_field),
    ];

    for row in &mut table.rows {
        for &(idx, field) in &targets {
            let raw = match row.get(idx) {
                Some(v) if !v.trim().is_empty() => v.clone(),
                _ => continue,
            };

            match parser::parse(&raw) {
                Ok(value) => {
                    row[idx] = format_decimal(value);
                    converted += 1;
                }
                Err(_) => {
                    let record_id = row.get(columns.id).cloned().unwrap_or_default();
                    reporter.report(Diagnostic::FieldNotConverted {
                        record_id,
                        field: field.clone(),
                        raw,
                    });
                    errors += 1;
                }
            }
        }
    }

    debug!(
        "converted {} fields in {} records, {} errors",
        converted,
        table.rows.len(),
        errors
    );

    Ok(RecordConversion {
        table,
        converted,
        errors,
        columns,
    })
}

//! Conversion of degrees-minutes-seconds coordinates to decimal degrees,
//! for single tokens and for whole CSV/TSV tables.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod convert;
pub mod err;
pub mod files;
pub mod parser;
pub mod report;

pub use convert::{
    convert_pair, convert_pairs, convert_records, Coordinate, RecordConversion, RecordSchema,
    Table,
};
pub use err::{ConvertError, DmsError};
pub use parser::{format_decimal, parse, Dms, Hemisphere};
pub use report::{Diagnostic, LogReporter, Reporter};

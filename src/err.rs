use std::path::PathBuf;
use std::{io, num};

quick_error! {
    /// Reasons a single DMS token could not be turned into decimal degrees.
    #[derive(Debug)]
    pub enum DmsError {
        Empty {
            description("Empty token")
            display("Token is empty")
        }
        NoMatch(token: String) {
            description("Token does not match any DMS pattern")
            display("No DMS pattern matches {:?}", token)
        }
        Degrees(err: num::ParseFloatError) {
            description("Invalid degrees")
            display("Invalid degrees: {}", err)
            cause(err)
        }
        Minutes(err: num::ParseFloatError) {
            description("Invalid minutes")
            display("Invalid minutes: {}", err)
            cause(err)
        }
        Seconds(err: num::ParseFloatError) {
            from()
            description("Invalid seconds")
            display("Invalid seconds: {}", err)
            cause(err)
        }
    }
}

impl DmsError {
    /// Empty tokens are skipped without a diagnostic.
    pub fn is_silent(&self) -> bool {
        match self {
            DmsError::Empty => true,
            _ => false,
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum ConvertError {
        NotFound(path: PathBuf) {
            description("Input file not found")
            display("Could not find {}", path.display())
        }
        Io(err: io::Error) {
            from()
            description("I/O error")
            display("Encountered I/O error: {}", err)
            cause(err)
        }
        Csv(err: csv::Error) {
            from()
            description("Malformed table")
            display("Could not process table: {}", err)
            cause(err)
        }
        MissingColumn(name: String) {
            description("Missing column")
            display("Table has no column named \"{}\"", name)
        }
    }
}

impl ConvertError {
    pub fn is_not_found(&self) -> bool {
        match self {
            ConvertError::NotFound(_) => true,
            _ => false,
        }
    }
}

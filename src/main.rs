#[macro_use]
extern crate log;

use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use dms2dec::files;
use dms2dec::{convert_pair, format_decimal, parse, ConvertError, LogReporter, RecordSchema};

const SAMPLE_ROWS: usize = 5;

const SAMPLE_PAIRS: [(&str, &str); 3] = [
    ("33°47'40''N", "89°05'27''W"),
    ("33°08'03''N", "88°51'07''W"),
    ("32°19'12.8\"N", "89°40'01.0\"W"),
];

#[derive(Debug, Parser)]
#[command(name = "dms2dec", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert the first two columns of a table into a Latitude,Longitude CSV.
    Pairs {
        input: PathBuf,
        output: PathBuf,
        /// Column separator of the input, a single character or `tab`.
        #[arg(long, default_value = "tab", value_parser = parse_delimiter)]
        delimiter: u8,
    },
    /// Convert the coordinate columns of a CSV file, keeping all other columns.
    Records {
        input: PathBuf,
        /// Defaults to overwriting the input file.
        output: Option<PathBuf>,
        #[arg(long, default_value = "objectid")]
        id_field: String,
        #[arg(long, default_value = "latitude")]
        lat_field: String,
        #[arg(long, default_value = "longitude")]
        lng_field: String,
    },
    /// Print conversions of a few known coordinates.
    Sample,
    /// Convert the given tokens.
    Parse {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("expected a single ASCII character or `tab`, got {:?}", s)),
    }
}

fn show(value: Option<f64>) -> String {
    value.map(format_decimal).unwrap_or_else(|| "-".to_owned())
}

/// Returns `false` if the command ran but could not convert everything it
/// was asked to.
fn run(command: Command) -> Result<bool, ConvertError> {
    match command {
        Command::Pairs {
            input,
            output,
            delimiter,
        } => {
            let coords = files::convert_pairs_file(&input, &output, delimiter, &mut LogReporter)?;
            println!("Converted {} coordinate pairs", coords.len());
            println!("Output saved to: {}", output.display());
            Ok(true)
        }
        Command::Records {
            input,
            output,
            id_field,
            lat_field,
            lng_field,
        } => {
            let output = output.unwrap_or_else(|| input.clone());
            let schema = RecordSchema {
                id_field,
                lat_field,
                lng_field,
            };
            println!("Input file: {}", input.display());
            println!("Output file: {}", output.display());

            let result = files::convert_records_file(&input, &output, &schema, &mut LogReporter)?;
            println!("Conversion complete!");
            println!("Successfully converted {} coordinate values", result.converted);
            println!("Errors encountered: {}", result.errors);
            println!("Output saved to: {}", output.display());

            println!();
            println!("Sample conversions (first {} rows):", SAMPLE_ROWS);
            for (id, lat, lng) in result.samples(SAMPLE_ROWS) {
                println!("{}: {}, {}", id, lat, lng);
            }
            Ok(true)
        }
        Command::Sample => {
            println!("Sample conversions for verification:");
            for &(lat, lng) in &SAMPLE_PAIRS {
                let (lat_dec, lng_dec) = convert_pair(lat, lng);
                println!("{} {} → {}, {}", lat, lng, show(lat_dec), show(lng_dec));
            }
            Ok(true)
        }
        Command::Parse { tokens } => {
            let mut all_parsed = true;
            for token in &tokens {
                match parse(token) {
                    Ok(value) => println!("{} → {}", token, format_decimal(value)),
                    Err(e) => {
                        println!("{} → {}", token, e);
                        all_parsed = false;
                    }
                }
            }
            Ok(all_parsed)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("{:?}", cli);

    match run(cli.command) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(ConvertError::NotFound(path)) => {
            eprintln!("Error: Could not find {}", path.display());
            eprintln!("Make sure you're running from the correct directory.");
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

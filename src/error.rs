use std::{num::ParseIntError, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Could not read {path:?}")]
    #[diagnostic(code(weather_report::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read the weather data")]
    #[diagnostic(code(weather_report::read))]
    Read(#[source] std::io::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Value(#[from] ValueError),
}

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Bad date: {input:?}")]
    #[diagnostic(
        code(weather_report::parse::date),
        help("dates are expected as YYYY-MM-DD")
    )]
    Date {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("Could not render date: {0}")]
    #[diagnostic(code(weather_report::parse::date_format))]
    DateFormat(#[from] time::error::Format),
    #[error("Bad temperature on line {line}: {value:?}")]
    #[diagnostic(
        code(weather_report::parse::temperature),
        help("temperatures must be whole degrees Fahrenheit")
    )]
    Temperature {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Malformed CSV")]
    #[diagnostic(code(weather_report::parse::csv))]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum ValueError {
    #[error("Cannot compute the mean of an empty sequence")]
    #[diagnostic(code(weather_report::value::empty))]
    EmptySequence,
    #[error("Not a number: {0:?}")]
    #[diagnostic(code(weather_report::value::nan))]
    NotANumber(String),
}

//! Human readable weather reports from a CSV of daily temperatures.
//!
//! ```no_run
//! use weather_report::{generate_summary, load_data_from_csv};
//!
//! let dataset = load_data_from_csv("week.csv")?;
//! print!("{}", generate_summary(&dataset)?);
//! # Ok::<(), weather_report::Error>(())
//! ```

mod convert;
mod dataset;
mod error;
mod stats;
mod summary;

pub use convert::{
    convert_date, convert_f_to_c, format_temperature, Celsius, Reading, DEGREE_SYMBOL,
};
pub use dataset::{load_data_from_csv, Dataset, WeatherRow};
pub use error::{Error, ParseError, ValueError};
pub use stats::{calculate_mean, find_max, find_min};
pub use summary::{generate_daily_summary, generate_summary, NO_DATA};

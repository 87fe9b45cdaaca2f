use std::fmt;

use time::{macros::format_description, Date};

use crate::{ParseError, ValueError};

pub const DEGREE_SYMBOL: &str = "\u{b0}C";

/// Anything that can be read as a temperature or a statistic input:
/// the numeric primitives, or a string holding a number.
pub trait Reading {
    fn reading(&self) -> Result<f64, ValueError>;
}

macro_rules! numeric_reading {
    ($($t:ty),*) => {
        $(
            impl Reading for $t {
                fn reading(&self) -> Result<f64, ValueError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

numeric_reading!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl Reading for str {
    fn reading(&self) -> Result<f64, ValueError> {
        self.trim()
            .parse()
            .map_err(|_| ValueError::NotANumber(self.to_string()))
    }
}

impl Reading for String {
    fn reading(&self) -> Result<f64, ValueError> {
        self.as_str().reading()
    }
}

impl<T: Reading + ?Sized> Reading for &T {
    fn reading(&self) -> Result<f64, ValueError> {
        (**self).reading()
    }
}

/// A temperature in degrees Celsius, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

impl Celsius {
    pub fn from_fahrenheit(temp: impl Reading) -> Result<Self, ValueError> {
        convert_f_to_c(temp).map(Self)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

pub fn format_temperature(temp: impl fmt::Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

/// Renders an ISO date like `2021-07-06` as `Tuesday 06 July 2021`.
///
/// Names are always English, whatever the host locale.
pub fn convert_date(iso_string: &str) -> Result<String, ParseError> {
    let date = Date::parse(iso_string, format_description!("[year]-[month]-[day]")).map_err(
        |source| ParseError::Date {
            input: iso_string.to_string(),
            source,
        },
    )?;
    Ok(date.format(format_description!(
        "[weekday repr:long] [day padding:zero] [month repr:long] [year]"
    ))?)
}

/// Converts Fahrenheit to Celsius, rounded to 1dp (half away from zero).
pub fn convert_f_to_c(temp_in_fahrenheit: impl Reading) -> Result<f64, ValueError> {
    let celsius = (temp_in_fahrenheit.reading()? - 32.) * 5. / 9.;
    Ok((celsius * 10.).round() / 10.)
}

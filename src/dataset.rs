use std::{io::Read, ops::Deref, path::Path, str::FromStr};

use csv::StringRecord;

use crate::{Error, ParseError};

/// One day of readings, temperatures in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRow {
    /// ISO date, kept as written in the source
    pub date: String,
    pub min_temp: i32,
    pub max_temp: i32,
}

impl WeatherRow {
    pub fn new(date: impl Into<String>, min_temp: i32, max_temp: i32) -> Self {
        Self {
            date: date.into(),
            min_temp,
            max_temp,
        }
    }

    fn from_record(line: u64, record: &StringRecord) -> Result<Self, ParseError> {
        let temperature = |value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|source| ParseError::Temperature {
                    line,
                    value: value.to_string(),
                    source,
                })
        };
        Ok(Self {
            date: record[0].to_string(),
            min_temp: temperature(&record[1])?,
            max_temp: temperature(&record[2])?,
        })
    }
}

/// Days in the order they were read. Order matters for the reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<WeatherRow>,
}

impl Dataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("Loading {:?}...", path);
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Self = contents.parse()?;
        log::info!("... loaded {} days", dataset.len());
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(Error::Read)?;
        Ok(contents.parse()?)
    }

    pub fn rows(&self) -> &[WeatherRow] {
        &self.rows
    }

    pub fn min_temps(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|row| row.min_temp)
    }

    pub fn max_temps(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|row| row.max_temp)
    }
}

impl Deref for Dataset {
    type Target = [WeatherRow];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl From<Vec<WeatherRow>> for Dataset {
    fn from(rows: Vec<WeatherRow>) -> Self {
        Self { rows }
    }
}

impl FromIterator<WeatherRow> for Dataset {
    fn from_iter<I: IntoIterator<Item = WeatherRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Dataset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(s.as_bytes());

        // The header is never checked against the expected columns
        if rdr.headers()?.is_empty() {
            log::warn!("no header line, the dataset is empty");
            return Ok(Self::default());
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());
            if record.len() < 3 {
                log::debug!("skipping line {line}: {} field(s)", record.len());
                continue;
            }
            rows.push(WeatherRow::from_record(line, &record)?);
        }

        Ok(Self { rows })
    }
}

pub fn load_data_from_csv<P: AsRef<Path>>(csv_file: P) -> Result<Dataset, Error> {
    Dataset::from_path(csv_file)
}

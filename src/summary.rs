use crate::{
    calculate_mean, convert_date, format_temperature, Celsius, Dataset, Error, WeatherRow,
};

pub const NO_DATA: &str = "No weather data available.";

/// Date of the last row, in dataset order, whose reading equals `value`.
///
/// Every matching row gets its date converted, so a bad date on any of them
/// fails the whole report.
fn occurs_on(
    dataset: &Dataset,
    value: i32,
    retrieve: fn(&WeatherRow) -> i32,
) -> Result<Option<String>, Error> {
    let mut day = None;
    for row in dataset.iter().filter(|row| retrieve(row) == value) {
        day = Some(convert_date(&row.date)?);
    }
    Ok(day)
}

/// Overview of the whole period: the extremes with the day they happen on,
/// and the average low and high.
pub fn generate_summary(dataset: &Dataset) -> Result<String, Error> {
    let (Some(min_value), Some(max_value)) =
        (dataset.min_temps().min(), dataset.max_temps().max())
    else {
        return Ok(NO_DATA.to_string());
    };
    let min_temps: Vec<_> = dataset.min_temps().collect();
    let max_temps: Vec<_> = dataset.max_temps().collect();

    let average_low = Celsius::from_fahrenheit(calculate_mean(&min_temps)?)?;
    let average_high = Celsius::from_fahrenheit(calculate_mean(&max_temps)?)?;
    let lowest = Celsius::from_fahrenheit(min_value)?;
    let highest = Celsius::from_fahrenheit(max_value)?;

    let lowest_on = occurs_on(dataset, min_value, |row| row.min_temp)?.unwrap_or_default();
    let highest_on = occurs_on(dataset, max_value, |row| row.max_temp)?.unwrap_or_default();

    Ok(format!(
        "{} Day Overview
  The lowest temperature will be {}, and will occur on {lowest_on}.
  The highest temperature will be {}, and will occur on {highest_on}.
  The average low this week is {}.
  The average high this week is {}.
",
        dataset.len(),
        format_temperature(lowest),
        format_temperature(highest),
        format_temperature(average_low),
        format_temperature(average_high),
    ))
}

/// One block per day, in dataset order.
pub fn generate_daily_summary(dataset: &Dataset) -> Result<String, Error> {
    if dataset.is_empty() {
        return Ok(NO_DATA.to_string());
    }

    let mut summary = String::new();
    for day in dataset.iter() {
        let date = convert_date(&day.date)?;
        let min_temp = Celsius::from_fahrenheit(day.min_temp)?;
        let max_temp = Celsius::from_fahrenheit(day.max_temp)?;
        summary.push_str(&format!(
            "---- {date} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
            format_temperature(min_temp),
            format_temperature(max_temp),
        ));
    }

    Ok(summary)
}

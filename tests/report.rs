use std::path::PathBuf;

use weather_report::{
    convert_date, find_max, find_min, generate_daily_summary, generate_summary,
    load_data_from_csv, Dataset, WeatherRow,
};

fn week() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/week.csv");
    load_data_from_csv(path).unwrap()
}

#[test]
fn load_week() {
    let dataset = week();
    // 2021-07-07 only has a date
    assert_eq!(dataset.len(), 7);
    assert_eq!(dataset.first(), Some(&WeatherRow::new("2021-07-02", 49, 67)));
    assert_eq!(dataset.last(), Some(&WeatherRow::new("2021-07-09", 50, 66)));
    assert!(dataset.iter().all(|row| row.date != "2021-07-07"));
}

#[test]
fn week_summary() {
    assert_eq!(
        generate_summary(&week()).unwrap(),
        "7 Day Overview
  The lowest temperature will be 9.4°C, and will occur on Thursday 08 July 2021.
  The highest temperature will be 21.1°C, and will occur on Thursday 08 July 2021.
  The average low this week is 11.5°C.
  The average high this week is 18.4°C.
"
    );
}

#[test]
fn week_daily_summary() {
    let summary = generate_daily_summary(&week()).unwrap();
    assert!(summary.starts_with(
        "---- Friday 02 July 2021 ----
  Minimum Temperature: 9.4°C
  Maximum Temperature: 19.4°C

---- Saturday 03 July 2021 ----
"
    ));
    assert!(summary.ends_with(
        "---- Friday 09 July 2021 ----
  Minimum Temperature: 10.0°C
  Maximum Temperature: 18.9°C

"
    ));
    assert_eq!(summary.matches("----\n").count(), 7);
}

#[test]
fn summary_and_find_min_agree_on_the_day() {
    let dataset = week();
    let lows: Vec<_> = dataset.min_temps().collect();
    let (value, index) = find_min(&lows).unwrap().unwrap();
    assert_eq!((value, index), (49., 5));
    let highs: Vec<_> = dataset.max_temps().collect();
    assert_eq!(find_max(&highs), Ok(Some((70., 5))));
    assert!(generate_summary(&dataset)
        .unwrap()
        .contains(&convert_date(&dataset[index].date).unwrap()));
}

#[test]
fn dates_match_chrono() {
    let mut day = chrono::NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();
    for _ in 0..400 {
        let iso = day.format("%Y-%m-%d").to_string();
        assert_eq!(
            convert_date(&iso).unwrap(),
            day.format("%A %d %B %Y").to_string()
        );
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn awkward_ignored_fields() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/awkward.csv");
    let dataset = load_data_from_csv(path).unwrap();
    assert_eq!(
        dataset.rows(),
        [
            WeatherRow::new("2021-07-05", 59, 68),
            WeatherRow::new("2021-07-06", 57, 70),
        ]
    );
    assert!(generate_summary(&dataset)
        .unwrap()
        .starts_with("2 Day Overview\n  The lowest temperature will be 13.9°C"));
}

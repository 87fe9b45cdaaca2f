use weather_report::{generate_daily_summary, generate_summary, load_data_from_csv};

fn main() -> miette::Result<()> {
    env_logger::init();
    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette::miette!("Missing filename"))?;

    let dataset = load_data_from_csv(file)?;

    println!("{}", generate_summary(&dataset)?);
    println!("{}", generate_daily_summary(&dataset)?);
    Ok(())
}

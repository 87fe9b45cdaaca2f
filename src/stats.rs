use crate::{Reading, ValueError};

/// Arithmetic mean of a non-empty sequence of readings.
pub fn calculate_mean<T: Reading>(values: &[T]) -> Result<f64, ValueError> {
    if values.is_empty() {
        return Err(ValueError::EmptySequence);
    }
    let total = values
        .iter()
        .map(Reading::reading)
        .sum::<Result<f64, _>>()?;
    Ok(total / values.len() as f64)
}

/// Minimum value and the index of its **last** occurrence, `None` when empty.
pub fn find_min<T: Reading>(values: &[T]) -> Result<Option<(f64, usize)>, ValueError> {
    find_last_by(values, |candidate, best| candidate <= best)
}

/// Maximum value and the index of its **last** occurrence, `None` when empty.
pub fn find_max<T: Reading>(values: &[T]) -> Result<Option<(f64, usize)>, ValueError> {
    find_last_by(values, |candidate, best| candidate >= best)
}

fn find_last_by<T: Reading>(
    values: &[T],
    replaces: fn(f64, f64) -> bool,
) -> Result<Option<(f64, usize)>, ValueError> {
    let mut best: Option<(f64, usize)> = None;
    for (index, value) in values.iter().enumerate() {
        let value = value.reading()?;
        match best {
            Some((best_value, _)) if !replaces(value, best_value) => (),
            _ => best = Some((value, index)),
        }
    }
    Ok(best)
}

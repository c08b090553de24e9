/// Returns the smallest value in `values`, or `0.0` when `values` is empty.
///
/// The first element seeds the scan and is only replaced by a strictly
/// smaller value, so NaN entries after the first are skipped.
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    rest.iter().fold(first, |acc, &v| if v < acc { v } else { acc })
}

/// Returns the largest value in `values`, or `0.0` when `values` is empty.
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    rest.iter().fold(first, |acc, &v| if v > acc { v } else { acc })
}

/// Returns `value`, raised to `floor` if it is below it.
#[must_use]
pub fn at_least(value: f64, floor: f64) -> f64 {
    max(&[value, floor])
}

/// Returns `value`, lowered to `ceiling` if it is above it.
#[must_use]
pub fn at_most(value: f64, ceiling: f64) -> f64 {
    min(&[value, ceiling])
}

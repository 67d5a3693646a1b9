//! Fixed province list backing the province select control

/// Provinces offered by the select, in display order
pub const PROVINCES: [&str; 10] = [
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Nova Scotia",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
];

/// Whether `value` is exactly one of the listed provinces
pub fn is_known_province(value: &str) -> bool {
    PROVINCES.contains(&value)
}

/// Option index of a select value: 0 is the empty "Choose…" option,
/// 1..=10 the provinces. Unlisted values map to the empty option.
fn option_index(value: &str) -> usize {
    PROVINCES
        .iter()
        .position(|p| *p == value)
        .map_or(0, |i| i + 1)
}

fn option_value(index: usize) -> &'static str {
    match index {
        0 => "",
        i => PROVINCES[i - 1],
    }
}

/// Next select option after `current`, wrapping through the empty option
pub fn next_province(current: &str) -> &'static str {
    option_value((option_index(current) + 1) % (PROVINCES.len() + 1))
}

/// Previous select option before `current`, wrapping through the empty option
pub fn prev_province(current: &str) -> &'static str {
    let count = PROVINCES.len() + 1;
    option_value((option_index(current) + count - 1) % count)
}

//! Shared display helpers: BC-aware year rendering and
//! separator-grouped counters.

/// Render a signed year; negatives are "before epoch" years.
pub fn format_year(year: i64) -> String {
    if year < 0 {
        format!("{} BC", -year)
    } else {
        year.to_string()
    }
}

/// Group digits with thousands separators for counter displays.
pub fn format_count(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

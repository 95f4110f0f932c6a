pub mod persistence;
pub mod version;

/// Formats credits with thousands separators, e.g. `-1,234 cr`.
pub fn format_credits(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded.abs() >= 1_000_000 {
        format!("{:.1}M cr", value / 1_000_000.0)
    } else if rounded.abs() >= 1_000 {
        let s = format!("{}", rounded);
        let mut result = String::new();
        for (i, c) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 && c != '-' {
                result.push(',');
            }
            result.push(c);
        }
        format!("{} cr", result.chars().rev().collect::<String>())
    } else {
        format!("{} cr", rounded)
    }
}

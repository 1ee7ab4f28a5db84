//! Display formatting for catalog figures.

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Money figures: millions get one decimal, smaller sums are grouped.
pub fn format_budget(amount: u64) -> String {
    if amount >= 1_000_000 {
        format!("${:.1}M", amount as f64 / 1_000_000.0)
    } else {
        format!("${}", format_thousands(amount))
    }
}

/// `135` -> `"2h 15m"`, `45` -> `"45m"`.
pub fn format_runtime(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

/// Year part of an ISO release date; `None` when the date is blank or malformed.
pub fn release_year(release_date: &str) -> Option<u16> {
    let year = release_date.trim().get(..4)?;
    year.parse().ok()
}

pub fn format_rating(vote_average: f64) -> String {
    format!("{vote_average:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12_000), "12,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn budget() {
        assert_eq!(format_budget(150_000_000), "$150.0M");
        assert_eq!(format_budget(1_500_000), "$1.5M");
        assert_eq!(format_budget(950_000), "$950,000");
    }

    #[test]
    fn runtime() {
        assert_eq!(format_runtime(135), "2h 15m");
        assert_eq!(format_runtime(120), "2h 0m");
        assert_eq!(format_runtime(45), "45m");
    }

    #[test]
    fn year() {
        assert_eq!(release_year("2019-04-24"), Some(2019));
        assert_eq!(release_year(""), None);
        assert_eq!(release_year("soon"), None);
    }

    #[test]
    fn rating() {
        assert_eq!(format_rating(7.456), "7.5");
        assert_eq!(format_rating(0.0), "0.0");
    }
}

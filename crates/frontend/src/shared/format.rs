//! Display formatting helpers
//!
//! Indonesian locale conventions: thousands are separated with dots.

use chrono::{DateTime, Utc};

/// Format a rupiah amount with dot thousand separators.
/// Example: 5000000 -> "Rp 5.000.000"
pub fn format_rupiah(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Format a timestamp as DD-MM-YYYY.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d-%m-%Y").to_string()
}

/// Format a timestamp as DD-MM-YYYY HH:MM.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%d-%m-%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(5_000_000), "Rp 5.000.000");
        assert_eq!(format_rupiah(1_234_567_890), "Rp 1.234.567.890");
        assert_eq!(format_rupiah(-75_000), "-Rp 75.000");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&ts), "15-03-2024");
        assert_eq!(format_datetime(&ts), "15-03-2024 14:02");
    }
}

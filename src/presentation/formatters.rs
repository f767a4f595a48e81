// Display formatting for dashboard values
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Ghana cedi (GHS), the only currency the dashboard reports in
pub const CURRENCY_SYMBOL: &str = "GH₵";

const GROWTH_UP: char = '↗';
const GROWTH_DOWN: char = '↘';
const STAR_FILLED: char = '★';
const STAR_EMPTY: char = '☆';

/// `2500.0` -> `GH₵2,500.00`. Non-finite amounts render as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Arrow for the direction followed by the magnitude: `-8.2` -> `↘ 8.2%`
pub fn format_growth(growth: f64) -> String {
    let arrow = if growth >= 0.0 { GROWTH_UP } else { GROWTH_DOWN };
    format!("{} {}%", arrow, growth.abs())
}

/// Style hint paired with `format_growth`
pub fn growth_tone(growth: f64) -> &'static str {
    if growth >= 0.0 { "success" } else { "danger" }
}

/// `2025-09-20` -> `Sep 20, 12:00 AM`. Times are shown in UTC (Ghana time).
pub fn format_date(value: &str) -> String {
    match parse_datetime(value.trim()) {
        Some(datetime) => datetime.format("%b %-d, %I:%M %p").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).naive_utc());
    }

    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(datetime);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Five stars; star `i` is filled iff `i <= rating`, so 3.5 shows three.
pub fn star_rating(rating: f64) -> String {
    (1..=5u8)
        .map(|i| if f64::from(i) <= rating { STAR_FILLED } else { STAR_EMPTY })
        .collect()
}

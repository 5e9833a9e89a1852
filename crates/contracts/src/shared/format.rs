//! Display formatting shared by tables, cards and forms.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const EMPTY: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `2024-03-05`
    Iso,
    /// `5 March, 2024`
    DayMonthYear,
    /// `03/05/2024`
    Slashed,
    /// `March 5, 2024`
    #[default]
    Long,
    /// `2024-03-05 14:02:26`
    IsoDateTime,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::DayMonthYear => "%-d %B, %Y",
            DateFormat::Slashed => "%m/%d/%Y",
            DateFormat::Long => "%B %-d, %Y",
            DateFormat::IsoDateTime => "%Y-%m-%d %H:%M:%S",
        }
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Missing values render as a dash, unparseable ones are shown unchanged.
pub fn format_date(value: Option<&str>, format: DateFormat) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return EMPTY.to_string(),
    };
    match parse_datetime(value) {
        Some(dt) => dt.format(format.pattern()).to_string(),
        None => value.to_string(),
    }
}

/// Strip the time part of a backend timestamp for `<input type="date">`.
pub fn date_input_value(value: Option<&str>) -> String {
    value
        .and_then(parse_datetime)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Philippine peso with two decimals, e.g. `₱1,234.50`.
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(a) if a.is_finite() => a,
        _ => return EMPTY.to_string(),
    };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}₱{}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Grouped number with at most three decimals, e.g. `1,234.5`. Missing is `0`.
pub fn format_number(value: Option<f64>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return "0".to_string(),
    };
    let scaled = (value.abs() * 1000.0).round() as u64;
    let sign = if value < 0.0 && scaled > 0 { "-" } else { "" };
    let whole = group_thousands(scaled / 1000);
    let frac = scaled % 1000;
    if frac == 0 {
        format!("{}{}", sign, whole)
    } else {
        let frac = format!("{:03}", frac);
        format!("{}{}.{}", sign, whole, frac.trim_end_matches('0'))
    }
}

/// `under_repair` → `Under Repair`.
pub fn format_status(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return EMPTY.to_string(),
    };
    value
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut to `len` characters and mark the cut with an ellipsis.
pub fn truncate(value: Option<&str>, len: usize) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return EMPTY.to_string(),
    };
    if value.chars().count() > len {
        let head: String = value.chars().take(len).collect();
        format!("{}…", head)
    } else {
        value.to_string()
    }
}

/// Show a dash for empty optional text.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        let d = Some("2024-03-05");
        assert_eq!(format_date(d, DateFormat::Iso), "2024-03-05");
        assert_eq!(format_date(d, DateFormat::DayMonthYear), "5 March, 2024");
        assert_eq!(format_date(d, DateFormat::Slashed), "03/05/2024");
        assert_eq!(format_date(d, DateFormat::Long), "March 5, 2024");
        assert_eq!(
            format_date(Some("2024-03-05 14:02:26"), DateFormat::IsoDateTime),
            "2024-03-05 14:02:26"
        );
    }

    #[test]
    fn test_format_date_backend_timestamp() {
        assert_eq!(
            format_date(Some("2024-12-31T23:59:59.000000Z"), DateFormat::default()),
            "December 31, 2024"
        );
    }

    #[test]
    fn test_format_date_missing_or_invalid() {
        assert_eq!(format_date(None, DateFormat::Long), "—");
        assert_eq!(format_date(Some(""), DateFormat::Long), "—");
        assert_eq!(format_date(Some("soon"), DateFormat::Long), "soon");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value(Some("2024-03-05T00:00:00.000000Z")), "2024-03-05");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1234.5)), "₱1,234.50");
        assert_eq!(format_currency(Some(0.0)), "₱0.00");
        assert_eq!(format_currency(Some(1_000_000.0)), "₱1,000,000.00");
        assert_eq!(format_currency(Some(-12.5)), "-₱12.50");
        assert_eq!(format_currency(None), "—");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(1234.0)), "1,234");
        assert_eq!(format_number(Some(1234.5)), "1,234.5");
        assert_eq!(format_number(Some(999.0)), "999");
        assert_eq!(format_number(None), "0");
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(Some("under_repair")), "Under Repair");
        assert_eq!(format_status(Some("fixed_asset")), "Fixed Asset");
        assert_eq!(format_status(Some("active")), "Active");
        assert_eq!(format_status(None), "—");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(Some("short"), 10), "short");
        assert_eq!(truncate(Some("abcdefghij"), 4), "abcd…");
        assert_eq!(truncate(Some(""), 4), "—");
        assert_eq!(truncate(None, 4), "—");
    }
}

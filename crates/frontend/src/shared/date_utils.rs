/// Utilities for dates coming from the browser clock

/// Zero-padded `YYYY-MM-DD`.
pub fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today's local date as `YYYY-MM-DD`, the default for date inputs.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// Current calendar year for footers.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(2024, 3, 5), "2024-03-05");
        assert_eq!(iso_date(2024, 12, 31), "2024-12-31");
    }
}

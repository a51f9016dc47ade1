use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `None` → today; otherwise the string must be `YYYY-MM-DD`.
pub fn parse_optional_date(input: Option<&String>) -> Result<NaiveDate, String> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| s.to_string()),
        None => Ok(today()),
    }
}

/// Parse `YYYY-MM-DD HH:MM[:SS]` (or `T` separated) as a local timestamp.
/// A bare `HH:MM` means that time today.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    chrono::NaiveTime::parse_from_str(s, "%H:%M")
        .ok()
        .map(|t| today().and_time(t))
}

/// First and last day of a period: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn bounds_of_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {p}"))
}

/// Resolve `PERIOD` or `PERIOD:PERIOD` into an inclusive day range.
pub fn resolve_range(range: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let (first, last) = match range.split_once(':') {
        Some((a, b)) => (bounds_of_period(a)?.0, bounds_of_period(b)?.1),
        None => bounds_of_period(range)?,
    };

    if first > last {
        return Err(format!("Range start {first} is after its end {last}"));
    }

    Ok((first, last))
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

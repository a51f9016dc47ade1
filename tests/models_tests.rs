use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use healthlog::models::entry::{parse_ts, to_local_rfc3339};
use healthlog::models::{DailyTotals, DayWindow, Entry};

fn window() -> DayWindow {
    DayWindow::for_date(NaiveDate::from_ymd_opt(2025, 3, 1).expect("date"))
}

fn entry(ts: NaiveDateTime, sugar: f64) -> Entry {
    Entry::new(ts, "Snack", sugar, 1.0, 0.5)
}

#[test]
fn window_is_half_open_midnight_to_midnight() {
    let w = window();

    assert_eq!(w.start.to_string(), "2025-03-01 00:00:00");
    assert_eq!(w.end.to_string(), "2025-03-02 00:00:00");
    assert!(w.contains(&w.start));
    assert!(!w.contains(&w.end));
}

#[test]
fn totals_ignore_rows_outside_the_window() {
    let w = window();
    let one = TimeDelta::microseconds(1);

    // a backend that hands back too much
    let rows = [
        entry(w.start - one, 100.0),
        entry(w.start, 10.0),
        entry(w.end - one, 5.5),
        entry(w.end, 100.0),
    ];

    let totals = DailyTotals::for_window(&w, &rows);

    assert_eq!(totals.entries, 2);
    assert_eq!(totals.sugar_g, 15.5);
    assert_eq!(totals.water_cups, 2.0);
    assert_eq!(totals.insulin_units, 1.0);
}

#[test]
fn parse_ts_accepts_naive_formats() {
    let expected = NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("timestamp");

    for raw in [
        "2025-03-01T08:30:00",
        "2025-03-01T08:30:00.000000",
        "2025-03-01 08:30:00",
        "2025-03-01 08:30",
    ] {
        assert_eq!(parse_ts(raw), Some(expected), "{raw}");
    }
    assert_eq!(parse_ts("not a time"), None);
}

#[test]
fn parse_ts_converts_offsets_to_local_time() {
    let instant = Utc
        .with_ymd_and_hms(2025, 3, 1, 14, 0, 0)
        .single()
        .expect("instant");
    let local = instant.with_timezone(&Local).naive_local();

    assert_eq!(parse_ts("2025-03-01T14:00:00+00:00"), Some(local));
    assert_eq!(parse_ts("2025-03-01T23:00:00+09:00"), Some(local));
    assert_eq!(parse_ts("2025-03-01T14:00:00Z"), Some(local));
}

#[test]
fn local_rfc3339_round_trips() {
    let w = window();

    for ts in [w.start, w.start + TimeDelta::hours(23), w.end - TimeDelta::microseconds(1)] {
        let wire = to_local_rfc3339(&ts);
        let time_part = wire.split_once('T').expect("date and time").1;
        assert!(time_part.contains('+') || time_part.contains('-'), "{wire}");
        assert_eq!(parse_ts(&wire), Some(ts), "{wire}");
    }
}

#[test]
fn entry_json_carries_the_local_offset() {
    let ts = window().start + TimeDelta::hours(23);
    let json = serde_json::to_value(entry(ts, 3.0)).expect("json");

    let wire = json["ts"].as_str().expect("ts string");
    assert_eq!(wire, to_local_rfc3339(&ts));
    assert!(json.get("id").is_none(), "unsaved entries carry no id");

    let back: Entry = serde_json::from_value(json).expect("entry");
    assert_eq!(back.ts, ts);
}

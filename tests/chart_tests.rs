use healthlog::chart;
use healthlog::models::DailyTotals;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{hl, init_db_with_data, setup_test_db, temp_out};

fn totals(sugar: f64, water: f64, insulin: f64) -> DailyTotals {
    DailyTotals {
        sugar_g: sugar,
        water_cups: water,
        insulin_units: insulin,
        entries: 1,
    }
}

#[test]
fn test_terminal_chart_has_one_row_per_metric() {
    let out = chart::terminal::render(&totals(25.0, 4.0, 6.0), 50.0, 20, false);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Sugar"));
    assert!(lines[0].ends_with("25 g"));
    assert!(lines[1].starts_with("Water"));
    assert!(lines[2].starts_with("Insulin"));
    assert!(lines[3].contains("limit 50 g"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_terminal_chart_bar_length_scales_with_axis() {
    // sugar fills half the axis
    let out = chart::terminal::render(&totals(25.0, 0.0, 0.0), 50.0, 20, false);
    let sugar = out.lines().next().expect("sugar row");

    assert_eq!(sugar.matches('█').count(), 10);
}

#[test]
fn test_terminal_chart_limit_at_axis_end_uses_last_cell() {
    // under the limit, the limit is the axis maximum
    let out = chart::terminal::render(&totals(25.0, 0.0, 0.0), 50.0, 20, false);
    let sugar = out.lines().next().expect("sugar row");

    assert!(sugar.contains("┆|"), "{sugar}");
}

#[test]
fn test_terminal_chart_no_marker_over_a_full_bar() {
    let out = chart::terminal::render(&totals(60.0, 0.0, 0.0), 50.0, 20, false);
    let sugar = out.lines().next().expect("sugar row");

    assert!(!sugar.contains('┆'));
}

#[test]
fn test_terminal_chart_limit_marker_inside_axis() {
    // axis max is water (40), limit 20 lands halfway on an empty sugar row
    let out = chart::terminal::render(&totals(0.0, 40.0, 0.0), 20.0, 20, false);
    let sugar = out.lines().next().expect("sugar row");

    assert!(sugar.contains('┆'));
}

#[test]
fn test_svg_chart_structure() {
    let svg = chart::svg::render(&totals(30.0, 3.0, 5.0), 50.0);

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"data-metric="sugar""#));
    assert!(svg.contains(r#"data-metric="water""#));
    assert!(svg.contains(r#"data-metric="insulin""#));
    assert!(svg.contains(r#"class="limit""#));
    assert!(svg.contains("limit 50 g"));
    assert!(!svg.contains("#d9534f"));
}

#[test]
fn test_svg_chart_sugar_over_limit_is_red() {
    let svg = chart::svg::render(&totals(60.0, 0.0, 0.0), 50.0);
    assert!(svg.contains("#d9534f"));
}

#[test]
fn test_svg_chart_empty_day() {
    let svg = chart::svg::render(&DailyTotals::default(), 50.0);
    assert!(svg.contains(r#"data-metric="sugar""#));
    assert!(!svg.contains("NaN"));
}

#[test]
fn test_cli_chart_terminal() {
    let db_path = setup_test_db("cli_chart_terminal");
    init_db_with_data(&db_path);

    hl().args(["--db", &db_path, "chart", "--date", "2025-03-01", "--width", "30"])
        .assert()
        .success()
        .stdout(
            contains("2025-03-01")
                .and(contains("42.5 g"))
                .and(contains("2 cups"))
                .and(contains("6 units"))
                .and(contains("limit 50 g")),
        );
}

#[test]
fn test_cli_chart_svg_file() {
    let db_path = setup_test_db("cli_chart_svg");
    init_db_with_data(&db_path);
    let out = temp_out("cli_chart_svg", "svg");

    hl().args(["--db", &db_path, "chart", "--date", "2025-03-01", "--svg", &out])
        .assert()
        .success()
        .stdout(contains("written to"));

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("42.5"));
}

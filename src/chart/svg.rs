use super::{axis_max, bars};
use crate::models::DailyTotals;
use crate::utils::fmt_amount;
use std::fmt::Write;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_TOP: f64 = 20.0;
const GRID_LINES: usize = 5;

const BAR_COLOR: &str = "#4a90d9";
const OVER_COLOR: &str = "#d9534f";
const LIMIT_COLOR: &str = "#f0ad4e";

/// Standalone SVG bar chart of one day's totals with the sugar limit as a
/// dashed line. The sugar bar turns red once the limit is exceeded.
pub fn render(totals: &DailyTotals, limit: f64) -> String {
    let max = axis_max(totals, limit);
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_w = WIDTH - MARGIN_LEFT - 10.0;
    let slot = plot_w / 3.0;
    let bar_w = slot * 0.6;
    let y_of = |v: f64| MARGIN_TOP + plot_h - (v / max) * plot_h;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Daily totals">"#
    );
    let _ = writeln!(
        out,
        r#"<style>text{{font-family:sans-serif;font-size:12px;fill:#333}}</style>"#
    );

    // Grid + y axis labels
    for i in 0..=GRID_LINES {
        let v = max * i as f64 / GRID_LINES as f64;
        let y = y_of(v);
        let _ = writeln!(
            out,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5"/>"##,
            WIDTH - 10.0
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0,
            fmt_amount(v)
        );
    }

    // Bars
    for (i, bar) in bars(totals).iter().enumerate() {
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
        let y = y_of(bar.value);
        let h = (MARGIN_TOP + plot_h - y).max(0.0);
        let fill = if i == 0 && bar.value > limit {
            OVER_COLOR
        } else {
            BAR_COLOR
        };

        let _ = writeln!(
            out,
            r#"<rect class="bar" data-metric="{}" x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{fill}"/>"#,
            bar.label.to_lowercase()
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x + bar_w / 2.0,
            (y - 4.0).max(MARGIN_TOP),
            fmt_amount(bar.value)
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{} ({})</text>"#,
            x + bar_w / 2.0,
            HEIGHT - MARGIN_BOTTOM + 18.0,
            bar.label,
            bar.unit
        );
    }

    // Sugar limit
    let ly = y_of(limit);
    let _ = writeln!(
        out,
        r#"<line class="limit" x1="{MARGIN_LEFT}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{LIMIT_COLOR}" stroke-width="2" stroke-dasharray="6 4"/>"#,
        WIDTH - 10.0
    );
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="end">limit {} g</text>"#,
        WIDTH - 12.0,
        ly - 6.0,
        fmt_amount(limit)
    );

    // Axes
    let _ = writeln!(
        out,
        r##"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{:.1}" stroke="#333"/>"##,
        MARGIN_TOP + plot_h
    );
    let _ = writeln!(
        out,
        r##"<line x1="{MARGIN_LEFT}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#333"/>"##,
        MARGIN_TOP + plot_h,
        WIDTH - 10.0,
        MARGIN_TOP + plot_h
    );

    out.push_str("</svg>\n");
    out
}

//! Server-rendered HTML pages. All user text goes through `escape_html`.

use super::notice::Flash;
use crate::core::EntryInput;
use crate::models::{DaySummary, Entry};
use crate::utils::{escape_html, fmt_amount};
use std::fmt::Write;

const STYLE: &str = r#"
body{font-family:system-ui,sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem;color:#222}
nav a{margin-right:1rem}
table{border-collapse:collapse;width:100%}
th,td{padding:.35rem .5rem;border-bottom:1px solid #ddd;text-align:left}
td.num,th.num{text-align:right}
.flash{padding:.6rem .8rem;border-radius:4px;margin:1rem 0}
.flash.success{background:#e6f4ea}
.flash.info{background:#e8f0fe}
.flash.error{background:#fce8e6}
.over{color:#b3261e;font-weight:bold}
.ok{color:#1e7e34}
form.inline{display:inline}
label{display:block;margin:.4rem 0}
"#;

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="{}">{}</div>"#,
                f.kind.css_class(),
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · healthlog</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Today</a><a href="/entries">Entries</a><a href="/chart">Chart</a><a href="/settings">Settings</a></nav>
<h1>{title}</h1>
{flash_html}
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn sugar_status_html(summary: &DaySummary) -> String {
    let s = &summary.status;
    if s.exceeded {
        format!(
            r#"<p class="over" id="sugar-status">Over the daily limit by {} g ({} g of {} g).</p>"#,
            fmt_amount(s.consumed - s.limit),
            fmt_amount(s.consumed),
            fmt_amount(s.limit)
        )
    } else {
        format!(
            r#"<p class="ok" id="sugar-status">{} g left of {} g ({:.0}% used).</p>"#,
            fmt_amount(s.remaining),
            fmt_amount(s.limit),
            s.percent
        )
    }
}

/// `/`: today's totals and the add-entry form.
pub fn index(summary: &DaySummary, flash: Option<&Flash>, form: &EntryInput) -> String {
    let t = &summary.totals;
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<h2>Totals for {day}</h2>
<table id="totals">
<tr><th>Sugar (g)</th><td class="num" id="total-sugar">{sugar}</td></tr>
<tr><th>Water (cups)</th><td class="num" id="total-water">{water}</td></tr>
<tr><th>Insulin (units)</th><td class="num" id="total-insulin">{insulin}</td></tr>
<tr><th>Entries</th><td class="num" id="total-entries">{count}</td></tr>
<tr><th>Daily sugar limit (g)</th><td class="num" id="sugar-limit">{limit}</td></tr>
</table>
{status}
"#,
        day = summary.window.day,
        sugar = fmt_amount(t.sugar_g),
        water = fmt_amount(t.water_cups),
        insulin = fmt_amount(t.insulin_units),
        count = t.entries,
        limit = fmt_amount(summary.limit()),
        status = sugar_status_html(summary),
    );

    let _ = write!(
        body,
        r#"<h2>Add entry</h2>
<form method="post" action="/">
<label>Food <input name="food" required value="{food}"></label>
<label>Sugar (g) <input name="sugar" inputmode="decimal" value="{sugar}"></label>
<label>Water (cups) <input name="water" inputmode="decimal" value="{water}"></label>
<label>Insulin (units) <input name="insulin" inputmode="decimal" value="{insulin}"></label>
<button type="submit">Save</button>
</form>
"#,
        food = escape_html(&form.food),
        sugar = escape_html(&form.sugar),
        water = escape_html(&form.water),
        insulin = escape_html(&form.insulin),
    );

    layout("Today", flash, &body)
}

/// `/entries`: today's entries, newest first.
pub fn entries(day: chrono::NaiveDate, entries: &[Entry], flash: Option<&Flash>) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>Entries for {day}</h2>");

    if entries.is_empty() {
        body.push_str(r#"<p id="no-entries">No entries yet today.</p>"#);
        return layout("Entries", flash, &body);
    }

    body.push_str(
        r#"<table id="entries">
<tr><th>Time</th><th>Food</th><th class="num">Sugar (g)</th><th class="num">Water (cups)</th><th class="num">Insulin (units)</th></tr>
"#,
    );

    for e in entries {
        let _ = writeln!(
            body,
            r#"<tr data-id="{}"><td>{}</td><td>{}</td><td class="num">{}</td><td class="num">{}</td><td class="num">{}</td></tr>"#,
            e.id,
            e.time_str(),
            escape_html(&e.food),
            fmt_amount(e.sugar_g),
            fmt_amount(e.water_cups),
            fmt_amount(e.insulin_units),
        );
    }
    body.push_str("</table>\n");

    body.push_str(
        r#"<p>
<form class="inline" method="post" action="/entries/delete-last"><button type="submit">Delete last entry</button></form>
<form class="inline" method="post" action="/entries/delete-today"><button type="submit">Delete all of today's entries</button></form>
</p>
"#,
    );

    layout("Entries", flash, &body)
}

/// `/settings`: the daily sugar limit form. `value` is what the input shows.
pub fn settings(current: f64, value: &str, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<p>Current daily sugar limit: <strong id="current-limit">{current} g</strong></p>
<form method="post" action="/settings">
<label>Daily sugar limit (g) <input name="limit" inputmode="decimal" value="{value}"></label>
<button type="submit">Update</button>
</form>
"#,
        current = fmt_amount(current),
        value = escape_html(value),
    );

    layout("Settings", flash, &body)
}

/// `/chart`: page embedding the SVG chart.
pub fn chart(summary: &DaySummary, svg: &str) -> String {
    let body = format!(
        "<h2>{day}</h2>\n<figure>\n{svg}</figure>\n{status}\n",
        day = summary.window.day,
        status = sugar_status_html(summary),
    );

    layout("Chart", None, &body)
}

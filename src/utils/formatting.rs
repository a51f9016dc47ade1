//! Formatting utilities used for CLI, HTML and export outputs.

/// Amounts are shown with at most one decimal: `12`, `12.5`.
pub fn fmt_amount(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn fmt_percent(v: f64) -> String {
    format!("{:.0}%", v)
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

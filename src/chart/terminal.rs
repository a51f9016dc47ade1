use super::{axis_max, bars};
use crate::models::DailyTotals;
use crate::utils::colors::{CYAN, RESET, color_for_sugar};
use crate::utils::fmt_amount;

const FULL_BLOCK: char = '█';
const LIMIT_MARK: char = '┆';

/// Horizontal ANSI bar chart.
///
/// The sugar row carries a `┆` marker at the limit position and is colored
/// by how close it is to the limit.
pub fn render(totals: &DailyTotals, limit: f64, width: usize, color: bool) -> String {
    let width = width.max(10);
    let max = axis_max(totals, limit);
    // the limit at the axis end still gets the last cell
    let limit_col = (((limit / max) * width as f64).round() as usize).min(width - 1);

    let label_width = bars(totals).iter().map(|b| b.label.len()).max().unwrap_or(0);
    let mut lines = Vec::new();

    for (i, bar) in bars(totals).iter().enumerate() {
        let len = ((bar.value / max) * width as f64).round() as usize;
        let mut cells: Vec<char> = std::iter::repeat_n(FULL_BLOCK, len.min(width))
            .chain(std::iter::repeat_n(' ', width - len.min(width)))
            .collect();

        let is_sugar = i == 0;
        if is_sugar && cells[limit_col] == ' ' {
            cells[limit_col] = LIMIT_MARK;
        }

        let body: String = cells.into_iter().collect();
        let body = match (color, is_sugar) {
            (true, true) => format!("{}{body}{RESET}", color_for_sugar(bar.value, limit)),
            (true, false) => format!("{CYAN}{body}{RESET}"),
            (false, _) => body,
        };

        lines.push(format!(
            "{:<label_width$} |{}| {} {}",
            bar.label,
            body,
            fmt_amount(bar.value),
            bar.unit
        ));
    }

    lines.push(format!(
        "{:<label_width$}  limit {} g",
        "",
        fmt_amount(limit)
    ));

    lines.join("\n")
}

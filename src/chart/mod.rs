//! Daily chart: three bars (sugar, water, insulin) for one day.

pub mod svg;
pub mod terminal;

use crate::models::DailyTotals;

/// One bar of the daily chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

/// Bars in display order: sugar, water, insulin.
pub fn bars(totals: &DailyTotals) -> [Bar; 3] {
    [
        Bar {
            label: "Sugar",
            unit: "g",
            value: totals.sugar_g,
        },
        Bar {
            label: "Water",
            unit: "cups",
            value: totals.water_cups,
        },
        Bar {
            label: "Insulin",
            unit: "units",
            value: totals.insulin_units,
        },
    ]
}

/// Axis maximum: the largest bar or the sugar limit, never below 1.
pub fn axis_max(totals: &DailyTotals, limit: f64) -> f64 {
    bars(totals)
        .iter()
        .map(|b| b.value)
        .chain(std::iter::once(limit))
        .filter(|v| v.is_finite())
        .fold(1.0_f64, f64::max)
}

//! Dashboard counters and chart series.
//!
//! Counters are derived from the aggregate on every call. The chart series
//! are fixed illustrative figures and are not computed from task or
//! earnings history.

use crate::{
    core::{earnings, tasks},
    models::AppState,
};
use chrono::NaiveDate;

/// The four headline counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    /// Tasks whose creation date (UTC) is `today`
    pub tasks_added_today: usize,
    /// Tasks with the report flag set
    pub reported_tasks: usize,
    /// All accounts, including ones on deleted devices
    pub total_accounts: usize,
    /// Sum of all earning records
    pub total_earnings: f64,
}

/// Window a chart series covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    /// Parts of one day
    #[default]
    Daily,
    /// Days of one week
    Weekly,
    /// Months of one half-year
    Monthly,
}

/// One labelled point of a chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    /// Axis label
    pub label: &'static str,
    /// Plotted value
    pub value: u32,
}

const fn point(label: &'static str, value: u32) -> ChartPoint {
    ChartPoint { label, value }
}

const DAILY_SERIES: [ChartPoint; 5] = [
    point("Morning", 4),
    point("Noon", 7),
    point("Afternoon", 12),
    point("Evening", 9),
    point("Night", 15),
];

const WEEKLY_SERIES: [ChartPoint; 7] = [
    point("Sat", 20),
    point("Sun", 35),
    point("Mon", 25),
    point("Tue", 45),
    point("Wed", 30),
    point("Thu", 55),
    point("Fri", 40),
];

const MONTHLY_SERIES: [ChartPoint; 6] = [
    point("Jan", 120),
    point("Feb", 180),
    point("Mar", 240),
    point("Apr", 210),
    point("May", 290),
    point("Jun", 350),
];

/// Computes the headline counters for `today`.
#[must_use]
pub fn summarize(state: &AppState, today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        tasks_added_today: state
            .tasks
            .iter()
            .filter(|t| t.date.date_naive() == today)
            .count(),
        reported_tasks: tasks::reported_tasks(state).len(),
        total_accounts: state.accounts.len(),
        total_earnings: earnings::earnings_total(state),
    }
}

/// Placeholder activity series for `timeframe`.
#[must_use]
pub const fn chart_series(timeframe: Timeframe) -> &'static [ChartPoint] {
    match timeframe {
        Timeframe::Daily => &DAILY_SERIES,
        Timeframe::Weekly => &WEEKLY_SERIES,
        Timeframe::Monthly => &MONTHLY_SERIES,
    }
}

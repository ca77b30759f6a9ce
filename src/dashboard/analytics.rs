//! Read-only analytics view.

use crate::{
    core::{
        analytics::{self, ChartPoint, DashboardSummary, Timeframe},
        tasks,
    },
    models::{AppState, Task},
};
use chrono::NaiveDate;

/// Everything the analytics page shows
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView<'a> {
    /// Headline counters
    pub summary: DashboardSummary,
    /// Sum of task payouts
    pub task_payout_total: f64,
    /// Selected chart window
    pub timeframe: Timeframe,
    /// Placeholder series for `timeframe`
    pub chart: &'static [ChartPoint],
    /// Tasks that need attention
    pub reported: Vec<&'a Task>,
}

/// Builds the analytics view for `today`.
#[must_use]
pub fn analytics_view(state: &AppState, timeframe: Timeframe, today: NaiveDate) -> AnalyticsView<'_> {
    AnalyticsView {
        summary: analytics::summarize(state, today),
        task_payout_total: tasks::task_payout_total(state),
        timeframe,
        chart: analytics::chart_series(timeframe),
        reported: tasks::reported_tasks(state),
    }
}

use crate::models::metrics::MetricGroups;
use crate::models::weekly::{PeriodAggregate, WeeklyRecord};

/// Field-wise sum over the metric schema. Empty input yields all zeros.
pub fn aggregate<'a, I>(records: I) -> MetricGroups
where
    I: IntoIterator<Item = &'a WeeklyRecord>,
{
    records
        .into_iter()
        .fold(MetricGroups::default(), |mut total, record| {
            total.accumulate(&record.metrics);
            total
        })
}

/// Sums `records` in week order. Returns `None` when there is nothing to sum.
pub fn aggregate_period(records: &[WeeklyRecord]) -> Option<PeriodAggregate> {
    let mut ordered: Vec<&WeeklyRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.week_start.cmp(&b.week_start));

    let first = ordered.first()?;
    let last = ordered.last()?;

    Some(PeriodAggregate {
        period_start: first.week_start.clone(),
        period_end: last.week_end.clone(),
        week_count: ordered.len(),
        metrics: aggregate(ordered.iter().copied()),
    })
}

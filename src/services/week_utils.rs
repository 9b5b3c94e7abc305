//! Calendar helpers for Monday-to-Friday reporting weeks.
//!
//! Every function takes the reference date explicitly; nothing in here reads
//! the host clock.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::week::{WeekRange, WEEK_KEY_FORMAT};

const BUSINESS_DAYS_AFTER_MONDAY: u64 = 4;
const SHORT_DAY_MONTH: &str = "%-d %b";
const MONTH_LABEL_FORMAT: &str = "%B %Y";

pub fn get_week_range(date: NaiveDate) -> AppResult<WeekRange> {
    let start = monday_on_or_before(date)?;
    let end = friday_of(start)?;

    Ok(WeekRange {
        start,
        end,
        label: format!(
            "{} – {}",
            start.format(SHORT_DAY_MONTH),
            end.format(SHORT_DAY_MONTH)
        ),
        value: start.format(WEEK_KEY_FORMAT).to_string(),
    })
}

pub fn current_week(today: NaiveDate) -> AppResult<WeekRange> {
    get_week_range(today)
}

/// Weeks overlapping the month `month_offset` months away from `today`'s month.
///
/// With `include_current_only`, weeks after the current one are dropped, but
/// only while looking at the current month (`month_offset == 0`).
pub fn get_weeks_for_month(
    today: NaiveDate,
    month_offset: i32,
    include_current_only: bool,
) -> AppResult<Vec<WeekRange>> {
    let first_day = first_day_of_month(today, month_offset)?;
    let last_day = last_day_of_month(first_day)?;
    let current = get_week_range(today)?;
    let hide_future = include_current_only && month_offset == 0;

    let mut weeks = Vec::new();
    let mut cursor = monday_on_or_before(first_day)?;

    while cursor <= last_day {
        let week = get_week_range(cursor)?;
        let overlaps = week.end >= first_day && week.start <= last_day;

        if overlaps && !(hide_future && week.value > current.value) {
            weeks.push(week);
        }

        cursor = cursor
            .checked_add_days(Days::new(7))
            .ok_or_else(|| out_of_range(cursor))?;
    }

    Ok(weeks)
}

/// "6 Oct – 10 Oct 2025" for the week starting at `week_start`.
pub fn format_week_label(week_start: &str) -> AppResult<String> {
    let start = parse_week_key(week_start)?;
    let end = friday_of(start)?;
    Ok(format!(
        "{} – {}",
        start.format(SHORT_DAY_MONTH),
        end.format("%-d %b %Y")
    ))
}

/// Strict `YYYY-MM-DD` parsing; zero padding is required so keys sort correctly.
pub fn parse_week_key(value: &str) -> AppResult<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(value, WEEK_KEY_FORMAT).map_err(|err| {
        AppError::validation_with_source("invalid week key", err, json!({"value": value}))
    })?;

    if parsed.format(WEEK_KEY_FORMAT).to_string() != value {
        return Err(AppError::validation_with_details(
            "week key must be zero-padded YYYY-MM-DD",
            json!({"value": value}),
        ));
    }

    Ok(parsed)
}

pub fn week_end_key(week_start: &str) -> AppResult<String> {
    let start = parse_week_key(week_start)?;
    Ok(friday_of(start)?.format(WEEK_KEY_FORMAT).to_string())
}

/// Rejects keys that parse but are not the Monday of their week.
pub fn ensure_monday_key(week_start: &str) -> AppResult<()> {
    let date = parse_week_key(week_start)?;
    let week = get_week_range(date)?;
    if week.value != week_start {
        return Err(AppError::validation_with_details(
            "week key must be a Monday",
            json!({"value": week_start, "monday": week.value}),
        ));
    }
    Ok(())
}

pub fn month_label(today: NaiveDate, month_offset: i32) -> AppResult<String> {
    let first_day = first_day_of_month(today, month_offset)?;
    Ok(first_day.format(MONTH_LABEL_FORMAT).to_string())
}

pub fn first_day_of_month(today: NaiveDate, month_offset: i32) -> AppResult<NaiveDate> {
    let anchor = today.with_day(1).ok_or_else(|| out_of_range(today))?;
    let shifted = if month_offset >= 0 {
        anchor.checked_add_months(Months::new(month_offset.unsigned_abs()))
    } else {
        anchor.checked_sub_months(Months::new(month_offset.unsigned_abs()))
    };

    shifted.ok_or_else(|| {
        AppError::validation_with_details(
            "month offset out of range",
            json!({"today": today.to_string(), "monthOffset": month_offset}),
        )
    })
}

pub fn last_day_of_month(first_day: NaiveDate) -> AppResult<NaiveDate> {
    first_day
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| out_of_range(first_day))
}

fn monday_on_or_before(date: NaiveDate) -> AppResult<NaiveDate> {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back))
        .ok_or_else(|| out_of_range(date))
}

fn friday_of(monday: NaiveDate) -> AppResult<NaiveDate> {
    monday
        .checked_add_days(Days::new(BUSINESS_DAYS_AFTER_MONDAY))
        .ok_or_else(|| out_of_range(monday))
}

fn out_of_range(date: NaiveDate) -> AppError {
    AppError::validation_with_details("date outside supported range", json!({"date": date.to_string()}))
}

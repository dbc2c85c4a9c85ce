use chrono::{Duration, Local, NaiveDate};

/// Today as a local calendar date. All ledger operations key on local
/// dates, not UTC, so a late-evening workout counts for the day the
/// user experienced.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::days(delta)
}

pub fn is_yesterday(candidate: NaiveDate, today: NaiveDate) -> bool {
    candidate == add_days(today, -1)
}

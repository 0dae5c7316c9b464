//! Display formatting for dates and counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::{Date, Month};

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

/// "May 15, 2025". Used on the detail page.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// "Jun 1, 2025". Used on showcase cards.
#[must_use]
pub fn short_date(date: Date) -> String {
    let name = month_name(date.month());
    format!("{} {}, {}", &name[..3], date.day(), date.year())
}

/// Whole days between `published` and `today`, never negative.
#[must_use]
pub fn days_live(published: Date, today: Date) -> i64 {
    (today - published).whole_days().max(0)
}

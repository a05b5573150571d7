//! UTC month arithmetic over unix timestamps (proleptic Gregorian calendar).

const SECONDS_PER_DAY: u64 = 86_400;

// Days since 1970-01-01 for a civil date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let shifted_month = (if month > 2 { month - 3 } else { month + 9 }) as i64;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

// Civil (year, month) of a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32) {
    let days = days + 719_468;
    let era = (if days >= 0 { days } else { days - 146_096 }) / 146_097;
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u32;
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month)
}

fn timestamp_of(year: i64, month: u32) -> Option<u64> {
    let days = days_from_civil(year, month, 1);
    u64::try_from(days).ok()?.checked_mul(SECONDS_PER_DAY)
}

fn year_month(timestamp: u64) -> Option<(i64, u32)> {
    let days = i64::try_from(timestamp / SECONDS_PER_DAY).ok()?;
    Some(civil_from_days(days))
}

/// Start of the UTC month containing `timestamp`.
pub fn month_start(timestamp: u64) -> Option<u64> {
    let (year, month) = year_month(timestamp)?;
    timestamp_of(year, month)
}

/// Start of the UTC month after the one containing `timestamp`. A timestamp
/// sitting exactly on a month start still moves to the following month.
pub fn next_month_start(timestamp: u64) -> Option<u64> {
    let (year, month) = year_month(timestamp)?;
    if month == 12 {
        timestamp_of(year + 1, 1)
    } else {
        timestamp_of(year, month + 1)
    }
}

pub fn is_month_start(timestamp: u64) -> bool {
    month_start(timestamp) == Some(timestamp)
}

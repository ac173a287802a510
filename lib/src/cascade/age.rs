// lib/src/cascade/age.rs

use chrono::{Datelike, NaiveDate};

/// Whole years between `birth` and `today`, one less while this year's
/// birthday is still ahead. A birthday on 29 February counts as reached on
/// 1 March in non-leap years. Birth dates after `today` give a negative age.
pub fn calendar_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

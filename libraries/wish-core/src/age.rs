//! Age computation
//!
//! Every view computes age the same way: whole years elapsed, counting the
//! birthday only once its month and day have been reached.

use chrono::{Datelike, NaiveDate, Utc};

/// Age in whole years on `today` for someone born on `birth`.
///
/// A birth date in the future yields a negative age.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Age in whole years as of the current UTC date
pub fn age_today(birth: NaiveDate) -> i32 {
    age_on(birth, Utc::now().date_naive())
}

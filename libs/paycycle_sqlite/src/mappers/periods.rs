use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::sqlite::SqliteConnection;

use crate::models::{NewPayPeriod, PayPeriod};

/// Insert-if-absent against the `(employer_id, start_date)` unique key.
/// Concurrent materializations of the same period neither error nor
/// duplicate; the row count says whether this call created the row.
pub fn insert_if_absent(conn: &mut SqliteConnection, period: &NewPayPeriod) -> Result<usize, Error> {
    use crate::schema::pay_periods;

    diesel::insert_into(pay_periods::table)
        .values(period)
        .on_conflict_do_nothing()
        .execute(conn)
}

/// Periods of an employer whose start dates are in `starts`, newest first.
pub fn list_by_starts(
    conn: &mut SqliteConnection,
    for_employer_id: i32,
    starts: &[NaiveDate],
) -> Result<Vec<PayPeriod>, Error> {
    use crate::schema::pay_periods::dsl::*;

    pay_periods
        .filter(employer_id.eq(for_employer_id))
        .filter(start_date.eq_any(starts))
        .order(start_date.desc())
        .load(conn)
}

pub fn find_period_scoped(
    conn: &mut SqliteConnection,
    period_id: i32,
    for_employer_id: i32,
) -> Result<PayPeriod, Error> {
    use crate::schema::pay_periods::dsl::*;

    pay_periods
        .filter(id.eq(period_id))
        .filter(employer_id.eq(for_employer_id))
        .first(conn)
}

pub fn set_period_active(
    conn: &mut SqliteConnection,
    period_id: i32,
    for_employer_id: i32,
    new_active: bool,
) -> Result<usize, Error> {
    use crate::schema::pay_periods::dsl::*;

    diesel::update(
        pay_periods
            .filter(id.eq(period_id))
            .filter(employer_id.eq(for_employer_id)),
    )
    .set(is_active.eq(new_active))
    .execute(conn)
}

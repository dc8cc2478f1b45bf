use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::sqlite::SqliteConnection;

use crate::models::{NewTimeEntry, TimeEntry};

/// Delete the employee's shifts clocked in inside `[from, until)`.
pub fn delete_window(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDateTime,
    until: NaiveDateTime,
) -> Result<usize, Error> {
    use crate::schema::time_entries::dsl::*;

    diesel::delete(
        time_entries
            .filter(employee_id.eq(for_employee_id))
            .filter(time_in.ge(from))
            .filter(time_in.lt(until)),
    )
    .execute(conn)
}

pub fn insert_entries(conn: &mut SqliteConnection, entries: &[NewTimeEntry]) -> Result<usize, Error> {
    use crate::schema::time_entries;

    diesel::insert_into(time_entries::table)
        .values(entries)
        .execute(conn)
}

pub fn list_window(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDateTime,
    until: NaiveDateTime,
) -> Result<Vec<TimeEntry>, Error> {
    use crate::schema::time_entries::dsl::*;

    time_entries
        .filter(employee_id.eq(for_employee_id))
        .filter(time_in.ge(from))
        .filter(time_in.lt(until))
        .order(time_in)
        .load(conn)
}

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::sqlite::SqliteConnection;

use crate::models::{MiscHoursEntry, NewMiscHoursEntry, NewPtoEntry, PtoEntry};

pub fn delete_pto_range(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<usize, Error> {
    use crate::schema::pto_entries::dsl::*;

    diesel::delete(
        pto_entries
            .filter(employee_id.eq(for_employee_id))
            .filter(entry_date.ge(from))
            .filter(entry_date.le(to)),
    )
    .execute(conn)
}

pub fn insert_pto(conn: &mut SqliteConnection, entry: &NewPtoEntry) -> Result<usize, Error> {
    use crate::schema::pto_entries;

    diesel::insert_into(pto_entries::table)
        .values(entry)
        .execute(conn)
}

pub fn list_pto_range(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<PtoEntry>, Error> {
    use crate::schema::pto_entries::dsl::*;

    pto_entries
        .filter(employee_id.eq(for_employee_id))
        .filter(entry_date.ge(from))
        .filter(entry_date.le(to))
        .order(entry_date)
        .load(conn)
}

pub fn delete_misc_range(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<usize, Error> {
    use crate::schema::misc_hours_entries::dsl::*;

    diesel::delete(
        misc_hours_entries
            .filter(employee_id.eq(for_employee_id))
            .filter(entry_date.ge(from))
            .filter(entry_date.le(to)),
    )
    .execute(conn)
}

pub fn insert_misc(conn: &mut SqliteConnection, entry: &NewMiscHoursEntry) -> Result<usize, Error> {
    use crate::schema::misc_hours_entries;

    diesel::insert_into(misc_hours_entries::table)
        .values(entry)
        .execute(conn)
}

pub fn list_misc_range(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<MiscHoursEntry>, Error> {
    use crate::schema::misc_hours_entries::dsl::*;

    misc_hours_entries
        .filter(employee_id.eq(for_employee_id))
        .filter(entry_date.ge(from))
        .filter(entry_date.le(to))
        .order(entry_date)
        .load(conn)
}

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::sqlite::SqliteConnection;

use crate::models::{NewReimbursementEntry, ReimbursementEntry};

pub fn delete_range(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<usize, Error> {
    use crate::schema::reimbursement_entries::dsl::*;

    diesel::delete(
        reimbursement_entries
            .filter(employee_id.eq(for_employee_id))
            .filter(entry_date.ge(from))
            .filter(entry_date.le(to)),
    )
    .execute(conn)
}

pub fn insert_entry(conn: &mut SqliteConnection, entry: &NewReimbursementEntry) -> Result<usize, Error> {
    use crate::schema::reimbursement_entries;

    diesel::insert_into(reimbursement_entries::table)
        .values(entry)
        .execute(conn)
}

pub fn list_range(
    conn: &mut SqliteConnection,
    for_employee_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<ReimbursementEntry>, Error> {
    use crate::schema::reimbursement_entries::dsl::*;

    reimbursement_entries
        .filter(employee_id.eq(for_employee_id))
        .filter(entry_date.ge(from))
        .filter(entry_date.le(to))
        .order(entry_date)
        .load(conn)
}

use diesel::prelude::*;
use diesel::result::Error;
use diesel::sqlite::SqliteConnection;

use crate::models::{Employer, NewEmployer};

pub fn create_employer(conn: &mut SqliteConnection, employer: &NewEmployer) -> Result<Employer, Error> {
    use crate::schema::employers;

    diesel::insert_into(employers::table)
        .values(employer)
        .get_result(conn)
}

pub fn find_employer(conn: &mut SqliteConnection, employer_id: i32) -> Result<Employer, Error> {
    use crate::schema::employers::dsl::*;

    employers
        .filter(id.eq(employer_id))
        .first(conn)
}

/// Employer-level payroll reset: drops every pay period of the employer
/// together with all time/leave/expense rows of its employees. The caller
/// wraps this in a transaction.
pub fn reset_payroll(conn: &mut SqliteConnection, target_employer_id: i32) -> Result<(), Error> {
    use crate::schema::{employees, misc_hours_entries, pay_periods, pto_entries, reimbursement_entries, time_entries};

    let employee_ids = employees::table
        .filter(employees::employer_id.eq(target_employer_id))
        .select(employees::id);

    let deleted_time = diesel::delete(
        time_entries::table.filter(time_entries::employee_id.eq_any(employee_ids.clone())),
    )
    .execute(conn)?;
    let deleted_pto = diesel::delete(
        pto_entries::table.filter(pto_entries::employee_id.eq_any(employee_ids.clone())),
    )
    .execute(conn)?;
    let deleted_misc = diesel::delete(
        misc_hours_entries::table.filter(misc_hours_entries::employee_id.eq_any(employee_ids.clone())),
    )
    .execute(conn)?;
    let deleted_reimb = diesel::delete(
        reimbursement_entries::table.filter(reimbursement_entries::employee_id.eq_any(employee_ids)),
    )
    .execute(conn)?;
    let deleted_periods = diesel::delete(
        pay_periods::table.filter(pay_periods::employer_id.eq(target_employer_id)),
    )
    .execute(conn)?;

    log::debug!(
        "payroll reset for employer {target_employer_id}: {deleted_periods} periods, {deleted_time} time, {deleted_pto} pto, {deleted_misc} misc, {deleted_reimb} reimbursement rows"
    );

    Ok(())
}

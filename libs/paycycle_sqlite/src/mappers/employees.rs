use diesel::prelude::*;
use diesel::result::Error;
use diesel::sqlite::SqliteConnection;

use crate::models::{Employee, NewEmployee};

pub fn create_employee(conn: &mut SqliteConnection, employee: &NewEmployee) -> Result<Employee, Error> {
    use crate::schema::employees;

    diesel::insert_into(employees::table)
        .values(employee)
        .get_result(conn)
}

pub fn list_active_employees(conn: &mut SqliteConnection, for_employer_id: i32) -> Result<Vec<Employee>, Error> {
    use crate::schema::employees::dsl::*;

    employees
        .filter(employer_id.eq(for_employer_id))
        .filter(is_active.eq(true))
        .order(name)
        .load(conn)
}

/// Scoped lookup: yields `Error::NotFound` when the employee does not exist
/// *or* belongs to another employer, so access failures are indistinguishable
/// from missing rows.
pub fn find_employee_scoped(
    conn: &mut SqliteConnection,
    employee_id: i32,
    for_employer_id: i32,
) -> Result<Employee, Error> {
    use crate::schema::employees::dsl::*;

    employees
        .filter(id.eq(employee_id))
        .filter(employer_id.eq(for_employer_id))
        .first(conn)
}

pub fn set_employee_active(
    conn: &mut SqliteConnection,
    employee_id: i32,
    for_employer_id: i32,
    new_active: bool,
) -> Result<usize, Error> {
    use crate::schema::employees::dsl::*;

    diesel::update(
        employees
            .filter(id.eq(employee_id))
            .filter(employer_id.eq(for_employer_id)),
    )
    .set(is_active.eq(new_active))
    .execute(conn)
}

use std::sync::Mutex;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Handle over a single guarded SQLite connection.
///
/// One writer at a time: every mapper call goes through [`DB::with_conn`],
/// so reconciliations against the same database serialize instead of
/// interleaving. Migrations run once at open.
pub struct DB {
    connection: Mutex<SqliteConnection>,
}

impl DB {
    pub fn new(connection_string: &str) -> DB {
        let mut connection = SqliteConnection::establish(connection_string)
            .unwrap_or_else(|e| panic!("Error connecting to database at {connection_string}: {e}"));

        sql_query("PRAGMA foreign_keys = ON")
            .execute(&mut connection)
            .expect("Should be able to enable foreign_keys");

        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .expect("Error running pending migrations");
        for migration in applied {
            log::info!("applied migration {migration}");
        }

        DB {
            connection: Mutex::new(connection),
        }
    }

    pub fn with_conn<R>(&self, f: impl FnOnce(&mut SqliteConnection) -> R) -> R {
        let mut conn = self
            .connection
            .lock()
            .expect("payroll db lock poisoned");
        f(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::mappers::{employees, employers, leave, reimbursements};
    use crate::models::{NewEmployee, NewEmployer, NewPtoEntry, NewReimbursementEntry};

    use super::*;

    #[test]
    fn failed_insert_rolls_back_earlier_deletes() {
        let db = DB::new(":memory:");
        db.with_conn(|conn| {
            let employer = employers::create_employer(
                conn,
                &NewEmployer {
                    name: "Acme".to_string(),
                    pay_period_start_date: None,
                    mileage_rate: 0.5,
                    week_starts_on: 0,
                },
            )
            .unwrap();
            let employee = employees::create_employee(
                conn,
                &NewEmployee {
                    employer_id: employer.id,
                    name: "Ada".to_string(),
                },
            )
            .unwrap();

            let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
            let end = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
            leave::insert_pto(
                conn,
                &NewPtoEntry {
                    employee_id: employee.id,
                    entry_date: start,
                    hours: 8.0,
                },
            )
            .unwrap();

            // NaN binds as NULL in sqlite, so this insert trips the
            // NOT NULL constraint after the delete already ran
            let outcome = conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
                leave::delete_pto_range(conn, employee.id, start, end)?;
                reimbursements::insert_entry(
                    conn,
                    &NewReimbursementEntry {
                        employee_id: employee.id,
                        entry_date: start,
                        amount: f64::NAN,
                        description: String::new(),
                        mileage_miles: None,
                        mileage_amount: None,
                        manual_amount: None,
                        manual_description: None,
                    },
                )?;
                Ok(())
            });
            assert!(outcome.is_err());

            let surviving = leave::list_pto_range(conn, employee.id, start, end).unwrap();
            assert_eq!(surviving.len(), 1);
            assert_eq!(surviving[0].hours, 8.0);
        });
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::Serialize;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = employers)]
pub struct NewEmployer {
    pub name: String,
    pub pay_period_start_date: Option<NaiveDate>,
    pub mileage_rate: f64,
    pub week_starts_on: i32,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct Employer {
    pub id: i32,
    pub name: String,
    pub pay_period_start_date: Option<NaiveDate>,
    pub mileage_rate: f64,
    pub week_starts_on: i32,
}

#[derive(Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployee {
    pub employer_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct Employee {
    pub id: i32,
    pub employer_id: i32,
    pub name: String,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = pay_periods)]
pub struct NewPayPeriod {
    pub employer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize)]
pub struct PayPeriod {
    pub id: i32,
    pub employer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = time_entries)]
pub struct NewTimeEntry {
    pub employee_id: i32,
    pub time_in: NaiveDateTime,
    pub time_out: Option<NaiveDateTime>,
    pub lunch_minutes: i32,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct TimeEntry {
    pub id: i32,
    pub employee_id: i32,
    pub time_in: NaiveDateTime,
    pub time_out: Option<NaiveDateTime>,
    pub lunch_minutes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = pto_entries)]
pub struct NewPtoEntry {
    pub employee_id: i32,
    pub entry_date: NaiveDate,
    pub hours: f64,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct PtoEntry {
    pub id: i32,
    pub employee_id: i32,
    pub entry_date: NaiveDate,
    pub hours: f64,
}

#[derive(Insertable)]
#[diesel(table_name = misc_hours_entries)]
pub struct NewMiscHoursEntry {
    pub employee_id: i32,
    pub entry_date: NaiveDate,
    pub entry_type: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct MiscHoursEntry {
    pub id: i32,
    pub employee_id: i32,
    pub entry_date: NaiveDate,
    pub entry_type: String,
    pub hours: f64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = reimbursement_entries)]
pub struct NewReimbursementEntry {
    pub employee_id: i32,
    pub entry_date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub mileage_miles: Option<i32>,
    pub mileage_amount: Option<f64>,
    pub manual_amount: Option<f64>,
    pub manual_description: Option<String>,
}

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct ReimbursementEntry {
    pub id: i32,
    pub employee_id: i32,
    pub entry_date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub mileage_miles: Option<i32>,
    pub mileage_amount: Option<f64>,
    pub manual_amount: Option<f64>,
    pub manual_description: Option<String>,
}

diesel::table! {
    employers (id) {
        id -> Integer,
        name -> Text,
        pay_period_start_date -> Nullable<Date>,
        mileage_rate -> Double,
        week_starts_on -> Integer,
    }
}

diesel::table! {
    employees (id) {
        id -> Integer,
        employer_id -> Integer,
        name -> Text,
        is_active -> Bool,
    }
}

diesel::table! {
    pay_periods (id) {
        id -> Integer,
        employer_id -> Integer,
        start_date -> Date,
        end_date -> Date,
        is_active -> Bool,
    }
}

diesel::table! {
    time_entries (id) {
        id -> Integer,
        employee_id -> Integer,
        time_in -> Timestamp,
        time_out -> Nullable<Timestamp>,
        lunch_minutes -> Integer,
    }
}

diesel::table! {
    pto_entries (id) {
        id -> Integer,
        employee_id -> Integer,
        entry_date -> Date,
        hours -> Double,
    }
}

diesel::table! {
    misc_hours_entries (id) {
        id -> Integer,
        employee_id -> Integer,
        entry_date -> Date,
        entry_type -> Text,
        hours -> Double,
    }
}

diesel::table! {
    reimbursement_entries (id) {
        id -> Integer,
        employee_id -> Integer,
        entry_date -> Date,
        amount -> Double,
        description -> Text,
        mileage_miles -> Nullable<Integer>,
        mileage_amount -> Nullable<Double>,
        manual_amount -> Nullable<Double>,
        manual_description -> Nullable<Text>,
    }
}

diesel::joinable!(employees -> employers (employer_id));
diesel::joinable!(pay_periods -> employers (employer_id));
diesel::joinable!(time_entries -> employees (employee_id));
diesel::joinable!(pto_entries -> employees (employee_id));
diesel::joinable!(misc_hours_entries -> employees (employee_id));
diesel::joinable!(reimbursement_entries -> employees (employee_id));

diesel::allow_tables_to_appear_in_same_query!(
    employers,
    employees,
    pay_periods,
    time_entries,
    pto_entries,
    misc_hours_entries,
    reimbursement_entries,
);

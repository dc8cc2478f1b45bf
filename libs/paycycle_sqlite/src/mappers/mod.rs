pub mod employers;
pub mod employees;
pub mod periods;
pub mod time_entries;
pub mod leave;
pub mod reimbursements;

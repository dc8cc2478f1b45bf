pub mod schema;
pub mod models;
pub mod mappers;

pub mod connection;
pub mod constants;

pub use diesel;

pub mod connection;
pub mod profile;
mod schema;

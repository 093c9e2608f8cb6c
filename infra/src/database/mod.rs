//! Database access layer built on SQLx and MySQL

pub mod connection;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlAccountRepository;

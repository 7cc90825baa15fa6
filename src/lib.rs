pub mod catalog;
pub mod config;
pub mod database;
pub mod error;

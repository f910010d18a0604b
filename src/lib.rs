pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod ui;

//! Command-line front end for the candidate screener.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod session;
pub mod summary;

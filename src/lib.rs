//! ssoquery library interface
//!
//! Queries solar-system object services and reshapes their answers into
//! tables.
//!
//! # Module Organization
//!
//! - [`angle`] - Sexagesimal and decimal angle parsing
//! - [`skybot`] - SkyBoT cone-search parameters, banner and client
//! - [`table`] - Pipe-delimited payload parsing and table output
//! - [`mpc`] - Minor Planet Center orbit lookup
//! - [`errors`] - Error types (SsoError, Result)
//! - [`core`] - Main execution logic

pub mod angle;
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod mpc;
pub mod skybot;
pub mod status;
pub mod table;

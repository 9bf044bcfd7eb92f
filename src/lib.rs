//! hostsctl - keep override entries present in (or absent from) the OS hosts file.

pub mod alert;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod platform;

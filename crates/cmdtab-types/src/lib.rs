//! Foundation types for the cmdtab dispatch table.
//!
//! This crate contains the pieces shared by every cmdtab crate: the error
//! taxonomy and the table tuning configuration.

pub mod config;
pub mod error;

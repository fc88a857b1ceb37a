//! CLI library components for sentify.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

pub mod cli;
pub mod commands;
pub mod config;
pub mod docs;
pub mod error;
pub mod keywords;
pub mod oracle;
pub mod output;
pub mod project;
pub mod rules;
pub mod runner;
pub mod scanner;

pub use error::{GuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RULE_VIOLATION: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

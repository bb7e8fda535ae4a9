mod check;
mod context;

pub use check::{determine_exit_code, run_check};

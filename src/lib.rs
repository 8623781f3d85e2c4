pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod input;
pub mod locale;
pub mod shell;
pub mod task;

#[cfg(test)]
pub mod test_helpers;

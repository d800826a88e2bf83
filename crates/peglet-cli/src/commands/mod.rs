pub mod check;
pub mod dump;
pub mod exec;
pub mod generate;
pub mod loader;
pub mod trace;

#[cfg(test)]
mod dump_tests;

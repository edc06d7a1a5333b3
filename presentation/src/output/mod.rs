//! Console output for the headless subcommands

pub mod console;

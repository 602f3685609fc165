//! Command handlers.
//!
//! Each handler is a thin wrapper: build the library objects from CLI
//! arguments, run them, and format output for the terminal.

pub mod generate;
pub mod serve;

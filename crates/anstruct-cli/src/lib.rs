#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary in main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;

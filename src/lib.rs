pub mod cli;
pub mod command;
mod error;
pub mod notify;
pub mod style;
pub mod utils;

pub use error::{Context, Result};

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

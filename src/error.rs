pub use anyhow::Context;

/// Every command returns this; setup problems are the only errors that reach `main`
pub type Result<T> = std::result::Result<T, anyhow::Error>;

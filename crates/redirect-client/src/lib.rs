#![deny(missing_docs)]

//! Client for the foundry redirect service.
//!
//! The service maps a device identity to the address the device was last seen
//! at, and lets the owner claim a human readable alias for it.

mod client;
mod error;
mod identity;
mod notify;
mod operations;
mod types;
mod validation;

pub use client::{messages, RedirectClient};
pub use error::RedirectClientError;
pub use identity::IdentityProvider;
pub use notify::{Notifier, TracingNotifier};
pub use types::{CustomAddressStatus, CustomizeAddressResponse, DeviceIdentity, RedirectAddresses};
pub use validation::is_valid_custom_address;

/// The production redirect service
pub const PRODUCTION_URL: &str = "https://foundryredirect.com";

/// The staging deployment of the redirect service
pub const TEST_URL: &str = "https://9fq01qzza7.execute-api.us-west-2.amazonaws.com/test";

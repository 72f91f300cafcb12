#![cfg_attr(
    not(test),
    deny(
        clippy::panic,
    )
)]

#![deny(missing_docs)]

//! Persists the identifier this device uses with the redirect service.

mod error;
pub mod home;
mod provider;

pub use error::BeaconError;
pub use provider::{FileIdentityProvider, StaticIdentityProvider, IDENTITY_FILE_NAME};

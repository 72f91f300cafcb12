#![warn(missing_docs)]

//! Provides the [`tower`] HTTP transport used to talk to the redirect service

use std::time::Duration;

/// Install ring as the default rustls crypto provider. This runs automatically
/// as a global constructor in every binary that links redirect-http (directly or
/// transitively).
#[ctor::ctor]
fn install_ring_crypto_provider() {
    // .ok() because the provider may already be installed, and that's the only
    // case that causes this to error
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();
}

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
use http_body_util::Full;
use tower::{timeout::error::Elapsed, util::BoxCloneSyncService};

pub mod body;
mod error;
pub mod extend_headers;
mod reqwest;

pub use error::HttpServiceError;
pub use reqwest::ReqwestService;

/// How long a request may take before it resolves to [`HttpServiceError::TimedOut`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Ease-of-use synonym for the request type this crate operates on
pub type HttpRequest = http::Request<Full<Bytes>>;
/// Ease-of-use synonym for the response type this crate operates on
pub type HttpResponse<T = Full<Bytes>> = http::Response<T>;
/// Ease-of-use synonym for the [`tower::Service`] type this crate provides
pub type HttpService = BoxCloneSyncService<HttpRequest, HttpResponse, HttpServiceError>;

/// Configuration object for constructing an [`HttpService`].
/// This is intended to be agnostic to the underlying implementation
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    timeout: Option<Duration>,
}

impl From<Box<dyn std::error::Error + Send + Sync>> for HttpServiceError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<Elapsed>() {
            Ok(_) => HttpServiceError::TimedOut,
            Err(err) => match err.downcast::<HttpServiceError>() {
                Ok(err) => *err,
                Err(err) => match err.downcast::<::reqwest::Error>() {
                    Ok(err) => HttpServiceError::from(*err),
                    Err(err) => HttpServiceError::Unexpected(err),
                },
            },
        }
    }
}

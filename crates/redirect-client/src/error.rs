use redirect_http::HttpServiceError;
use thiserror::Error;

/// RedirectClientError describes why a request to the redirect service could not complete.
///
/// Requests made through [`crate::RedirectClient`] log these and fall back to the
/// default result of each operation.
#[derive(Error, Debug)]
pub enum RedirectClientError {
    /// The base URL cannot have path segments appended to it
    #[error("'{url}' cannot be used as a redirect service URL.")]
    InvalidBaseUrl {
        /// the rejected URL
        url: String,
    },

    /// A default header could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The request could not be assembled
    #[error("Could not build the request: {0}")]
    InvalidRequest(#[from] http::Error),

    /// The request failed in transit
    #[error("Could not reach the redirect service: {0}")]
    Http(#[from] HttpServiceError),
}

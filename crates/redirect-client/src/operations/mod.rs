//! One module per request the redirect service understands.
//!
//! Each `run` is fallible; [`crate::RedirectClient`] decides what a failure turns into.

pub(crate) mod availability;
pub(crate) mod customize;
pub(crate) mod lookup;
pub(crate) mod register;

use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::Full;
use redirect_http::{body::body_to_text, HttpService};
use tower::{Service, ServiceExt};
use url::Url;

use crate::RedirectClientError;

pub(crate) const FOUNDRY_ID_PARAM: &str = "foundry_id";
pub(crate) const EXTERNAL_ADDRESS_PARAM: &str = "external_address";
pub(crate) const INTERNAL_ADDRESS_PARAM: &str = "internal_address";
pub(crate) const PUBLIC_ID_PARAM: &str = "public_id";

const CUSTOMIZE_PATH: &str = "customize";

/// Status and body text of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) text: String,
}

/// `<base>/customize`, keeping any path the base URL already has
pub(crate) fn customize_url(base_url: &Url) -> Result<Url, RedirectClientError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| RedirectClientError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?
        .pop_if_empty()
        .push(CUSTOMIZE_PATH);
    Ok(url)
}

pub(crate) fn with_query(mut url: Url, params: &[(&str, &str)]) -> Url {
    url.query_pairs_mut().extend_pairs(params.iter().copied());
    url
}

pub(crate) async fn send(
    service: &HttpService,
    method: Method,
    url: Url,
) -> Result<RawResponse, RedirectClientError> {
    tracing::debug!(%method, %url, "calling redirect service");
    let request = http::Request::builder()
        .method(method)
        .uri(url.as_str())
        .body(Full::<Bytes>::default())?;

    let mut service = service.clone();
    let response = service.ready().await?.call(request).await?;
    let status = response.status();
    let mut body = response.into_body();
    let text = body_to_text(&mut body)
        .await
        .unwrap_or_else(|never| match never {});
    tracing::trace!(%status, %text, "redirect service responded");
    Ok(RawResponse { status, text })
}

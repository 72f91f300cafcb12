use http::{Method, StatusCode};
use redirect_http::HttpService;
use url::Url;

use super::{customize_url, send, with_query, PUBLIC_ID_PARAM};
use crate::{CustomAddressStatus, RedirectClientError};

pub(crate) async fn run(
    service: &HttpService,
    base_url: &Url,
    candidate: &str,
) -> Result<CustomAddressStatus, RedirectClientError> {
    let url = with_query(customize_url(base_url)?, &[(PUBLIC_ID_PARAM, candidate)]);
    let response = send(service, Method::GET, url).await?;
    Ok(CustomAddressStatus {
        is_available: response.status == StatusCode::OK,
        message: response.text,
    })
}

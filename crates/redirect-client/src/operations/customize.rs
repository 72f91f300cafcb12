use http::{Method, StatusCode};
use redirect_http::HttpService;
use url::Url;

use super::{customize_url, send, with_query, FOUNDRY_ID_PARAM, PUBLIC_ID_PARAM};
use crate::{CustomizeAddressResponse, DeviceIdentity, RedirectClientError};

pub(crate) async fn run(
    service: &HttpService,
    base_url: &Url,
    identity: &DeviceIdentity,
    candidate: &str,
) -> Result<CustomizeAddressResponse, RedirectClientError> {
    let url = with_query(
        customize_url(base_url)?,
        &[
            (FOUNDRY_ID_PARAM, identity.as_ref()),
            (PUBLIC_ID_PARAM, candidate),
        ],
    );
    let response = send(service, Method::GET, url).await?;
    Ok(CustomizeAddressResponse {
        success: response.status == StatusCode::OK,
        message: response.text,
    })
}

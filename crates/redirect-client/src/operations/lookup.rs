use http::Method;
use redirect_http::HttpService;
use url::Url;

use super::{send, with_query, FOUNDRY_ID_PARAM};
use crate::{DeviceIdentity, RedirectClientError};

/// Asks the service where `identity` was last registered.
/// Returns the body text whatever the status code was.
pub(crate) async fn run(
    service: &HttpService,
    base_url: &Url,
    identity: &DeviceIdentity,
) -> Result<String, RedirectClientError> {
    let url = with_query(base_url.clone(), &[(FOUNDRY_ID_PARAM, identity.as_ref())]);
    Ok(send(service, Method::GET, url).await?.text)
}

use http::Method;
use redirect_http::HttpService;
use url::Url;

use super::{send, with_query, EXTERNAL_ADDRESS_PARAM, FOUNDRY_ID_PARAM, INTERNAL_ADDRESS_PARAM};
use crate::RedirectClientError;

/// The addresses a device reports about itself
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegisterInput<'a> {
    pub(crate) device_id: &'a str,
    pub(crate) external_address: &'a str,
    pub(crate) local_address: &'a str,
}

/// POSTs the device's addresses to the service root.
/// Any response counts as delivered; the status is not inspected.
pub(crate) async fn run(
    service: &HttpService,
    base_url: &Url,
    input: RegisterInput<'_>,
) -> Result<(), RedirectClientError> {
    let url = with_query(
        base_url.clone(),
        &[
            (FOUNDRY_ID_PARAM, input.device_id),
            (EXTERNAL_ADDRESS_PARAM, input.external_address),
            (INTERNAL_ADDRESS_PARAM, input.local_address),
        ],
    );
    let response = send(service, Method::POST, url).await?;
    tracing::trace!(status = %response.status, "registered addresses");
    Ok(())
}

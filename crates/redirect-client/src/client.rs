use std::{fmt, sync::Arc};

use buildstructor::buildstructor;
use http::{header::USER_AGENT, HeaderMap, HeaderValue};
use redirect_http::{extend_headers::ExtendHeadersLayer, HttpService};
use tower::{util::BoxCloneSyncService, ServiceBuilder};
use url::Url;

use crate::{
    operations::{
        availability, customize, lookup,
        register::{self, RegisterInput},
    },
    validation::is_valid_custom_address,
    CustomAddressStatus, CustomizeAddressResponse, DeviceIdentity, IdentityProvider, Notifier,
    RedirectAddresses, RedirectClientError, TracingNotifier,
};

const CLIENT_NAME: &str = "foundry-redirect";

/// the version of redirect-client currently set in `Cargo.toml`
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed text reported by [`RedirectClient`] when it has no answer from the service
pub mod messages {
    /// debug log after addresses were posted
    pub const REGISTERED: &str = "Foundry redirect: Successfully updated server address on server";
    /// shown to the user when addresses could not be posted
    pub const REGISTER_FAILED: &str = "Failed to post server address to redirect server";
    /// prefix of the debug log carrying the lookup response
    pub const LOOKUP_RESPONSE: &str = "Fetch redirect address response: ";
    /// shown to the user when the redirect address could not be fetched
    pub const LOOKUP_FAILED: &str = "Failed to fetch foundry redirect address from server";
    /// returned when an alias has no letters or digits
    pub const INVALID_CUSTOM_ADDRESS: &str =
        "Custom address must contain only letters and numbers";
    /// returned when availability could not be checked
    pub const AVAILABILITY_FAILED: &str = "Could not check if address is available";
    /// returned when an alias could not be claimed
    pub const CUSTOMIZE_FAILED: &str = "Error connecting to server to change redirect address";
}

/// Talks to the redirect service on behalf of this device.
///
/// None of the operations return errors. A request that never gets an answer
/// is logged and turned into the operation's default result.
#[derive(Clone)]
pub struct RedirectClient {
    base_url: Url,
    service: HttpService,
    identity_provider: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for RedirectClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[buildstructor]
impl RedirectClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// `notifier` defaults to [`TracingNotifier`], `client_version` to this crate's version.
    #[builder]
    pub fn new(
        base_url: Url,
        http_service: HttpService,
        identity_provider: Arc<dyn IdentityProvider>,
        notifier: Option<Arc<dyn Notifier>>,
        client_version: Option<String>,
    ) -> Result<RedirectClient, RedirectClientError> {
        let client_version = client_version.unwrap_or_else(|| CLIENT_VERSION.to_string());
        tracing::debug!(%base_url, ?client_version);

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&format!("{}/{}", CLIENT_NAME, client_version))?;
        headers.insert(USER_AGENT, user_agent);

        let service = BoxCloneSyncService::new(
            ServiceBuilder::new()
                .layer(ExtendHeadersLayer::new(headers))
                .service(http_service),
        );

        Ok(RedirectClient {
            base_url,
            service,
            identity_provider,
            notifier: notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
        })
    }

    /// The service this client talks to
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The identity lookups and alias claims are made for
    pub fn device_identity(&self) -> DeviceIdentity {
        self.identity_provider.get_or_create_device_identity()
    }

    /// Reports where `device_id` can be reached.
    ///
    /// Any response from the service counts as success. If the request fails
    /// the user is notified.
    pub async fn post_foundry_info(
        &self,
        device_id: &str,
        external_address: &str,
        local_address: &str,
    ) {
        let input = RegisterInput {
            device_id,
            external_address,
            local_address,
        };
        match register::run(&self.service, &self.base_url, input).await {
            Ok(()) => self.notifier.debug_log(messages::REGISTERED),
            Err(error) => {
                tracing::error!(%error, "could not post addresses");
                self.notifier
                    .display_error_message_to_user(messages::REGISTER_FAILED);
            }
        }
    }

    /// Fetches where this device was last registered.
    ///
    /// The whole response body is taken as the external address. Returns
    /// `None`, after notifying the user, if the request fails.
    pub async fn get_redirect_address(&self) -> Option<RedirectAddresses> {
        let identity = self.device_identity();
        match lookup::run(&self.service, &self.base_url, &identity).await {
            Ok(text) => {
                self.notifier
                    .debug_log(&format!("{}{}", messages::LOOKUP_RESPONSE, text));
                Some(RedirectAddresses::from_external(text))
            }
            Err(error) => {
                tracing::error!(%error, "could not fetch redirect address");
                self.notifier
                    .display_error_message_to_user(messages::LOOKUP_FAILED);
                None
            }
        }
    }

    /// Asks whether `candidate` can be claimed as an alias.
    ///
    /// Candidates without a single letter or digit are refused without a request.
    pub async fn check_custom_address(&self, candidate: &str) -> CustomAddressStatus {
        if !is_valid_custom_address(candidate) {
            return CustomAddressStatus {
                is_available: false,
                message: messages::INVALID_CUSTOM_ADDRESS.to_string(),
            };
        }
        availability::run(&self.service, &self.base_url, candidate)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(%error, candidate, "could not check custom address");
                CustomAddressStatus {
                    is_available: false,
                    message: messages::AVAILABILITY_FAILED.to_string(),
                }
            })
    }

    /// Claims `candidate` as this device's alias
    pub async fn customize_redirect_address(&self, candidate: &str) -> CustomizeAddressResponse {
        let identity = self.device_identity();
        customize::run(&self.service, &self.base_url, &identity, candidate)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(%error, candidate, "could not customize redirect address");
                CustomizeAddressResponse {
                    success: false,
                    message: messages::CUSTOMIZE_FAILED.to_string(),
                }
            })
    }
}

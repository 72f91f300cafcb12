use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use httpmock::{Method, MockServer};
use redirect_client::{
    CustomAddressStatus, CustomizeAddressResponse, DeviceIdentity, IdentityProvider, Notifier,
    RedirectAddresses, RedirectClient,
};
use redirect_http::{HttpServiceConfig, ReqwestService};
use speculoos::prelude::*;
use url::Url;

struct Identity;

impl IdentityProvider for Identity {
    fn get_or_create_device_identity(&self) -> DeviceIdentity {
        DeviceIdentity::new("device-under-test")
    }
}

#[derive(Default)]
struct CountingNotifier {
    user_messages: AtomicUsize,
}

impl Notifier for CountingNotifier {
    fn debug_log(&self, _message: &str) {}

    fn display_error_message_to_user(&self, _message: &str) {
        self.user_messages.fetch_add(1, Ordering::SeqCst);
    }
}

fn client(base_url: &str, notifier: Arc<CountingNotifier>) -> RedirectClient {
    let http_service = ReqwestService::builder()
        .config(HttpServiceConfig::builder().build())
        .build()
        .expect("could not build http service");
    RedirectClient::builder()
        .base_url(Url::parse(base_url).expect("invalid base url"))
        .http_service(http_service)
        .identity_provider(Arc::new(Identity) as Arc<dyn IdentityProvider>)
        .notifier(notifier as Arc<dyn Notifier>)
        .build()
        .expect("could not build client")
}

#[tokio::test]
async fn a_registered_device_can_claim_an_alias() {
    let server = MockServer::start();
    let notifier = Arc::new(CountingNotifier::default());
    let client = client(&server.base_url(), notifier.clone());

    let register = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/")
            .query_param("foundry_id", "device-under-test")
            .query_param("external_address", "1.2.3.4")
            .query_param("internal_address", "192.168.0.2");
        then.status(200);
    });
    let lookup = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/")
            .query_param("foundry_id", "device-under-test");
        then.status(200).body("1.2.3.4");
    });
    let check = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/customize")
            .query_param("public_id", "foundry");
        then.status(404).body("taken");
    });
    let claim = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/customize")
            .query_param("foundry_id", "device-under-test")
            .query_param("public_id", "myfoundry");
        then.status(200).body("done");
    });

    let identity = client.device_identity();
    client
        .post_foundry_info(identity.as_ref(), "1.2.3.4", "192.168.0.2")
        .await;
    let addresses = client.get_redirect_address().await;
    let status = client.check_custom_address("foundry").await;
    let response = client.customize_redirect_address("myfoundry").await;

    register.assert();
    lookup.assert();
    check.assert();
    claim.assert();

    assert_that!(addresses).is_equal_to(Some(RedirectAddresses {
        external_address: "1.2.3.4".to_string(),
        local_address: "1.2.3.4/local".to_string(),
    }));
    assert_that!(status).is_equal_to(CustomAddressStatus {
        is_available: false,
        message: "taken".to_string(),
    });
    assert_that!(response).is_equal_to(CustomizeAddressResponse {
        success: true,
        message: "done".to_string(),
    });
    assert_that!(notifier.user_messages.load(Ordering::SeqCst)).is_equal_to(0);
}

#[tokio::test]
async fn an_unreachable_service_is_reported_once_per_lookup() {
    // nothing listens on the discard port
    let notifier = Arc::new(CountingNotifier::default());
    let client = client("http://127.0.0.1:9", notifier.clone());

    assert_that!(client.get_redirect_address().await).is_none();
    assert_that!(notifier.user_messages.load(Ordering::SeqCst)).is_equal_to(1);
}

#[tokio::test]
async fn the_client_can_be_shared_between_tasks() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET).path("/customize");
        then.status(404).body("taken");
    });
    let client = Arc::new(client(
        &server.base_url(),
        Arc::new(CountingNotifier::default()),
    ));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.check_custom_address("abc").await })
        })
        .collect();

    for handle in handles {
        let status = handle.await.expect("task panicked");
        assert_that!(status.is_available).is_false();
        assert_that!(status.message).is_equal_to("taken".to_string());
    }
    mock.assert_calls(3);
}

use std::{fmt, pin::Pin};

use buildstructor::buildstructor;
use futures::Future;
use http_body_util::Full;
use tower::{util::BoxCloneSyncService, Service, ServiceBuilder};

use crate::{
    body::body_to_bytes, HttpRequest, HttpResponse, HttpService, HttpServiceConfig,
    HttpServiceError, DEFAULT_TIMEOUT,
};

/// A [`Service`] that wraps a [`reqwest`] client and uses [`http`] constructs for requests and responses
#[derive(Clone)]
pub struct ReqwestService {
    client: BoxCloneSyncService<reqwest::Request, reqwest::Response, HttpServiceError>,
}

impl fmt::Debug for ReqwestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestService").finish_non_exhaustive()
    }
}

#[buildstructor]
impl ReqwestService {
    /// Constructs a new [`ReqwestService`]
    #[builder]
    pub fn new(
        config: Option<HttpServiceConfig>,
        client: Option<reqwest::Client>,
    ) -> Result<ReqwestService, reqwest::Error> {
        let config = config.unwrap_or_default();
        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };
        let timeout = (*config.timeout()).unwrap_or(DEFAULT_TIMEOUT);
        tracing::trace!(?timeout, "building reqwest service");
        let client = BoxCloneSyncService::new(
            ServiceBuilder::new()
                .map_err(HttpServiceError::from)
                .timeout(timeout)
                .service(client),
        );
        Ok(ReqwestService { client })
    }
}

impl From<reqwest::Error> for HttpServiceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_body() || value.is_decode() {
            HttpServiceError::Body(value.into())
        } else if value.is_connect() {
            HttpServiceError::Connect(value.into())
        } else if value.is_timeout() {
            HttpServiceError::TimedOut
        } else {
            HttpServiceError::Unexpected(value.into())
        }
    }
}

impl Service<HttpRequest> for ReqwestService {
    type Response = HttpResponse;
    type Error = HttpServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.client.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let clone = self.client.clone();
        let mut client = std::mem::replace(&mut self.client, clone);
        let fut = async move {
            let mut req = req;
            let bytes = body_to_bytes(&mut req)
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            let body = reqwest::Body::from(bytes);
            let req = req.map(move |_| body);
            let req = reqwest::Request::try_from(req)?;
            let mut resp = http::Response::from(client.call(req).await?);
            let bytes = body_to_bytes(&mut resp)
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            Ok(resp.map(|_| Full::new(bytes)))
        };
        Box::pin(fut)
    }
}

impl From<ReqwestService> for HttpService {
    fn from(value: ReqwestService) -> Self {
        BoxCloneSyncService::new(value)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::Result;
    use bytes::Bytes;
    use http::StatusCode;
    use http_body_util::Full;
    use httpmock::{Method, MockServer};
    use rstest::{fixture, rstest};
    use speculoos::prelude::*;
    use tower::{Service, ServiceExt};

    use crate::{
        body::body_to_bytes, HttpService, HttpServiceConfig, HttpServiceError, ReqwestService,
    };

    #[fixture]
    pub fn raw_service() -> HttpService {
        let client = reqwest::Client::default();
        ReqwestService::builder()
            .client(client)
            .build()
            .unwrap()
            .into()
    }

    #[fixture]
    pub fn timeout_service() -> HttpService {
        let client = reqwest::Client::default();
        ReqwestService::builder()
            .config(
                HttpServiceConfig::builder()
                    .timeout(Duration::from_millis(100))
                    .build(),
            )
            .client(client)
            .build()
            .unwrap()
            .into()
    }

    #[rstest]
    #[case::raw_service(raw_service(), None)]
    #[case::fast_enough(timeout_service(), None)]
    #[case::too_slow(timeout_service(), Some(Duration::from_millis(300)))]
    #[tokio::test]
    pub async fn make_a_request(
        #[case] mut service: HttpService,
        #[case] request_length: Option<Duration>,
    ) -> Result<()> {
        let server = MockServer::start();
        let uri = server.url("/?foundry_id=abc");

        let mock = server.mock(|when, then| {
            when.method(Method::POST)
                .path("/")
                .query_param("foundry_id", "abc");

            let then = then.status(200).body("def");
            if let Some(request_length) = request_length {
                then.delay(request_length);
            }
        });

        let request = http::Request::builder()
            .uri(uri)
            .method(http::Method::POST)
            .body(Full::default())?;

        let resp = service.ready().await?.call(request).await;

        mock.assert_calls(1);

        if request_length.is_some() {
            assert_that!(resp)
                .is_err()
                .matches(|err| matches!(err, HttpServiceError::TimedOut));
        } else {
            let mut body = resp?.into_body();
            let bytes = body_to_bytes(&mut body).await?;
            assert_that!(bytes).is_equal_to(Bytes::from("def".as_bytes()));
        }

        Ok(())
    }

    #[rstest]
    #[tokio::test]
    pub async fn non_success_statuses_are_responses(mut raw_service: HttpService) -> Result<()> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET).path("/customize");
            then.status(404).body("taken");
        });

        let request = http::Request::builder()
            .uri(server.url("/customize"))
            .method(http::Method::GET)
            .body(Full::default())?;

        let resp = raw_service.ready().await?.call(request).await;

        mock.assert();
        assert_that!(resp)
            .is_ok()
            .matches(|resp| resp.status() == StatusCode::NOT_FOUND);
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    pub async fn refused_connections_are_errors(mut raw_service: HttpService) -> Result<()> {
        // nothing listens on the discard port
        let request = http::Request::builder()
            .uri("http://127.0.0.1:9/")
            .method(http::Method::GET)
            .body(Full::default())?;

        let resp = raw_service.ready().await?.call(request).await;

        assert_that!(resp)
            .is_err()
            .matches(|err| matches!(err, HttpServiceError::Connect(_)));
        Ok(())
    }
}

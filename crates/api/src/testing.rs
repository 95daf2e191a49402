//! In-process client for driving the router without opening a socket.
//!
//! This is what the `Testing` environment uses instead of binding a port.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

use crate::app::{build_app, SharedDirectory};

/// Drives requests through a router via `tower::ServiceExt::oneshot`.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
}

impl TestClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    pub fn with_directory(directory: SharedDirectory) -> Self {
        Self::new(build_app(directory))
    }

    /// Client over the canned sample directory.
    pub fn sample() -> Self {
        Self::new(crate::app::build_sample_app())
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.send(Method::GET, uri, Body::empty(), false).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.send(Method::DELETE, uri, Body::empty(), false).await
    }

    pub async fn post_json<B: Serialize>(&self, uri: &str, body: &B) -> anyhow::Result<TestResponse> {
        self.send(Method::POST, uri, Body::from(serde_json::to_vec(body)?), true)
            .await
    }

    pub async fn put_json<B: Serialize>(&self, uri: &str, body: &B) -> anyhow::Result<TestResponse> {
        self.send(Method::PUT, uri, Body::from(serde_json::to_vec(body)?), true)
            .await
    }

    /// Send raw bytes as a JSON body (for malformed payloads).
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> anyhow::Result<TestResponse> {
        self.send(Method::POST, uri, Body::from(body), true).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Body,
        json: bool,
    ) -> anyhow::Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if json {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        self.request(builder.body(body)?).await
    }

    /// Send a fully built request.
    pub async fn request(&self, request: Request<Body>) -> anyhow::Result<TestResponse> {
        let response = match self.app.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }
}

/// Buffered response returned by [`TestClient`].
#[derive(Debug, Clone)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

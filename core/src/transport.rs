//! The seam between the dispatch engine and the network.

use async_trait::async_trait;
use tracing::trace;

use crate::error::TransportError;
use crate::http::{status_text, HttpRequest, HttpResponse};

/// Executes one `HttpRequest`.
///
/// Any response the server produces, whatever its status code, is `Ok`.
/// Only failures to obtain a response at all are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Live transport backed by a shared `reqwest::Client`.
///
/// Follows redirects with reqwest's default policy and sets no timeout.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = request.method;
        let url = request.url.to_string();
        let fail = |e: reqwest::Error| TransportError {
            method: method.to_string(),
            url: url.clone(),
            message: e.to_string(),
        };

        let mut builder = self.client.request(method.into(), request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(fail)?;
        let status = response.status().as_u16();
        trace!(%method, %url, status, "response received");

        Ok(HttpResponse {
            final_url: response.url().to_string(),
            status,
            status_text: status_text(status),
        })
    }
}

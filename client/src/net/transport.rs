//! HTTP transport seam for REST calls.
//!
//! Client-side (hydrate): [`BrowserTransport`] issues real requests via
//! `gloo-net`. Server-side (SSR) and native tests: the browser transport
//! reports a network error, and tests substitute their own implementation.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

/// HTTP method subset used by the auth API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully-specified outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), body: None }
    }

    /// Build a `POST` carrying a JSON body.
    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: Some(body),
        }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`HttpRequest`] to the server.
///
/// An `Err` means the exchange itself failed (DNS, CORS, connection reset);
/// non-2xx statuses are still `Ok` responses.
pub trait HttpTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, String>>;
}

/// `fetch`-backed transport for the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::RequestBuilder;

            let mut builder = match request.method {
                Method::Get => RequestBuilder::new(&request.url).method(gloo_net::http::Method::GET),
                Method::Post => RequestBuilder::new(&request.url).method(gloo_net::http::Method::POST),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let req = match request.body {
                Some(body) => builder.body(body).map_err(|e| e.to_string())?,
                None => builder.build().map_err(|e| e.to_string())?,
            };
            let resp = req.send().await.map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}

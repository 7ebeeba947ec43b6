//! # HTTP sink plugin.
//!
//! [`HttpPlugin`] formats each event into a request body and POSTs it to a
//! fixed endpoint, then hands the response to a caller-supplied handler.
//! One request per event; no retry, no timeout beyond the transport default —
//! any network error is surfaced as the plugin's failure.
//!
//! The network call goes through the [`Transport`] seam. The default is
//! [`HttpTransport`] (a shared [`reqwest::Client`]); tests inject an in-memory
//! transport instead of standing up a server.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use scribe::{HttpPlugin, Scribe, ScribeConfig};
//!
//! let plugin = HttpPlugin::json("https://logs.example.com/ingest");
//! let scribe = Scribe::new(ScribeConfig::new("app"), vec![Arc::new(plugin)]);
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PluginError;
use crate::events::Event;

use super::plugin::Plugin;

/// Response to one transport POST.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network transport collaborator: one POST, one response.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Performs a single POST of `body` to `url` with the given header fields.
    async fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, PluginError>;
}

/// Default [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh client (connection pool included).
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, PluginError> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(PluginError::transport)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(PluginError::transport)?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Converts an event into the request body. Unlike the file sink's formatter
/// this one is required to produce output; it may still fail.
pub type BodyFormatter = Arc<dyn Fn(&Event) -> Result<Vec<u8>, PluginError> + Send + Sync>;

/// Observes the transport response; a failure here is the plugin's failure.
pub type ResponseHandler = Arc<dyn Fn(&HttpResponse) -> Result<(), PluginError> + Send + Sync>;

/// A plugin that POSTs formatted events to a remote endpoint.
pub struct HttpPlugin {
    url: String,
    header_fields: Vec<(String, String)>,
    formatter: BodyFormatter,
    response_handler: ResponseHandler,
    transport: Arc<dyn Transport>,
}

impl HttpPlugin {
    /// Creates an HTTP plugin with JSON default headers, a no-op response
    /// handler, and the reqwest-backed transport.
    pub fn new<F>(url: impl Into<String>, formatter: F) -> Self
    where
        F: Fn(&Event) -> Result<Vec<u8>, PluginError> + Send + Sync + 'static,
    {
        Self {
            url: url.into(),
            header_fields: Self::default_header_fields(),
            formatter: Arc::new(formatter),
            response_handler: Arc::new(|_| Ok(())),
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Creates an HTTP plugin that serializes the whole event as JSON.
    pub fn json(url: impl Into<String>) -> Self {
        Self::new(url, |event| {
            serde_json::to_vec(event).map_err(PluginError::format)
        })
    }

    /// The default header fields: JSON content type and accept.
    pub fn default_header_fields() -> Vec<(String, String)> {
        vec![
            (
                "Content-Type".to_owned(),
                "application/json; charset=utf-8".to_owned(),
            ),
            ("Accept".to_owned(), "application/json".to_owned()),
        ]
    }

    /// Replaces the header fields sent with every request.
    #[inline]
    pub fn with_header_fields(mut self, header_fields: Vec<(String, String)>) -> Self {
        self.header_fields = header_fields;
        self
    }

    /// Installs a response handler invoked with every transport response.
    #[inline]
    pub fn with_response_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&HttpResponse) -> Result<(), PluginError> + Send + Sync + 'static,
    {
        self.response_handler = Arc::new(handler);
        self
    }

    /// Replaces the transport (e.g., an in-memory one for tests).
    #[inline]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// The endpoint this plugin posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Plugin for HttpPlugin {
    async fn handle(&self, event: &Event) -> Result<(), PluginError> {
        let body = (self.formatter)(event)?;

        let response = self
            .transport
            .post(&self.url, body, &self.header_fields)
            .await?;

        (self.response_handler)(&response)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

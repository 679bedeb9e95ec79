//! Request dispatch
//!
//! Every Nocks endpoint is served by the same mechanism: build the URL from
//! the configured base, API version, path and page; set the JSON and bearer
//! headers; attach the JSON-encoded parameters; send through the transport;
//! and unwrap either `data` or `meta.pagination` from the response envelope.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::auth::Credential;
use crate::codec;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpRequest, HttpTransport, Method};

/// Which part of the response envelope a call returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// The `data` payload
    #[default]
    Data,
    /// The `meta.pagination` block
    Pagination,
}

impl ResponseMode {
    /// Select the mode from a caller's pagination flag
    pub fn from_flag(pagination: bool) -> Self {
        if pagination {
            Self::Pagination
        } else {
            Self::Data
        }
    }

    /// Dotted path of the selected payload within the envelope
    pub fn path(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Pagination => "meta.pagination",
        }
    }
}

/// Everything needed to issue one API call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Path relative to the versioned base URL, identifiers already encoded
    pub path: String,
    /// HTTP verb
    pub method: Method,
    /// Body parameters, sent as a JSON object when non-empty
    pub params: Map<String, Value>,
    /// Whether the bearer token must be sent
    pub requires_auth: bool,
    /// Page to request; pages up to 1 are not sent
    pub page: u32,
    /// Payload to return
    pub mode: ResponseMode,
}

impl RequestDescriptor {
    /// Create an unauthenticated descriptor for page 1 with no parameters
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            params: Map::new(),
            requires_auth: false,
            page: 1,
            mode: ResponseMode::Data,
        }
    }

    /// Require the bearer token
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Set body parameters
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    /// Set the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the response mode
    pub fn with_mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Executes request descriptors against the API
///
/// Holds only immutable configuration, so it can be shared freely.
#[derive(Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_version: String,
    credential: Option<Credential>,
}

impl RequestDispatcher {
    /// Create a dispatcher
    ///
    /// `base_url` is the API root without version (e.g.
    /// `https://api.nocks.com/api/`); a trailing slash is added if missing.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: &str,
        api_version: &str,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            transport,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
            api_version: api_version.trim_matches('/').to_string(),
            credential,
        }
    }

    /// Check if a credential is configured
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Full URL for a descriptor
    pub fn url(&self, descriptor: &RequestDescriptor) -> String {
        let mut url = format!("{}{}/{}", self.base_url, self.api_version, descriptor.path);
        if descriptor.page > 1 {
            url.push_str(&format!("?page={}", descriptor.page));
        }
        url
    }

    /// Build the outgoing request without sending it
    pub fn build_request(&self, descriptor: &RequestDescriptor) -> RestResult<HttpRequest> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];

        if descriptor.requires_auth {
            let credential = self.credential.as_ref().ok_or_else(|| {
                RestError::invalid(format!("{} requires a bearer token", descriptor.path))
            })?;
            headers.push(("Authorization".to_string(), credential.authorization()));
        }

        let body = if descriptor.params.is_empty() {
            None
        } else {
            Some(codec::encode_params(&descriptor.params)?)
        };

        Ok(HttpRequest {
            method: descriptor.method,
            url: self.url(descriptor),
            headers,
            body,
        })
    }

    /// Execute a descriptor and decode the selected payload into `T`
    ///
    /// The HTTP status is not checked: any response whose envelope holds the
    /// selected payload is decoded.
    #[instrument(
        skip(self, descriptor),
        fields(method = %descriptor.method, path = %descriptor.path, page = descriptor.page)
    )]
    pub async fn execute<T: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> RestResult<T> {
        let request = self.build_request(descriptor)?;

        debug!(mode = descriptor.mode.path(), "Dispatching request");

        let response = self.transport.send(request).await?;
        let status = response.status;

        debug!(status, "Decoding response");

        let envelope = codec::decode_body(status, &response.body)?;
        let payload = codec::unwrap_envelope(status, envelope, descriptor.mode)?;

        serde_json::from_value(payload).map_err(|e| {
            RestError::malformed(status, format!("unexpected `{}` shape: {e}", descriptor.mode.path()))
        })
    }
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("has_credential", &self.has_credential())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTransport, TransportError};
    use serde_json::json;

    const BASE: &str = "https://api.nocks.com/api/";

    fn dispatcher(mock: &Arc<MockTransport>) -> RequestDispatcher {
        RequestDispatcher::new(
            mock.clone(),
            BASE,
            "v2",
            Some(Credential::new("tok_test").unwrap()),
        )
    }

    #[test]
    fn test_url_omits_first_page() {
        let d = dispatcher(&Arc::new(MockTransport::new()));
        for page in [0, 1] {
            let desc = RequestDescriptor::new(Method::Get, "trade-order").with_page(page);
            assert_eq!(d.url(&desc), "https://api.nocks.com/api/v2/trade-order");
        }
    }

    #[test]
    fn test_url_appends_later_pages() {
        let d = dispatcher(&Arc::new(MockTransport::new()));
        let desc = RequestDescriptor::new(Method::Get, "deposit").with_page(3);
        assert_eq!(d.url(&desc), "https://api.nocks.com/api/v2/deposit?page=3");
    }

    #[test]
    fn test_base_url_normalized() {
        let d = RequestDispatcher::new(Arc::new(MockTransport::new()), "https://x.test/api", "/v2/", None);
        let desc = RequestDescriptor::new(Method::Get, "balance/EUR");
        assert_eq!(d.url(&desc), "https://x.test/api/v2/balance/EUR");
    }

    #[test]
    fn test_headers_are_merged() {
        let d = dispatcher(&Arc::new(MockTransport::new()));
        let desc = RequestDescriptor::new(Method::Get, "balance/EUR").authenticated();
        let req = d.build_request(&desc).unwrap();

        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("Authorization"), Some("Bearer tok_test"));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_public_request_has_no_auth_header() {
        let d = dispatcher(&Arc::new(MockTransport::new()));
        let req = d
            .build_request(&RequestDescriptor::new(Method::Get, "trade-market/NLG-EUR"))
            .unwrap();
        assert!(req.header("Authorization").is_none());
    }

    #[test]
    fn test_missing_credential_is_local_error() {
        let d = RequestDispatcher::new(Arc::new(MockTransport::new()), BASE, "v2", None);
        let desc = RequestDescriptor::new(Method::Get, "balance/EUR").authenticated();
        assert!(d.build_request(&desc).unwrap_err().is_local());
    }

    #[test]
    fn test_body_attached_for_any_verb() {
        let d = dispatcher(&Arc::new(MockTransport::new()));
        let mut params = Map::new();
        params.insert("currency".to_string(), json!("EUR"));

        for method in [Method::Get, Method::Post, Method::Put, Method::Delete] {
            let desc = RequestDescriptor::new(method, "deposit").with_params(params.clone());
            let req = d.build_request(&desc).unwrap();
            assert_eq!(req.method, method);
            assert_eq!(req.body.as_deref(), Some(br#"{"currency":"EUR"}"#.as_slice()));
        }
    }

    #[tokio::test]
    async fn test_execute_returns_data() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!({"data": {"value": 7}}));

        #[derive(serde::Deserialize)]
        struct Payload {
            value: u32,
        }

        let d = dispatcher(&mock);
        let payload: Payload = d
            .execute(&RequestDescriptor::new(Method::Get, "anything"))
            .await
            .unwrap();
        assert_eq!(payload.value, 7);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_ignores_status_when_envelope_is_valid() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(422, r#"{"data": [1, 2, 3]}"#);

        let d = dispatcher(&mock);
        let payload: Vec<u8> = d
            .execute(&RequestDescriptor::new(Method::Get, "anything"))
            .await
            .unwrap();
        assert_eq!(payload, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_execute_rejects_wrong_shape() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!({"data": "not a list"}));

        let d = dispatcher(&mock);
        let result: RestResult<Vec<u8>> = d
            .execute(&RequestDescriptor::new(Method::Get, "anything"))
            .await;
        assert!(matches!(result, Err(RestError::MalformedResponse { status: 200, .. })));
    }

    #[tokio::test]
    async fn test_execute_surfaces_transport_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_error(TransportError::ConnectionFailed("refused".into()));

        let d = dispatcher(&mock);
        let result: RestResult<Value> = d
            .execute(&RequestDescriptor::new(Method::Get, "anything"))
            .await;
        assert!(matches!(
            result,
            Err(RestError::Transport(TransportError::ConnectionFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_local_error_never_reaches_transport() {
        let mock = Arc::new(MockTransport::new());
        let d = RequestDispatcher::new(mock.clone(), BASE, "v2", None);

        let result: RestResult<Value> = d
            .execute(&RequestDescriptor::new(Method::Get, "balance/EUR").authenticated())
            .await;
        assert!(result.is_err());
        assert!(mock.requests().is_empty());
    }
}

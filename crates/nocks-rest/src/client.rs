//! Main REST client implementation

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::auth::Credential;
use crate::dispatch::{RequestDispatcher, ResponseMode};
use crate::endpoints::Operation;
use crate::error::RestResult;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::Listing;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.nocks.com/api/";

/// Sandbox API root
pub const SANDBOX_BASE_URL: &str = "https://sandbox.nocks.com/api/";

/// API version segment
pub const DEFAULT_API_VERSION: &str = "v2";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Nocks REST API client
///
/// Provides access to both public and private endpoints. Requests are never
/// retried; a failed call is reported to the caller as is.
///
/// # Example
///
/// ```no_run
/// use nocks_rest::{Credential, NocksRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = NocksRestClient::new()?;
///     let rate = client.get_rate("NLG-EUR").await?;
///
///     // With a bearer token for private endpoints
///     let token = Credential::new(std::env::var("NOCKS_API_TOKEN")?)?;
///     let auth_client = NocksRestClient::with_credential(token)?;
///     let balance = auth_client.get_balance("EUR").await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NocksRestClient {
    dispatcher: RequestDispatcher,
}

impl NocksRestClient {
    /// Create a new client without a credential
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with a bearer token
    pub fn with_credential(credential: Credential) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credential(credential))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| concat!("nocks-rest/", env!("CARGO_PKG_VERSION")).to_string());
        let transport = ReqwestTransport::new(config.timeout, &user_agent)?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    ///
    /// The configured timeout is the transport's concern and is not applied here.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let dispatcher = RequestDispatcher::new(
            transport,
            &config.base_url,
            &config.api_version,
            config.credential,
        );

        info!(base_url = %config.base_url, "Created Nocks REST client");

        Self { dispatcher }
    }

    /// Check if the client has a credential for private endpoints
    pub fn has_credential(&self) -> bool {
        self.dispatcher.has_credential()
    }

    /// The underlying dispatcher
    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    pub(crate) async fn call<T: DeserializeOwned>(&self, operation: Operation<'_>) -> RestResult<T> {
        let descriptor = operation.descriptor()?;
        debug!(operation = operation.name(), "Calling endpoint");
        self.dispatcher.execute(&descriptor).await
    }

    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        operation: Operation<'_>,
    ) -> RestResult<Listing<T>> {
        let descriptor = operation.descriptor()?;
        debug!(operation = operation.name(), "Listing endpoint");

        match descriptor.mode {
            ResponseMode::Data => Ok(Listing::Items(self.dispatcher.execute(&descriptor).await?)),
            ResponseMode::Pagination => {
                Ok(Listing::Pagination(self.dispatcher.execute(&descriptor).await?))
            }
        }
    }
}

impl std::fmt::Debug for NocksRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NocksRestClient")
            .field("has_credential", &self.has_credential())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer token (optional)
    pub credential: Option<Credential>,
    /// API root without version
    pub base_url: String,
    /// API version segment
    pub api_version: String,
    /// Request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credential: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at the sandbox environment
    pub fn sandbox() -> Self {
        Self::default().with_base_url(SANDBOX_BASE_URL)
    }

    /// Set the credential
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version segment
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credential() {
        let client = NocksRestClient::new().unwrap();
        assert!(!client.has_credential());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent")
            .with_api_version("v3");

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.api_version, "v3");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_sandbox_config() {
        let config = ClientConfig::sandbox();
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential::new("tok_secret").unwrap();
        let client = NocksRestClient::with_credential(credential).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("tok_secret"));
        assert!(debug.contains("has_credential: true"));
    }
}

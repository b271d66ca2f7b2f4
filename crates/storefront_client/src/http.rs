use crate::CatalogClient;
use reqwest::Client;
use storefront_core::RemoteConfig;
use storefront_error::{HttpError, StorefrontResult};
use tracing::{debug, error, instrument};

/// reqwest-backed catalog client.
///
/// GET only, no authentication, no pagination. Timeouts are the reqwest
/// defaults unless [`RemoteConfig::timeout_secs`] is set.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Creates a client for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(config: &RemoteConfig) -> StorefrontResult<Self> {
        debug!(base_url = %config.base_url, "Creating catalog client");

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the product list.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// URL of a single product.
    pub fn product_url(&self, id: u32) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    #[instrument(skip(self))]
    async fn get_body(&self, url: &str) -> StorefrontResult<String> {
        debug!("Sending catalog request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, "Catalog request failed");
            HttpError::new(format!("GET {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Catalog endpoint returned error");
            return Err(HttpError::with_status(
                status.as_u16(),
                format!("GET {} returned {}", url, status),
            )
            .into());
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read catalog response body");
            HttpError::new(format!("Reading body of {} failed: {}", url, e))
        })?;

        debug!(bytes = body.len(), "Received catalog response");
        Ok(body)
    }
}

#[async_trait::async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_all(&self) -> StorefrontResult<String> {
        self.get_body(&self.products_url()).await
    }

    async fn fetch_one(&self, id: u32) -> StorefrontResult<String> {
        self.get_body(&self.product_url(id)).await
    }
}

//! HTTP object store client.

use crate::error::{BlobError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use wish_core::blob::{BlobStore, StoredBlob};

/// API version header expected by Vercel-compatible blob stores
const API_VERSION: &str = "7";

/// Client for an object store that accepts `PUT {endpoint}/{pathname}`
/// with a bearer token and answers with the blob's public URL.
pub struct HttpBlobStore {
    http: Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    url: String,
    #[serde(default)]
    pathname: Option<String>,
}

impl HttpBlobStore {
    /// Create a client for `endpoint`, authenticating with `token`.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(BlobError::InvalidEndpoint(
                "endpoint cannot be empty".into(),
            ));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(BlobError::InvalidEndpoint(
                "endpoint must start with http:// or https://".into(),
            ));
        }

        let token = token.into();
        if token.is_empty() {
            return Err(BlobError::InvalidEndpoint(
                "blob store token is required".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("WishMaker/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }

    /// The normalized endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn upload(&self, pathname: &str, data: Bytes, content_type: &str) -> Result<StoredBlob> {
        let url = format!("{}/{}", self.endpoint, pathname);
        let size = data.len();

        debug!(url = %url, size, content_type, "Uploading blob");

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, content_type)
            .header("x-api-version", API_VERSION)
            .body(data)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body: PutResponse = response.json().await.map_err(|e| {
                BlobError::ParseError(format!("Failed to parse upload response: {}", e))
            })?;

            info!(pathname = %pathname, size, url = %body.url, "Blob uploaded");

            Ok(StoredBlob {
                url: body.url,
                pathname: body.pathname.unwrap_or_else(|| pathname.to_string()),
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BlobError::Upload {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn put(
        &self,
        pathname: &str,
        data: Bytes,
        content_type: &str,
    ) -> wish_core::Result<StoredBlob> {
        Ok(self.upload(pathname, data, content_type).await?)
    }
}

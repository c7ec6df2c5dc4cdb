use serde_json::Value;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API returned {status}: {body}")]
    ApiResponse { status: u16, body: String },
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Shared HTTP client for the BXS data service.
///
/// Wraps [`reqwest::Client`] with a base URL. Paths passed to the request
/// methods are joined onto the base, so `http://host:8000/api` and
/// `http://host:8000/api/` both resolve `health` to `http://host:8000/api/health`.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        let inner = reqwest::Client::builder().build()?;
        Ok(Self { inner, base_url })
    }

    /// GET `{base_url}/{path}` and decode the JSON response.
    ///
    /// Any non-success status is returned as [`ApiError::ApiResponse`]
    /// without looking at the body.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.base_url.join(path)?;
        let resp = self.inner.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// GET `{base_url}/{path}` and decode the JSON response whatever the
    /// status code. Only transport and decode failures are errors.
    pub async fn get_any_status(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.base_url.join(path)?;
        let resp = self.inner.get(url).send().await?;
        if !resp.status().is_success() {
            tracing::debug!(
                status = resp.status().as_u16(),
                %path,
                "decoding body of non-success response"
            );
        }
        Self::decode(resp).await
    }

    /// Return the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn handle_response(resp: reqwest::Response) -> Result<Value, ApiError> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponse { status, body });
        }
        Self::decode(resp).await
    }

    async fn decode(resp: reqwest::Response) -> Result<Value, ApiError> {
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

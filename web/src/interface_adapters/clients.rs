use crate::domain::{Backend, BackendResponse, FetchError};
use async_trait::async_trait;
use reqwest::{Client, header};
use url::Url;

// Thin wrapper around reqwest for calls to the backend API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    pub base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    // Mirrors `${base}/good`: the base keeps any path prefix it was given.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn fetch(&self, path: &str, no_store: bool) -> Result<BackendResponse, FetchError> {
        let url = self.endpoint(path);
        let mut request = self.http.get(&url);
        if no_store {
            request = request.header(header::CACHE_CONTROL, "no-store");
        }

        let res = request
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let status = res.status();
        tracing::debug!(%url, status = status.as_u16(), "backend responded.");

        // The body is read even for failed answers; callers decide whether to show it.
        let body = res
            .text()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()));

        Ok(BackendResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}

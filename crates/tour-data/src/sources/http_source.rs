use async_trait::async_trait;
use url::Url;

use super::ManifestSource;
use crate::ManifestError;

/// Manifest fetched over HTTP, the deployed configuration.
///
/// No timeout is configured; a fetch that never resolves leaves the session
/// permanently unresolved, matching the no-watchdog policy.
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
    name: String,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        let name = url.to_string();
        Self {
            url,
            client: reqwest::Client::new(),
            name,
        }
    }
}

#[async_trait]
impl ManifestSource for HttpSource {
    async fn fetch(&self) -> Result<String, ManifestError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

use crate::config::CatalogConfig;
use crate::error::Result;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Request client shared by every stage of one pipeline run.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: Url) -> Result<String> {
        let response = self.get_raw(url).await?;
        let text = response.text().await?;
        Ok(text)
    }

    pub async fn get_raw(&self, url: Url) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?)
    }
}

/// Join path segments onto the catalogue root, percent-encoding each one.
///
/// Each segment is one path component: a `/` inside a slug is sent as `%2F`.
/// Catalogue slugs are single segments.
pub fn catalog_url(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

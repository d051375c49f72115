//! Shared helpers for tests that talk to a mock catalogue.

use crate::config::CatalogConfig;
use crate::rules::WikiArtRules;
use crate::utils::HttpClient;
use std::sync::Arc;

/// Catalogue config pointing both the pages and the image host at `server`.
pub(crate) fn mock_catalog(server: &mockito::ServerGuard) -> CatalogConfig {
    CatalogConfig {
        base_url: format!("{}/en", server.url()),
        image_host_pattern: regex::escape(&server.url()),
        request_delay_ms: 0,
        timeout_secs: 5,
        connect_timeout_secs: 5,
        ..CatalogConfig::default()
    }
}

pub(crate) fn client_and_rules(catalog: &CatalogConfig) -> (HttpClient, Arc<WikiArtRules>) {
    let http_client = HttpClient::new(catalog).unwrap();
    let rules = Arc::new(WikiArtRules::from_config(catalog).unwrap());
    (http_client, rules)
}

pub(crate) fn image_url(server: &mockito::ServerGuard, artist: &str, painting: &str) -> String {
    format!("{}/images/{}/{}.jpg", server.url(), artist, painting)
}

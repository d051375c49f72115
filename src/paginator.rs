use crate::config::CatalogConfig;
use crate::error::Result;
use crate::traits::MarkupRules;
use crate::utils::{catalog_url, HttpClient};
use std::sync::Arc;
use tracing::{debug, info};

/// Walks an artist's masonry listing and collects every painting image URL.
pub struct PaintingLister {
    http_client: HttpClient,
    rules: Arc<dyn MarkupRules>,
    catalog: CatalogConfig,
}

impl PaintingLister {
    pub fn new(http_client: HttpClient, rules: Arc<dyn MarkupRules>, catalog: CatalogConfig) -> Self {
        Self {
            http_client,
            rules,
            catalog,
        }
    }

    pub async fn list_painting_urls(&self, slug: &str) -> Result<Vec<String>> {
        let listing_url = catalog_url(&self.catalog.base_url, &[slug, "all-works", "text-list"])?;
        let listing = self.http_client.get(listing_url).await?;

        let nb_paintings = self.rules.painting_count(&listing)?;
        let nb_pages = page_count(nb_paintings, self.catalog.first_page_quota, self.catalog.page_quota);
        info!("[PAGINATOR] Found {} paintings for {} over {} pages", nb_paintings, slug, nb_pages);

        let mut painting_urls = Vec::new();

        for page in 1..=nb_pages {
            debug!("[PAGINATOR] ------- Page {} --------", page);

            let mut page_url = catalog_url(&self.catalog.base_url, &[slug, "mode", "all-paintings"])?;
            page_url
                .query_pairs_mut()
                .append_pair("json", "2")
                .append_pair("layout", "new")
                .append_pair("page", &page.to_string())
                .append_pair("resultType", "masonry");

            let body = self.http_client.get(page_url).await?;
            let urls = self.rules.image_urls(&body);
            debug!("[PAGINATOR] Page {} holds {} image URLs", page, urls.len());
            painting_urls.extend(urls);

            tokio::time::sleep(self.catalog.request_delay()).await;
        }

        info!("[PAGINATOR] Collected {} image URLs for {}", painting_urls.len(), slug);
        Ok(painting_urls)
    }
}

/// Number of listing pages needed for `total` paintings when the first page
/// shows `first_page_quota` and every other page shows `page_quota`.
pub fn page_count(total: u32, first_page_quota: u32, page_quota: u32) -> u32 {
    if total <= first_page_quota || page_quota == 0 {
        return 1;
    }
    1 + (total - first_page_quota).div_ceil(page_quota)
}

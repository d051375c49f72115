use crate::config::CatalogConfig;
use crate::error::Result;
use crate::fetcher::ImageFetcher;
use crate::models::{ArtistIdentity, FetchReport};
use crate::paginator::PaintingLister;
use crate::resolver::ArtistResolver;
use crate::rules::WikiArtRules;
use crate::traits::MarkupRules;
use crate::utils::HttpClient;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// One artist end to end: resolve, list, fetch.
///
/// All three stages share the HTTP client created here, so a pipeline
/// value spans exactly one run's connection pool.
pub struct Pipeline {
    resolver: ArtistResolver,
    lister: PaintingLister,
    fetcher: ImageFetcher,
}

impl Pipeline {
    pub fn new(catalog: &CatalogConfig) -> Result<Self> {
        let rules: Arc<dyn MarkupRules> = Arc::new(WikiArtRules::from_config(catalog)?);
        let http_client = HttpClient::new(catalog)?;
        Ok(Self::with_parts(http_client, rules, catalog))
    }

    pub fn with_parts(http_client: HttpClient, rules: Arc<dyn MarkupRules>, catalog: &CatalogConfig) -> Self {
        Self {
            resolver: ArtistResolver::new(http_client.clone(), rules.clone(), catalog.base_url.clone()),
            lister: PaintingLister::new(http_client.clone(), rules.clone(), catalog.clone()),
            fetcher: ImageFetcher::new(http_client, rules, catalog.request_delay()),
        }
    }

    pub async fn resolve(&self, artist_name: &str) -> Result<ArtistIdentity> {
        self.resolver.resolve(artist_name).await
    }

    /// Download the pictures of `artist_name` into `parent_dir/<display name>/`.
    pub async fn run(&self, artist_name: &str, parent_dir: &Path, limit: Option<usize>) -> Result<FetchReport> {
        info!("[PIPELINE] Starting {} into {}", artist_name, parent_dir.display());

        let artist = self.resolver.resolve(artist_name).await?;
        let urls = self.lister.list_painting_urls(&artist.slug).await?;
        debug!("[PIPELINE] {:?}", urls);

        let report = self
            .fetcher
            .fetch_all(urls, parent_dir, Some(artist.display_name.as_str()), limit)
            .await?;

        info!("[PIPELINE] {} done: {}", artist.display_name, report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CuratorError;
    use crate::test_support::{image_url, mock_catalog};

    #[tokio::test]
    async fn run_groups_files_under_resolved_display_name() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let catalog = mock_catalog(&server);

        let index = server
            .mock("GET", "/en/Alphabet/z/text-list")
            .with_status(200)
            .with_body(
                r#"<ul><li><a href="/en/francisco-de-zurbaran">Francisco de Zurbar&#225;n</a></li>
                   <li><a href="/en/federico-zandomeneghi">Federico Zandomeneghi</a></li></ul>"#,
            )
            .create_async()
            .await;

        let listing = server
            .mock("GET", "/en/francisco-de-zurbaran/all-works/text-list")
            .with_status(200)
            .with_body("<title>Francisco de Zurbaran - 2 artworks - painting</title>")
            .create_async()
            .await;

        let body = format!(
            r#"{{"Paintings":[{{"image":"{}"}},{{"image":"{}"}}]}}"#,
            image_url(&server, "francisco-de-zurbaran", "agnus-dei"),
            image_url(&server, "francisco-de-zurbaran", "saint-hugh-in-the-refectory"),
        );
        let page = server
            .mock("GET", "/en/francisco-de-zurbaran/mode/all-paintings")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let images = server
            .mock("GET", mockito::Matcher::Regex(r"^/images/francisco-de-zurbaran/.+\.jpg$".into()))
            .with_status(200)
            .with_body(vec![0xFFu8, 0xD8, 0xFF, 0xD9])
            .expect(2)
            .create_async()
            .await;

        let pipeline = Pipeline::new(&catalog).unwrap();
        let report = pipeline.run("Zurbar", dir.path(), None).await.unwrap();

        assert_eq!(report.downloaded, 2);
        let artist_dir = dir.path().join("Francisco de Zurbarán");
        assert!(artist_dir.join("agnus-dei.jpg").is_file());
        assert!(artist_dir.join("saint-hugh-in-the-refectory.jpg").is_file());

        index.assert_async().await;
        listing.assert_async().await;
        page.assert_async().await;
        images.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_artist_stops_before_listing() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        let catalog = mock_catalog(&server);

        server
            .mock("GET", "/en/Alphabet/b/text-list")
            .with_status(200)
            .with_body(r#"<a href="/en/bartolome-bermejo">Bartolome Bermejo</a>"#)
            .create_async()
            .await;
        let listing = server
            .mock("GET", mockito::Matcher::Regex("all-works".into()))
            .expect(0)
            .create_async()
            .await;

        let err = Pipeline::new(&catalog)
            .unwrap()
            .run("Bosche", dir.path(), None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Bosche - Found no match");
        assert!(matches!(err, CuratorError::ArtistNotFound(_)));
        listing.assert_async().await;
    }
}

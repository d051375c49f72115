use crate::error::Result;
use crate::models::FetchReport;
use crate::storage::StorageManager;
use crate::traits::MarkupRules;
use crate::utils::HttpClient;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

/// Downloads painting images into `<parent>/<artist>/<painting>.jpg`,
/// skipping files that already exist.
pub struct ImageFetcher {
    http_client: HttpClient,
    rules: Arc<dyn MarkupRules>,
    request_delay: Duration,
}

impl ImageFetcher {
    pub fn new(http_client: HttpClient, rules: Arc<dyn MarkupRules>, request_delay: Duration) -> Self {
        Self {
            http_client,
            rules,
            request_delay,
        }
    }

    /// Download every URL not already on disk.
    ///
    /// With `display_name` every file goes under that directory, otherwise
    /// under the artist segment of its own URL. With `limit`, a random sample
    /// of at most `limit` URLs is fetched. The first HTTP or filesystem error
    /// aborts the run.
    pub async fn fetch_all(
        &self,
        urls: Vec<String>,
        parent_dir: &Path,
        display_name: Option<&str>,
        limit: Option<usize>,
    ) -> Result<FetchReport> {
        let urls = select_urls(urls, limit);
        info!("[FETCHER] Downloading {} paintings", urls.len());

        let storage = StorageManager::new(parent_dir);
        let mut report = FetchReport {
            requested: urls.len(),
            ..FetchReport::default()
        };

        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for url in &urls {
            let target = self.rules.download_target(url)?;
            let artist_dir = display_name.unwrap_or(&target.artist_segment);

            let artist_path = storage.get_artist_path(artist_dir).await?;
            let out_path = storage.get_painting_path(&artist_path, &target.painting_segment);

            pb.set_message(target.painting_segment.clone());

            if tokio::fs::try_exists(&out_path).await? {
                info!("[FETCHER] File already exists - {}", out_path.display());
                report.skipped += 1;
            } else {
                info!("[FETCHER] Download {} to {}", url, out_path.display());
                self.download_image(url, &out_path).await?;
                report.downloaded += 1;
                tokio::time::sleep(self.request_delay).await;
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("[FETCHER] {}", report);
        Ok(report)
    }

    /// Stream into `<painting>.jpg.part` and rename once complete, so an
    /// interrupted body never leaves a file the existence check would trust.
    async fn download_image(&self, image_url: &str, local_path: &Path) -> Result<()> {
        let part_path = partial_path(local_path);

        match self.stream_to_file(image_url, &part_path).await {
            Ok(()) => {
                tokio::fs::rename(&part_path, local_path).await?;
                Ok(())
            }
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&part_path).await {
                    debug!("[FETCHER] No partial file to remove at {}: {}", part_path.display(), cleanup);
                }
                Err(e)
            }
        }
    }

    async fn stream_to_file(&self, image_url: &str, path: &Path) -> Result<()> {
        let response = self.http_client.get_raw(Url::parse(image_url)?).await?;

        let mut file = tokio::fs::File::create(path).await?;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

fn partial_path(local_path: &Path) -> PathBuf {
    let mut name = local_path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

/// Apply the download limit: shuffle and keep the first `limit` URLs.
fn select_urls(mut urls: Vec<String>, limit: Option<usize>) -> Vec<String> {
    if let Some(limit) = limit {
        urls.shuffle(&mut rand::thread_rng());
        urls.truncate(limit);
    }
    urls
}

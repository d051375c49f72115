use crate::config::CatalogConfig;
use crate::error::{CuratorError, Result};
use crate::models::{ArtistIdentity, DownloadTarget};
use crate::traits::MarkupRules;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Markup rules for wikiart.org pages.
pub struct WikiArtRules {
    /// Path prefix of artist links on index pages, e.g. `/en/`
    link_prefix: String,
    anchor_selector: Selector,
    title_pattern: Regex,
    image_pattern: Regex,
    target_pattern: Regex,
}

impl WikiArtRules {
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        let link_prefix = format!("{}/", base.path().trim_end_matches('/'));

        let anchor_selector = Selector::parse("a[href]")
            .map_err(|e| CuratorError::parse(format!("invalid anchor selector: {:?}", e)))?;

        let host = &config.image_host_pattern;

        Ok(Self {
            link_prefix,
            anchor_selector,
            title_pattern: Regex::new(r"<title>.* - (\d+) .* - painting</title>")?,
            image_pattern: Regex::new(&format!(r"{host}/images/[\w\-/]+\.jpg"))?,
            target_pattern: Regex::new(&format!(r"{host}/images/([^/]+)/(.+?)\.jpg"))?,
        })
    }
}

impl MarkupRules for WikiArtRules {
    fn index_entries(&self, html: &str) -> Vec<ArtistIdentity> {
        let document = Html::parse_document(html);

        document
            .select(&self.anchor_selector)
            .filter_map(|a| {
                let slug = a.value().attr("href")?.strip_prefix(&self.link_prefix)?;
                let name = a.text().collect::<String>();
                let name = name.trim();
                if slug.is_empty() || name.is_empty() {
                    return None;
                }
                Some(ArtistIdentity::new(slug, name))
            })
            .collect()
    }

    fn painting_count(&self, html: &str) -> Result<u32> {
        let caps = self
            .title_pattern
            .captures(html)
            .ok_or_else(|| CuratorError::parse("listing page title does not announce a painting count"))?;

        debug!("[RULES] listing title: {}", &caps[0]);

        caps[1]
            .parse::<u32>()
            .map_err(|e| CuratorError::parse(format!("painting count {:?}: {}", &caps[1], e)))
    }

    fn image_urls(&self, body: &str) -> Vec<String> {
        self.image_pattern
            .find_iter(body)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn download_target(&self, url: &str) -> Result<DownloadTarget> {
        let caps = self
            .target_pattern
            .captures(url)
            .ok_or_else(|| CuratorError::parse(format!("unrecognized image URL: {}", url)))?;

        Ok(DownloadTarget {
            artist_segment: caps[1].to_string(),
            painting_segment: caps[2].to_string(),
        })
    }
}

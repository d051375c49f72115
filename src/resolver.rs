use crate::error::{CuratorError, Result};
use crate::models::ArtistIdentity;
use crate::traits::MarkupRules;
use crate::utils::{catalog_url, HttpClient};
use std::sync::Arc;
use tracing::{debug, info};

/// Maps a free-text artist name to its catalogue identity through the
/// alphabetical index.
pub struct ArtistResolver {
    http_client: HttpClient,
    rules: Arc<dyn MarkupRules>,
    base_url: String,
}

impl ArtistResolver {
    pub fn new(http_client: HttpClient, rules: Arc<dyn MarkupRules>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            rules,
            base_url: base_url.into(),
        }
    }

    pub async fn resolve(&self, artist_name: &str) -> Result<ArtistIdentity> {
        info!("[RESOLVER] Search matches for {}", artist_name);

        let first_letter: String = artist_name
            .chars()
            .next()
            .ok_or_else(|| CuratorError::InvalidArtistName(artist_name.to_string()))?
            .to_lowercase()
            .collect();

        let url = catalog_url(&self.base_url, &["Alphabet", &first_letter, "text-list"])?;
        let html = self.http_client.get(url).await?;

        let entries = self.rules.index_entries(&html);
        debug!("[RESOLVER] Index page '{}' lists {} entries", first_letter, entries.len());

        let mut matches = select_matches(entries, artist_name);

        match matches.len() {
            0 => Err(CuratorError::artist_not_found(artist_name)),
            1 => {
                let artist = matches.remove(0);
                info!("[RESOLVER] {} - Found 1 match: {}", artist_name, artist);
                Ok(artist)
            }
            _ => Err(CuratorError::ambiguous_artist(
                artist_name,
                matches.iter().map(ToString::to_string).collect(),
            )),
        }
    }
}

/// Entries whose display name contains `artist_name`, case-sensitively.
fn select_matches(entries: Vec<ArtistIdentity>, artist_name: &str) -> Vec<ArtistIdentity> {
    entries
        .into_iter()
        .filter(|entry| entry.display_name.contains(artist_name))
        .collect()
}

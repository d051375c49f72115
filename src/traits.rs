use crate::error::Result;
use crate::models::{ArtistIdentity, DownloadTarget};

/// Extraction rules for the catalogue's markup.
///
/// Everything that depends on the shape of the remote pages lives behind this
/// trait, so a markup change touches one implementation and none of the
/// pipeline stages.
pub trait MarkupRules: Send + Sync {
    /// Artist entries listed on an alphabet index page
    fn index_entries(&self, html: &str) -> Vec<ArtistIdentity>;

    /// Total painting count announced by an artist's listing page title
    fn painting_count(&self, html: &str) -> Result<u32>;

    /// Image URLs embedded in a listing page body, in scan order
    fn image_urls(&self, body: &str) -> Vec<String>;

    /// Split an image URL into its artist and painting path segments
    fn download_target(&self, url: &str) -> Result<DownloadTarget>;
}

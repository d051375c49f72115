/// Canonical catalogue identity of an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistIdentity {
    /// Used to build request paths
    pub slug: String,
    /// Used as the local directory name
    pub display_name: String,
}

/// Where a painting URL lands on disk, split out of the URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub artist_segment: String,
    pub painting_segment: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub requested: usize,
    pub downloaded: usize,
    pub skipped: usize,
}

impl ArtistIdentity {
    pub fn new(slug: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            display_name: display_name.into(),
        }
    }
}

impl std::fmt::Display for ArtistIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.slug)
    }
}

impl std::fmt::Display for FetchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} requested, {} downloaded, {} already present",
            self.requested, self.downloaded, self.skipped
        )
    }
}

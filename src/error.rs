use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0} - Found no match")]
    ArtistNotFound(String),

    #[error("{query} - Found multiple matches: {matches:?}")]
    AmbiguousArtist { query: String, matches: Vec<String> },

    #[error("Invalid artist name: {0:?}")]
    InvalidArtistName(String),
}

impl CuratorError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn artist_not_found(query: impl Into<String>) -> Self {
        Self::ArtistNotFound(query.into())
    }

    pub fn ambiguous_artist(query: impl Into<String>, matches: Vec<String>) -> Self {
        Self::AmbiguousArtist {
            query: query.into(),
            matches,
        }
    }
}

pub type Result<T> = std::result::Result<T, CuratorError>;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Lays out downloaded paintings as `<base>/<artist>/<painting>.jpg`.
pub struct StorageManager {
    base_path: PathBuf,
}

impl StorageManager {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub async fn get_artist_path(&self, artist_name: &str) -> Result<PathBuf> {
        let path = self.base_path.join(sanitize_filename(artist_name));

        // Create directory if it doesn't exist
        tokio::fs::create_dir_all(&path).await?;

        Ok(path)
    }

    pub fn get_painting_path(&self, artist_path: &Path, painting_name: &str) -> PathBuf {
        artist_path.join(format!("{}.jpg", sanitize_filename(painting_name)))
    }
}

pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == ' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_reserved_characters() {
        assert_eq!(sanitize_filename("Joaquín Sorolla"), "Joaquín Sorolla");
        assert_eq!(sanitize_filename("1598/saint-martin"), "1598_saint-martin");
        assert_eq!(sanitize_filename(" ..Who? What: Why*. "), "Who_ What_ Why_");
    }

    #[tokio::test]
    async fn artist_path_is_created_once_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path());

        let first = storage.get_artist_path("El Greco").await.unwrap();
        let second = storage.get_artist_path("El Greco").await.unwrap();

        assert_eq!(first, dir.path().join("El Greco"));
        assert_eq!(first, second);
        assert!(first.is_dir());
        assert_eq!(
            storage.get_painting_path(&first, "laocoon-1614"),
            dir.path().join("El Greco").join("laocoon-1614.jpg")
        );
    }
}

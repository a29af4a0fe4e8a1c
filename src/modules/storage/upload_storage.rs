//! Local-disk storage for uploaded images
//!
//! Files are written under a single directory with a random hex prefix so
//! that two uploads with the same original name never collide. The same
//! directory is served statically under `/uploads`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::AppError;
use crate::shared::constants::UPLOADS_ROUTE;

/// Number of random bytes in a stored file name prefix
const PREFIX_BYTES: usize = 6;

pub struct UploadStorage {
    root: PathBuf,
    public_url: String,
}

impl UploadStorage {
    /// Create the storage, making sure the uploads directory exists
    pub async fn new(config: &StorageConfig) -> Result<Self, AppError> {
        let storage = Self::with_root(&config.uploads_dir, &config.public_url);

        tokio::fs::create_dir_all(&storage.root)
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "Failed to create uploads directory {}: {}",
                    storage.root.display(),
                    e
                ))
            })?;

        info!(
            "Upload storage initialized at {} (public url: {})",
            storage.root.display(),
            storage.public_url
        );

        Ok(storage)
    }

    /// Build a storage handle without touching the filesystem
    pub fn with_root(root: impl AsRef<Path>, public_url: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate the stored name: `<hex prefix>-<sanitized original name>`
    pub fn generate_file_name(original_filename: &str) -> String {
        let random = Uuid::new_v4();
        let prefix = hex::encode(&random.as_bytes()[..PREFIX_BYTES]);
        format!("{}-{}", prefix, sanitize_file_name(original_filename))
    }

    /// Write an upload to disk and return its stored file name
    pub async fn save(&self, original_filename: &str, data: &[u8]) -> Result<String, AppError> {
        let file_name = Self::generate_file_name(original_filename);
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, data).await.map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!("Stored upload {} ({} bytes)", file_name, data.len());

        Ok(file_name)
    }

    /// Remove a stored upload. Missing files are not an error.
    pub async fn remove(&self, file_name: &str) -> Result<(), AppError> {
        let path = self.root.join(sanitize_file_name(file_name));

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed upload {}", file_name);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Upload {} already gone", file_name);
                Ok(())
            }
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Public URL for a stored file name
    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.public_url, UPLOADS_ROUTE, file_name)
    }
}

/// Keep only the final path component and drop characters that are unsafe in URLs
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim_start_matches('.') {
        "" => "upload".to_string(),
        rest => rest.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url() {
        let storage = UploadStorage::with_root("/tmp/uploads", "http://localhost:3333/");
        assert_eq!(
            storage.public_url("lampadas.svg"),
            "http://localhost:3333/uploads/lampadas.svg"
        );
    }

    #[test]
    fn test_generate_file_name_has_hex_prefix() {
        let name = UploadStorage::generate_file_name("market.jpg");
        let (prefix, rest) = name.split_once('-').unwrap();
        assert_eq!(prefix.len(), PREFIX_BYTES * 2);
        assert!(prefix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(rest, "market.jpg");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\my shop.png"), "my_shop.png");
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name(""), "upload");
    }

    #[tokio::test]
    async fn test_save_and_remove() {
        let root = std::env::temp_dir().join(format!("ecoleta-storage-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&root).await.unwrap();
        let storage = UploadStorage::with_root(&root, "http://localhost:3333");

        let name = storage.save("photo.png", b"png-bytes").await.unwrap();
        let stored = tokio::fs::read(root.join(&name)).await.unwrap();
        assert_eq!(stored, b"png-bytes");

        storage.remove(&name).await.unwrap();
        assert!(!root.join(&name).exists());

        // Removing twice is fine
        storage.remove(&name).await.unwrap();

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}

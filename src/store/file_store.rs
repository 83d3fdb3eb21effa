//! JSON file store with atomic replace-on-write.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::StoreError;
use crate::models::Developer;

/// File-backed store holding the full collection as a JSON array.
///
/// The store itself does no locking. Callers that run load-mutate-save
/// cycles must serialize them.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file holding an empty collection if it does not exist yet.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if fs::try_exists(&self.path).await.map_err(|e| self.io_err(e))? {
            return Ok(());
        }

        tracing::info!("Initializing empty store at {:?}", self.path);
        self.save(&[]).await
    }

    /// Read and deserialize the whole collection, oldest first.
    pub async fn load(&self) -> Result<Vec<Developer>, StoreError> {
        self.ensure_initialized().await?;

        let bytes = fs::read(&self.path).await.map_err(|e| self.io_err(e))?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Serialize the whole collection and atomically replace the file.
    pub async fn save(&self, developers: &[Developer]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(developers)?;
        self.write_atomic(&bytes).await
    }

    async fn write_atomic(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)
            .await
            .map_err(|e| self.io_err(e))?;

        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("store");
        let tmp = parent.join(format!(
            ".{}.tmp.{}.{}",
            file_name,
            std::process::id(),
            uuid::Uuid::new_v4().simple()
        ));

        {
            let mut f = fs::File::create(&tmp).await.map_err(|e| self.io_err(e))?;
            f.write_all(bytes).await.map_err(|e| self.io_err(e))?;
            f.sync_all().await.map_err(|e| self.io_err(e))?;
        }

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.io_err(e));
        }

        if let Ok(dir) = fs::File::open(&parent).await {
            let _ = dir.sync_all().await;
        }

        Ok(())
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use tempfile::TempDir;

    fn sample(id: &str) -> Developer {
        Developer {
            id: id.to_string(),
            name: format!("Dev {}", id),
            role: Role::FullStack,
            tech_stack: "Rust, React".to_string(),
            experience: 3,
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ensure_initialized_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("developers.json");
        let store = JsonFileStore::new(&path);

        store.ensure_initialized().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_ensure_initialized_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("developers.json"));

        store.save(&[sample("1")]).await.unwrap();
        store.ensure_initialized().await.unwrap();
        store.ensure_initialized().await.unwrap();

        assert_eq!(store.load().await.unwrap(), vec![sample("1")]);
    }

    #[tokio::test]
    async fn test_load_initializes_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("developers.json"));

        assert!(store.load().await.unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("developers.json"));
        let records = vec![sample("1"), sample("2"), sample("3")];

        store.save(&records).await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, records);

        store.save(&loaded).await.unwrap();
        let after = std::fs::read(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("developers.json"));

        store.save(&[sample("1")]).await.unwrap();
        store.save(&[sample("1"), sample("2")]).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["developers.json".to_string()]);
    }

    #[tokio::test]
    async fn test_load_malformed_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("developers.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_load_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("developers.json");
        std::fs::write(&path, br#"{"developers": []}"#).unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        // Left untouched for diagnosis.
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"developers": []}"#
        );
    }
}

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::SecureStore;
use crate::core::error::{AppError, Result};

/// File-per-key store backend.
///
/// Each key maps to `<data_dir>/<key>.json`. Writes land in a temp file first
/// and are renamed into place, so a crash mid-write cannot truncate the
/// previous value.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl SecureStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageRead(format!("{}: {}", path.display(), e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            AppError::StorageWrite(format!("{}: {}", self.data_dir.display(), e))
        })?;

        let path = self.entry_path(key);
        let tmp = self.data_dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp, value)
            .await
            .map_err(|e| AppError::StorageWrite(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::StorageWrite(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::StorageWrite(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("nothing_here").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("reports", r#"[{"x":1}]"#).await.unwrap();

        assert_eq!(
            store.get("reports").await.unwrap(),
            Some(r#"[{"x":1}]"#.to_string())
        );
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("profile", "old").await.unwrap();
        store.set("profile", "new").await.unwrap();

        assert_eq!(store.get("profile").await.unwrap(), Some("new".to_string()));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("profile", "x").await.unwrap();
        store.delete("profile").await.unwrap();
        store.delete("profile").await.unwrap();

        assert_eq!(store.get("profile").await.unwrap(), None);
    }
}

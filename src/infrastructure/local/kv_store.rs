use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::health_port::StorageHealthPort;
use crate::application::ports::kv_store::KvStore;

/// Key-value store persisted as a single JSON object on disk.
///
/// All entries are kept in memory; every mutation rewrites the file through a
/// temporary sibling followed by a rename, while holding the write lock.
/// A mutation whose flush fails is rolled back, so memory never runs ahead
/// of the file.
pub struct JsonFileKvStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileKvStore {
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create store dir {}", parent.display()))?;
        }
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(map) => map,
                Err(err) => {
                    // Keep the unreadable file around; the next write would replace it.
                    let aside = path.with_extension("json.corrupt");
                    tokio::fs::rename(&path, &aside)
                        .await
                        .with_context(|| format!("move aside {}", path.display()))?;
                    tracing::warn!(
                        path = %path.display(),
                        moved_to = %aside.display(),
                        error = %err,
                        "local_store_unreadable_starting_empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("read store {}", path.display()));
            }
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "local_store_opened");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
        let body = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for JsonFileKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush(&entries).await {
            restore(&mut entries, key, previous);
            return Err(err);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.flush(&entries).await {
            restore(&mut entries, key, Some(previous));
            return Err(err);
        }
        Ok(())
    }
}

/// Puts `key` back to what it was before a write whose flush failed.
fn restore(entries: &mut BTreeMap<String, String>, key: &str, previous: Option<String>) {
    match previous {
        Some(value) => {
            entries.insert(key.to_string(), value);
        }
        None => {
            entries.remove(key);
        }
    }
}

#[async_trait]
impl StorageHealthPort for JsonFileKvStore {
    async fn ping(&self) -> anyhow::Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from("."),
        };
        let meta = tokio::fs::metadata(&dir).await?;
        anyhow::ensure!(meta.is_dir(), "store directory missing");
        Ok(())
    }
}

/// Non-persistent store, for tests and throwaway runs.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[async_trait]
impl StorageHealthPort for MemoryKvStore {
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

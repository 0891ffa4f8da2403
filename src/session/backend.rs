use redis::{Client, aio::ConnectionManager};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::config::SessionBackendKind;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session data is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Session store (redis) error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Key-value persistence behind a `SessionStore`. Values are JSON documents;
/// each key is read and replaced wholesale.
#[derive(Clone)]
pub enum SessionBackend {
    Memory(MemoryBackend),
    File(FileBackend),
    Redis(RedisBackend),
}

impl SessionBackend {
    pub async fn open(kind: &SessionBackendKind) -> Result<Self, SessionError> {
        Ok(match kind {
            SessionBackendKind::Memory => Self::Memory(MemoryBackend::default()),
            SessionBackendKind::File(path) => Self::File(FileBackend::new(path.clone())),
            SessionBackendKind::Redis { url, prefix } => {
                Self::Redis(RedisBackend::connect(url, prefix).await?)
            }
        })
    }

    pub async fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        match self {
            Self::Memory(b) => Ok(b.get(key).await),
            Self::File(b) => b.get(key).await,
            Self::Redis(b) => b.get(key).await,
        }
    }

    pub async fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        match self {
            Self::Memory(b) => {
                b.set(key, value).await;
                Ok(())
            }
            Self::File(b) => b.set(key, value).await,
            Self::Redis(b) => b.set(key, value).await,
        }
    }

    /// Remove every listed key in one step: either all are gone afterwards or
    /// the error is returned and nothing was removed.
    pub async fn remove_all(&self, keys: &[&str]) -> Result<(), SessionError> {
        match self {
            Self::Memory(b) => {
                b.remove_all(keys).await;
                Ok(())
            }
            Self::File(b) => b.remove_all(keys).await,
            Self::Redis(b) => b.remove_all(keys).await,
        }
    }
}

// ── Memory ──

#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryBackend {
    async fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: Value) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    async fn remove_all(&self, keys: &[&str]) {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(*key);
        }
    }
}

// ── File ──

/// Whole session kept as one JSON object in a file. Writes go to a sibling
/// temp file first and are renamed into place.
#[derive(Clone)]
pub struct FileBackend {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, SessionError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "Discarding unreadable session file");
                Ok(Map::new())
            }
        }
    }

    async fn write_all(&self, map: &Map<String, Value>) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&tmp, text).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), keys = map.len(), "Session file written");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_all().await?;
        map.insert(key.to_string(), value);
        self.write_all(&map).await
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<(), SessionError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_all().await?;
        for key in keys {
            map.remove(*key);
        }
        self.write_all(&map).await
    }
}

// ── Redis ──

#[derive(Clone)]
pub struct RedisBackend {
    connection: ConnectionManager,
    prefix: String,
}

impl RedisBackend {
    pub async fn connect(redis_url: &str, prefix: &str) -> Result<Self, SessionError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        let value: Option<String> = redis::cmd("GET")
            .arg(self.key(key))
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(&value)?;
        let _: () = redis::cmd("SET")
            .arg(self.key(key))
            .arg(serialized)
            .query_async(&mut self.connection.clone())
            .await?;
        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<(), SessionError> {
        if keys.is_empty() {
            return Ok(());
        }
        // A single multi-key DEL is atomic on the server.
        let full: Vec<String> = keys.iter().map(|k| self.key(k)).collect();
        let _: () = redis::cmd("DEL")
            .arg(&full)
            .query_async(&mut self.connection.clone())
            .await?;
        Ok(())
    }
}

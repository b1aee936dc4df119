use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use keyring::Entry;
use serde::{Deserialize, Serialize};

use crate::client::config::ClientConfig;
use crate::client::models::user::User;

const SERVICE: &str = "bookify_app";
const USER: &str = "bookify_session";

pub const RECORD_VERSION: u32 = 1;

/// Everything persisted between runs, stored as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub version: u32,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub joined_groups: BTreeSet<String>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self { version: RECORD_VERSION, token: None, user: None, joined_groups: BTreeSet::new(), saved_at: None }
    }
}

pub trait SessionBackend: Send + Sync {
    fn read(&self) -> anyhow::Result<Option<String>>;
    fn write(&self, payload: &str) -> anyhow::Result<()>;
    fn remove(&self) -> anyhow::Result<()>;
}

/// OS keyring, with an opt-in plain file used when the keyring is unavailable.
pub struct KeyringBackend {
    fallback: Option<FileBackend>,
}

impl KeyringBackend {
    pub fn new(fallback: Option<FileBackend>) -> Self {
        Self { fallback }
    }
}

impl SessionBackend for KeyringBackend {
    fn read(&self) -> anyhow::Result<Option<String>> {
        let entry = Entry::new(SERVICE, USER);
        match entry.get_password() {
            Ok(payload) => {
                if payload.trim().is_empty() { Ok(None) } else { Ok(Some(payload)) }
            }
            Err(_e) => match &self.fallback {
                Some(file) => file.read(),
                None => Ok(None),
            },
        }
    }

    fn write(&self, payload: &str) -> anyhow::Result<()> {
        let entry = Entry::new(SERVICE, USER);
        match entry.set_password(payload) {
            Ok(()) => Ok(()),
            Err(e) => match &self.fallback {
                Some(file) => {
                    // never log the payload, it carries the bearer token
                    log::warn!("Keyring unavailable ({}), persisting session to fallback file", e);
                    file.write(payload)
                }
                None => Err(anyhow::anyhow!("keyring unavailable and file fallback disabled: {}", e)),
            },
        }
    }

    fn remove(&self) -> anyhow::Result<()> {
        let entry = Entry::new(SERVICE, USER);
        let _ = entry.delete_password();
        if let Some(file) = &self.fallback {
            file.remove()?;
        }
        Ok(())
    }
}

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for FileBackend {
    fn read(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let payload = std::fs::read_to_string(&self.path)?;
        if payload.trim().is_empty() { Ok(None) } else { Ok(Some(payload)) }
    }

    fn write(&self, payload: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn remove(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self) -> anyhow::Result<Option<String>> {
        let guard = self.slot.lock().map_err(|_| anyhow::anyhow!("session slot poisoned"))?;
        Ok(guard.clone())
    }

    fn write(&self, payload: &str) -> anyhow::Result<()> {
        let mut guard = self.slot.lock().map_err(|_| anyhow::anyhow!("session slot poisoned"))?;
        *guard = Some(payload.to_string());
        Ok(())
    }

    fn remove(&self) -> anyhow::Result<()> {
        let mut guard = self.slot.lock().map_err(|_| anyhow::anyhow!("session slot poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// The single owner of persisted credentials. Nothing else reads or writes
/// the keyring entry.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let fallback = config.keyring_fallback.then(|| FileBackend::new(config.session_file.clone()));
        Self::new(Arc::new(KeyringBackend::new(fallback)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Reads the stored record. Missing, malformed or foreign-version
    /// records read as empty.
    pub fn load_record(&self) -> SessionRecord {
        let payload = match self.backend.read() {
            Ok(Some(p)) => p,
            Ok(None) => return SessionRecord::default(),
            Err(e) => {
                log::error!("Failed to read stored session: {}", e);
                return SessionRecord::default();
            }
        };
        match serde_json::from_str::<SessionRecord>(&payload) {
            Ok(record) if record.version == RECORD_VERSION => record,
            Ok(record) => {
                log::warn!("Discarding stored session with unsupported version {}", record.version);
                SessionRecord::default()
            }
            Err(e) => {
                log::warn!("Discarding unreadable stored session: {}", e);
                SessionRecord::default()
            }
        }
    }

    fn write_record(&self, mut record: SessionRecord) -> anyhow::Result<()> {
        record.version = RECORD_VERSION;
        record.saved_at = Some(Utc::now());
        let payload = serde_json::to_string(&record)?;
        self.backend.write(&payload)
    }

    pub fn save(&self, token: &str) -> anyhow::Result<()> {
        let mut record = self.load_record();
        record.token = Some(token.to_string());
        self.write_record(record)
    }

    pub fn load(&self) -> Option<String> {
        self.load_record().token.filter(|t| !t.trim().is_empty())
    }

    pub fn save_user(&self, user: &User) -> anyhow::Result<()> {
        let mut record = self.load_record();
        record.user = Some(user.clone());
        self.write_record(record)
    }

    pub fn save_groups(&self, groups: &BTreeSet<String>) -> anyhow::Result<()> {
        let mut record = self.load_record();
        record.joined_groups = groups.clone();
        self.write_record(record)
    }

    /// Forgets the token, the cached user and the joined groups.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.backend.remove()
    }
}

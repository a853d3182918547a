use crate::domain::model::StoredSession;
use crate::domain::ports::TokenStore;
use crate::utils::error::{AurumError, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Session kept as a JSON file, the terminal counterpart of browser local storage.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read(&self.path)?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let session: StoredSession = serde_json::from_slice(&data)?;
        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AurumError::IoError(e)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        let guard = self
            .session
            .lock()
            .map_err(|_| AurumError::unexpected("session store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| AurumError::unexpected("session store lock poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| AurumError::unexpected("session store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

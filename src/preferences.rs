use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::logic::theme::{ThemeMode, THEME_KEY};

/// Durable key-value preference storage
pub struct PreferenceDb {
    conn: Connection,
}

impl PreferenceDb {
    /// Open the preference database in the platform data directory
    pub fn new() -> Result<Self> {
        let data_dir = Self::get_data_dir();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;

        Self::open(&data_dir.join("preferences.db"))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preference db at {}", path.display()))?;

        let mut db = PreferenceDb { conn };
        db.init_schema()?;

        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let mut db = PreferenceDb {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;
        Ok(db)
    }

    fn get_data_dir() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("wheretui"),
            None => crate::utils::get_data_fallback_path(),
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM preferences WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }
}

/// Process-wide Light/Dark toggle.
///
/// Read once from storage on creation. Every change applies the root theme
/// attribute and writes the new value back immediately.
pub struct ThemePreference {
    store: Option<PreferenceDb>,
    applied: ThemeMode,
}

impl ThemePreference {
    pub fn load(store: PreferenceDb) -> Self {
        let stored = store.get(THEME_KEY).unwrap_or_else(|e| {
            tracing::warn!("Failed to read theme preference: {e:#}");
            None
        });
        let mode = ThemeMode::from_stored(stored.as_deref());
        tracing::debug!(theme = mode.as_str(), "loaded theme preference");

        let mut pref = Self {
            store: Some(store),
            applied: ThemeMode::Light,
        };
        pref.set(mode);
        pref
    }

    /// Theme that is not persisted (storage unavailable)
    pub fn ephemeral() -> Self {
        Self {
            store: None,
            applied: ThemeMode::Light,
        }
    }

    /// The root theme attribute the renderer styles from
    pub fn mode(&self) -> ThemeMode {
        self.applied
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.applied = mode;

        if let Some(store) = &self.store {
            if let Err(e) = store.set(THEME_KEY, mode.as_str()) {
                tracing::warn!("Failed to persist theme preference: {e:#}");
            }
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.applied.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> Option<&PreferenceDb> {
        self.store.as_ref()
    }
}

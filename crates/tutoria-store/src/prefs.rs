//! Theme preference persistence.
//!
//! The visual theme is the one piece of state that survives restarts.
//! It is stored as a plain string under the `"theme"` key through a
//! [`PreferenceStore`], with an in-memory implementation for tests and
//! a JSON-file one for the app.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;
use tutoria_core::{Result, TutoriaError};

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Visual theme of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The persisted token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted token; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Small async key-value store for user preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// The stored value for a key, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference store backed by one small JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> Result<HashMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(TutoriaError::Preferences {
                message: format!("could not read {}: {}", self.path.display(), err),
            }),
        }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced wholesale instead of failing the write.
        let mut map = self.read_map().await.unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&map)?;
        tokio::fs::write(&self.path, json).await.map_err(|err| {
            TutoriaError::Preferences {
                message: format!("could not write {}: {}", self.path.display(), err),
            }
        })
    }
}

/// Owns the active theme and keeps it in sync with a preference store.
#[derive(Clone)]
pub struct ThemeController {
    prefs: Arc<dyn PreferenceStore>,
    mode: Arc<RwLock<ThemeMode>>,
}

impl ThemeController {
    /// Controller starting at the light default.
    pub fn new(prefs: Arc<dyn PreferenceStore>) -> Self {
        Self {
            prefs,
            mode: Arc::new(RwLock::new(ThemeMode::Light)),
        }
    }

    /// Load the persisted theme. A missing key, an unknown token or a
    /// read failure all fall back to light.
    pub async fn load(&self) -> ThemeMode {
        let loaded = match self.prefs.get(THEME_KEY).await {
            Ok(Some(value)) => match ThemeMode::parse(&value) {
                Some(mode) => mode,
                None => {
                    warn!("ignoring unknown theme value {value:?}");
                    ThemeMode::Light
                }
            },
            Ok(None) => ThemeMode::Light,
            Err(err) => {
                warn!("could not load theme preference: {err}");
                ThemeMode::Light
            }
        };
        *self.mode.write().await = loaded;
        loaded
    }

    /// The active theme.
    pub async fn current(&self) -> ThemeMode {
        *self.mode.read().await
    }

    /// Flip the theme and persist the choice. A failed save keeps the
    /// new theme for this session and logs the problem.
    pub async fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.write().await;
        *mode = mode.toggled();
        let next = *mode;
        drop(mode);

        if let Err(err) = self.prefs.set(THEME_KEY, next.as_str()).await {
            warn!("could not persist theme preference: {err}");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_tokens_round_trip() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get(THEME_KEY).await.unwrap(), None);

        prefs.set(THEME_KEY, "dark").await.unwrap();
        assert_eq!(
            prefs.get(THEME_KEY).await.unwrap(),
            Some("dark".to_string())
        );
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let path =
            std::env::temp_dir().join(format!("tutoria-prefs-{}.json", uuid::Uuid::new_v4()));
        let prefs = FilePreferences::new(&path);

        // A missing file reads as empty.
        assert_eq!(prefs.get(THEME_KEY).await.unwrap(), None);

        prefs.set(THEME_KEY, "dark").await.unwrap();
        assert_eq!(
            prefs.get(THEME_KEY).await.unwrap(),
            Some("dark".to_string())
        );

        // A second store over the same path sees the persisted value.
        let reopened = FilePreferences::new(&path);
        assert_eq!(
            reopened.get(THEME_KEY).await.unwrap(),
            Some("dark".to_string())
        );

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_file_store_replaces_corrupt_file_on_set() {
        let path =
            std::env::temp_dir().join(format!("tutoria-prefs-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "not json").await.unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(prefs.get(THEME_KEY).await.is_err());

        prefs.set(THEME_KEY, "light").await.unwrap();
        assert_eq!(
            prefs.get(THEME_KEY).await.unwrap(),
            Some("light".to_string())
        );

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_controller_defaults_to_light() {
        let controller = ThemeController::new(Arc::new(MemoryPreferences::new()));
        assert_eq!(controller.load().await, ThemeMode::Light);
        assert_eq!(controller.current().await, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_controller_persists_toggle() {
        let prefs = Arc::new(MemoryPreferences::new());
        let controller = ThemeController::new(prefs.clone());

        assert_eq!(controller.toggle().await, ThemeMode::Dark);
        assert_eq!(
            prefs.get(THEME_KEY).await.unwrap(),
            Some("dark".to_string())
        );

        // A fresh controller over the same store resumes where we left off.
        let reloaded = ThemeController::new(prefs);
        assert_eq!(reloaded.load().await, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_controller_ignores_unknown_token() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set(THEME_KEY, "sepia").await.unwrap();

        let controller = ThemeController::new(prefs);
        assert_eq!(controller.load().await, ThemeMode::Light);
    }
}

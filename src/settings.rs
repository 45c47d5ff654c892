//! Persisted settings for the moving-pixels state.
//!
//! Settings are stored as JSON. Loading a missing file yields the defaults;
//! saving goes through a temporary file in the same directory so a crash
//! never leaves a half-written file behind.

use crate::constants::{DEFAULT_HANDLE_SIZE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::editor::EditorCustomizationDelegate;
use crate::error::{SettingsError, SettingsResult};
use crate::handles::TransformHandles;
use crate::input::messages::Modifiers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A single keyboard modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shift,
    #[default]
    Ctrl,
    Alt,
    Cmd,
}

impl Modifier {
    /// Returns true if this modifier is held in `modifiers`
    pub fn is_held(&self, modifiers: &Modifiers) -> bool {
        match self {
            Modifier::Shift => modifiers.shift,
            Modifier::Ctrl => modifiers.control,
            Modifier::Alt => modifiers.alt,
            Modifier::Cmd => modifiers.platform,
        }
    }
}

/// Key bindings consulted while pixels are floating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Held to start dragging a copy of the selection
    pub copy_selection: Modifier,
}

impl EditorCustomizationDelegate for KeyBindings {
    fn is_copy_selection_key_pressed(&self, modifiers: &Modifiers) -> bool {
        self.copy_selection.is_held(modifiers)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of transform handles in screen pixels
    pub handle_size: i32,
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, returning defaults if the file does not exist.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let settings = serde_json::from_str(&contents)?;
                tracing::debug!(path = %path.display(), "Loaded settings");
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| SettingsError::InvalidPath(path.to_path_buf()))?;
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path)?;

        tracing::debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Transform handles sized per these settings.
    pub fn transform_handles(&self) -> TransformHandles {
        TransformHandles::new(self.handle_size)
    }
}

/// Platform settings path, e.g. `~/.config/movingpixels/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

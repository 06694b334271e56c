//! Centralized carousel options with TOML preset support.
//!
//! All tweakable settings (layout and scrolling, per-state looks,
//! smoothing half-lives, camera framing, input mapping, keybindings) are
//! consolidated here. Options serialize to/from TOML presets.

mod camera;
mod carousel;
mod input;
mod keybindings;
mod looks;
mod smoothing;

use std::path::Path;

pub use camera::CameraOptions;
pub use carousel::CarouselOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use looks::{LookOptions, SurfaceLook};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smoothing::SmoothingOptions;

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[looks]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Layout, scrolling and snapping.
    pub carousel: CarouselOptions,
    /// Per-state target looks.
    pub looks: LookOptions,
    /// Card animation half-lives.
    pub smoothing: SmoothingOptions,
    /// Camera framing and smoothing.
    pub camera: CameraOptions,
    /// Pointer, wheel and touch mapping.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VitrineError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

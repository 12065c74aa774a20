//! The persisted, ordered list of hooks.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::HookError;
use crate::hook::Hook;

/// Hooks in insertion order. Loaded once per process and saved after a
/// command that changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    hooks: Vec<Hook>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from a JSON array on disk. A missing file yields an
    /// empty registry.
    pub fn load(path: &Path) -> Result<Self, HookError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "config not found, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(HookError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let value: Value = serde_json::from_str(&raw).map_err(|source| HookError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&value)?;
        debug!(path = %path.display(), hooks = registry.len(), "config loaded");
        Ok(registry)
    }

    /// Build a registry from an already-parsed config document.
    pub fn from_json(value: &Value) -> Result<Self, HookError> {
        let entries = value.as_array().ok_or(HookError::TypeMismatch {
            field: "config",
            expected: "an array",
        })?;

        let hooks = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Hook::from_json(entry).map_err(|e| HookError::InvalidEntry {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { hooks })
    }

    /// Write the whole registry to `path` as a compact JSON array.
    pub fn save(&self, path: &Path) -> Result<(), HookError> {
        let json = self.to_json();
        fs::write(path, json).map_err(|source| HookError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), hooks = self.len(), "config saved");
        Ok(())
    }

    pub fn to_json(&self) -> String {
        // Hook serialization only emits strings, which cannot fail.
        serde_json::to_string(&self.hooks).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn push(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    /// Remove every hook whose URL string equals `url`. Returns the removed
    /// indexes, relative to the order before removal.
    pub fn remove_by_url(&mut self, url: &Url) -> Vec<usize> {
        let target = url.as_str();
        let removed: Vec<usize> = self
            .hooks
            .iter()
            .enumerate()
            .filter(|(_, hook)| hook.url.as_str() == target)
            .map(|(index, _)| index)
            .collect();
        self.hooks.retain(|hook| hook.url.as_str() != target);
        removed
    }

    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl FromIterator<Hook> for Registry {
    fn from_iter<I: IntoIterator<Item = Hook>>(iter: I) -> Self {
        Self {
            hooks: iter.into_iter().collect(),
        }
    }
}

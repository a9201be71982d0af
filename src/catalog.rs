//! Option Catalog
//!
//! Loads the centralized option wording (`prompt_options.json`) and resolves
//! option names to instructional text, falling back to the built-in
//! [`Fragment`] wording when the catalog is missing, partial or not yet
//! loaded.
//!
//! ## Accepted shapes
//!
//! Flat list:
//!
//! ```json
//! [ { "option": "Prefer JSON output", "prompt": "Answer in JSON." } ]
//! ```
//!
//! Nested sessions, where the first `output` entry carries the canonical
//! text (or the option's own `prompt` when there is no output list):
//!
//! ```json
//! [ { "session": "Formatting",
//!     "options": [ { "option": "Prefer JSON output",
//!                    "output": [ { "param": "", "prompt": "Answer in JSON." } ] } ] } ]
//! ```

use crate::errors::{PromptError, PromptResult};
use crate::options::{fallback_for, Fragment};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// Name-to-text lookup used by the assembler.
///
/// Implementors only provide [`lookup`](OptionLookup::lookup); resolution
/// with fallback is shared.
pub trait OptionLookup {
    /// Raw catalog text for an option name, if present
    fn lookup(&self, name: &str) -> Option<&str>;

    /// Catalog text for `name`, or `fallback` when absent or blank
    fn resolve_or(&self, name: &str, fallback: &str) -> String {
        match self.lookup(name) {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Catalog text for `name`, or the fallback registered for that name
    fn resolve(&self, name: &str) -> String {
        self.resolve_or(name, fallback_for(name).unwrap_or(""))
    }

    /// Text for a fragment: first non-blank catalog entry among its names,
    /// else its fallback
    fn resolve_fragment(&self, fragment: Fragment) -> String {
        fragment
            .catalog_names()
            .iter()
            .find_map(|name| self.lookup(name).filter(|text| !text.trim().is_empty()))
            .unwrap_or_else(|| fragment.fallback())
            .to_string()
    }
}

impl<T: OptionLookup + ?Sized> OptionLookup for &T {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

/// Single catalog entry after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical option name
    pub name: String,
    /// Instructional text (may be empty)
    pub prompt: String,
}

/// Flat name-to-text mapping, read-only once built
#[derive(Debug, Clone, Default)]
pub struct OptionCatalog {
    entries: HashMap<String, String>,
}

impl OptionCatalog {
    /// Create an empty catalog (every lookup misses)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-normalized entries; the first entry for a name wins
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.entry(entry.name).or_insert(entry.prompt);
        }
        Self { entries: map }
    }

    /// Parse a catalog document in either accepted shape.
    ///
    /// Fails only when the document is not JSON or not an array; individual
    /// malformed entries are skipped with a warning.
    pub fn from_json_str(input: &str) -> PromptResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(PromptError::catalog_format)?;
        let Value::Array(items) = value else {
            return Err(PromptError::catalog_format("expected a top-level array"));
        };

        let entries = if is_nested(&items) {
            flatten_sessions(items)
        } else {
            flatten_list(items)
        };

        Ok(Self::from_entries(entries))
    }

    /// Read and parse a catalog file
    pub fn load_from_path(path: impl AsRef<Path>) -> PromptResult<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| PromptError::catalog_load(&source, e))?;
        let catalog = Self::from_json_str(&content)?;
        info!(entries = catalog.len(), source = %source, "Loaded option catalog");
        Ok(catalog)
    }

    /// Best-effort load: any failure is logged and yields an empty catalog
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load_from_path(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(error = %err, "Could not load prompt options, using built-in wording");
                Self::empty()
            }
        }
    }

    /// Number of distinct option names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an option name is present (even with empty text)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All option names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl OptionLookup for OptionCatalog {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }
}

// --- Source shapes ---

#[derive(Debug, Deserialize)]
struct FlatEntry {
    option: String,
    #[serde(default)]
    prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionEntry {
    #[serde(default)]
    options: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct NestedOption {
    option: String,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    output: Vec<OutputEntry>,
}

#[derive(Debug, Deserialize)]
struct OutputEntry {
    #[serde(default)]
    prompt: Option<String>,
}

/// Nested shape is recognized by a `session` key on the first element
fn is_nested(items: &[Value]) -> bool {
    items
        .first()
        .and_then(Value::as_object)
        .is_some_and(|obj| obj.contains_key("session"))
}

fn flatten_list(items: Vec<Value>) -> Vec<CatalogEntry> {
    let mut entries = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<FlatEntry>(item) {
            Ok(flat) => entries.push(CatalogEntry {
                name: flat.option,
                prompt: flat.prompt.unwrap_or_default(),
            }),
            Err(err) => warn!(index = idx, error = %err, "Skipping malformed catalog entry"),
        }
    }
    entries
}

fn flatten_sessions(items: Vec<Value>) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for (idx, item) in items.into_iter().enumerate() {
        let session = match serde_json::from_value::<SessionEntry>(item) {
            Ok(session) => session,
            Err(err) => {
                warn!(index = idx, error = %err, "Skipping malformed catalog session");
                continue;
            }
        };

        for option in session.options {
            match serde_json::from_value::<NestedOption>(option) {
                Ok(opt) => {
                    let prompt = match opt.output.into_iter().next() {
                        Some(first) => first.prompt.unwrap_or_default(),
                        None => opt.prompt.unwrap_or_default(),
                    };
                    entries.push(CatalogEntry {
                        name: opt.option,
                        prompt,
                    });
                }
                Err(err) => {
                    warn!(session = idx, error = %err, "Skipping malformed catalog option")
                }
            }
        }
    }
    entries
}

// --- Shared handle ---

/// Write-once catalog handle shared between a loader and any number of
/// assemblers.
///
/// Until the catalog is installed, every lookup misses and resolution falls
/// back to built-in wording. Installing never blocks readers.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    cell: Arc<OnceLock<OptionCatalog>>,
}

impl SharedCatalog {
    /// Create an unloaded handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is already loaded
    pub fn loaded(catalog: OptionCatalog) -> Self {
        let shared = Self::new();
        shared.install(catalog);
        shared
    }

    /// Install the catalog. Returns `false` if one was already installed.
    pub fn install(&self, catalog: OptionCatalog) -> bool {
        match self.cell.set(catalog) {
            Ok(()) => true,
            Err(_) => {
                warn!("Option catalog already loaded; ignoring second load");
                false
            }
        }
    }

    /// Whether a catalog has been installed
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Installed catalog, if any
    pub fn get(&self) -> Option<&OptionCatalog> {
        self.cell.get()
    }

    /// Load the catalog file on a background thread and install the result.
    ///
    /// Failures install an empty catalog after logging a warning.
    pub fn spawn_load(&self, path: impl Into<PathBuf>) -> JoinHandle<()> {
        let shared = self.clone();
        let path = path.into();
        thread::spawn(move || {
            let catalog = OptionCatalog::load_or_empty(&path);
            shared.install(catalog);
        })
    }
}

impl OptionLookup for SharedCatalog {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.cell.get().and_then(|catalog| catalog.lookup(name))
    }
}

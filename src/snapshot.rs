//! Form Snapshots
//!
//! Flat key-value snapshots of an [`InputRecord`] and the store seam the
//! caller persists them through. Keys are the camelCase field names
//! (`systemPrompt`, `chainOfThought`, `feBrief`, ...).
//!
//! Snapshots written by older form layouts use different key names for the
//! same fields; [`LEGACY_KEYS`] maps them onto the current ones on restore.
//!
//! Persistence is best-effort: [`persist_input`] and [`restore_input`] log
//! failures and never interrupt assembly.

use crate::errors::{PromptError, PromptResult};
use crate::input::InputRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Historical key names and the current key each one maps to
pub static LEGACY_KEYS: &[(&str, &str)] = &[
    // Reasoning / process
    ("optChainOfThought", "chainOfThought"),
    ("hiddenRubric", "selfReview"),
    ("optHiddenRubric", "selfReview"),
    ("optAgentEagerness", "agenticProactivity"),
    // Grounding
    ("optAllowIdk", "allowUnknown"),
    ("optRestrictDocs", "restrictDocs"),
    ("restrictToDocs", "restrictDocs"),
    ("requireCitations", "citeSources"),
    ("askCite", "citeSources"),
    ("optCiteSources", "citeSources"),
    ("quoteExtraction", "quoteFirst"),
    ("optQuoteExtraction", "quoteFirst"),
    ("optLongContextMode", "longContextMode"),
    // Formatting
    ("optUseXml", "useXml"),
    ("optPreferJson", "preferJson"),
    ("optForbidMarkdown", "noMarkdown"),
    ("optAssistantPrefill", "assistantPrefill"),
    // Code and tooling
    ("includeCodeRules", "codeQuality"),
    ("optIncludeCodeRules", "codeQuality"),
    ("optParallelTools", "parallelTools"),
    ("optCleanupFiles", "cleanupFiles"),
    // Fields
    ("success", "successCriteria"),
    ("tone", "toneStyle"),
    ("effort", "reasoningEffort"),
];

/// Flat snapshot of a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: BTreeMap<String, Value>,
}

impl FormSnapshot {
    /// Capture the current state of a record
    pub fn capture(input: &InputRecord) -> PromptResult<Self> {
        match serde_json::to_value(input).map_err(|e| PromptError::persistence("encode", e))? {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            other => Err(PromptError::persistence(
                "encode",
                format!("expected an object, got {}", other),
            )),
        }
    }

    /// Rebuild a record. Unknown keys are ignored, missing keys default.
    ///
    /// A value of the wrong type only costs its own field: it is dropped
    /// with a warning and the field keeps its default.
    pub fn restore(&self) -> PromptResult<InputRecord> {
        let map: Map<String, Value> = self.normalized().into_iter().collect();
        match serde_json::from_value(Value::Object(map.clone())) {
            Ok(input) => Ok(input),
            Err(_) => {
                let valid: Map<String, Value> = map
                    .into_iter()
                    .filter(|(key, value)| decodes_alone(key, value))
                    .collect();
                serde_json::from_value(Value::Object(valid))
                    .map_err(|e| PromptError::persistence("decode", e))
            }
        }
    }

    /// Values with legacy keys renamed. Flags set under several names are
    /// OR-ed; for other values the current key wins.
    fn normalized(&self) -> BTreeMap<String, Value> {
        let mut values = self.values.clone();
        for (legacy, current) in LEGACY_KEYS {
            let Some(value) = values.remove(*legacy) else {
                continue;
            };
            match (values.get_mut(*current), &value) {
                (Some(Value::Bool(existing)), Value::Bool(flag)) => *existing |= *flag,
                (Some(_), _) => {}
                (None, _) => {
                    values.insert(current.to_string(), value);
                }
            }
        }
        values
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Store a raw value (used by collaborators syncing a single field)
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}

/// Whether a single key decodes into a record on its own
fn decodes_alone(key: &str, value: &Value) -> bool {
    let mut single = Map::new();
    single.insert(key.to_string(), value.clone());
    match serde_json::from_value::<InputRecord>(Value::Object(single)) {
        Ok(_) => true,
        Err(err) => {
            warn!(key = %key, error = %err, "Dropping unreadable snapshot value");
            false
        }
    }
}

/// Storage medium for snapshots, owned by the caller
pub trait SnapshotStore {
    /// Load the last saved snapshot, `None` if nothing was saved yet
    fn load(&self) -> PromptResult<Option<FormSnapshot>>;

    /// Replace the saved snapshot
    fn save(&self, snapshot: &FormSnapshot) -> PromptResult<()>;
}

/// Snapshot stored as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path` (created on first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> PromptResult<Option<FormSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| PromptError::persistence("read", e))?;
        let snapshot =
            serde_json::from_str(&content).map_err(|e| PromptError::persistence("decode", e))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &FormSnapshot) -> PromptResult<()> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| PromptError::persistence("encode", e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PromptError::persistence("write", e))?;
        }
        fs::write(&self.path, json).map_err(|e| PromptError::persistence("write", e))
    }
}

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<FormSnapshot>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> PromptResult<Option<FormSnapshot>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| PromptError::persistence("read", "store lock poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &FormSnapshot) -> PromptResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| PromptError::persistence("write", "store lock poisoned"))?;
        *slot = Some(snapshot.clone());
        Ok(())
    }
}

/// Save the record, logging instead of failing. Returns whether it was saved.
pub fn persist_input(store: &dyn SnapshotStore, input: &InputRecord) -> bool {
    let result = FormSnapshot::capture(input).and_then(|snapshot| store.save(&snapshot));
    match result {
        Ok(()) => {
            debug!("Saved form snapshot");
            true
        }
        Err(err) => {
            warn!(error = %err, "Could not save form snapshot");
            false
        }
    }
}

/// Load the saved record, or an empty one when nothing usable is stored
pub fn restore_input(store: &dyn SnapshotStore) -> InputRecord {
    match store.load().and_then(|s| s.map(|s| s.restore()).transpose()) {
        Ok(Some(input)) => input,
        Ok(None) => InputRecord::default(),
        Err(err) => {
            warn!(error = %err, "Could not load form snapshot");
            InputRecord::default()
        }
    }
}

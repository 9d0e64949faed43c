use crate::manifest::ManifestEntry;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Receives the translatable capability of an entity type, i.e. the shadow
/// fields migration tooling has to materialize.
///
/// Called once per successful registration, with the entry that replaced
/// any earlier one.
pub trait SchemaExtensionSink: Send + Sync {
    fn grant_capability(&self, entity_type: &str, entry: &ManifestEntry);
}

/// Discards grants. For hosts that read the manifest directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SchemaExtensionSink for NoopSink {
    fn grant_capability(&self, _entity_type: &str, _entry: &ManifestEntry) {}
}

/// Keeps the latest grant per entity type and can dump them as JSON for a
/// migration step.
#[derive(Debug, Default)]
pub struct RecordingSink {
    grants: Mutex<BTreeMap<String, ManifestEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent grant for `entity_type`.
    pub fn granted(&self, entity_type: &str) -> Option<ManifestEntry> {
        self.grants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_type)
            .cloned()
    }

    /// Entity types granted so far, sorted.
    pub fn entity_types(&self) -> Vec<String> {
        self.grants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// All grants as a JSON object keyed by entity type.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let grants = self.grants.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_string_pretty(&*grants)
    }
}

impl SchemaExtensionSink for RecordingSink {
    fn grant_capability(&self, entity_type: &str, entry: &ManifestEntry) {
        self.grants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entity_type.to_string(), entry.clone());
    }
}

//! Collection store: handle-keyed, type-erased record sequences.

use crate::envelope;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use standin_auth::TokenError;
use standin_record::{Shape, synthesize};
use std::collections::BTreeMap;

/// Integer handle identifying one collection.
pub type SourceId = u32;

/// One type-erased record: the owning shape's identifier plus its JSON
/// projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub shape: String,
    pub value: Value,
}

/// Errors from the strict (eager) store paths.
///
/// The fail-soft query variant converts these into the generic error
/// envelope instead of surfacing them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record serialization failed: {0}")]
    Serialize(String),

    #[error("stored record does not deserialize as shape `{shape}`: {message}")]
    ShapeMismatch {
        shape: &'static str,
        message: String,
    },
}

/// The in-memory stand-in backend.
///
/// Owns every collection and the process secret used for token gating.
/// Constructed explicitly and passed by reference; never an ambient
/// singleton.
///
/// Handles are numbered `current collection count + 1` at creation time.
/// A cleared collection keeps its slot, so numbering never collides under
/// a single-writer discipline. The store carries no interior locking:
/// hosts must serialize mutating access, in particular concurrent
/// `add_source` calls are out of contract.
#[derive(Debug, Clone)]
pub struct StandinService {
    pub(crate) sources: BTreeMap<SourceId, Vec<StoredRecord>>,
    pub(crate) secret: String,
}

impl Default for StandinService {
    fn default() -> Self {
        Self::new()
    }
}

impl StandinService {
    /// A store gated by the default process secret.
    pub fn new() -> Self {
        Self::with_secret(standin_auth::DEFAULT_SECRET)
    }

    /// A store gated by an explicit secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            sources: BTreeMap::new(),
            secret: secret.into(),
        }
    }

    /// Sign a login payload with this store's secret.
    ///
    /// The resulting token passes the gate on every token-taking
    /// operation of this store until it expires.
    pub fn login<P: Serialize>(&self, payload: &P) -> Result<String, TokenError> {
        standin_auth::issue(payload, &self.secret)
    }

    /// Allocate a new empty collection and return its handle.
    pub fn add_source(&mut self) -> SourceId {
        let id = self.sources.len() as SourceId + 1;
        self.sources.insert(id, Vec::new());
        id
    }

    /// Allocate a new collection pre-populated with `records`, in order.
    pub fn add_source_with<T: Shape>(&mut self, records: Vec<T>) -> Result<SourceId, StoreError> {
        let mut erased = Vec::with_capacity(records.len());
        for record in &records {
            erased.push(erase(record)?);
        }
        let id = self.sources.len() as SourceId + 1;
        self.sources.insert(id, erased);
        Ok(id)
    }

    /// Allocate a new collection seeded with `quantity` synthesized
    /// instances of `T`.
    pub fn add_source_synthesized<T: Shape>(
        &mut self,
        quantity: usize,
    ) -> Result<SourceId, StoreError> {
        self.add_source_with(synthesize::<T>(quantity))
    }

    /// Empty a collection's record sequence.
    ///
    /// Returns whether the handle existed. The slot itself survives, so
    /// handle numbering is unaffected.
    pub fn clear_source(&mut self, id: SourceId) -> bool {
        match self.sources.get_mut(&id) {
            Some(records) => {
                records.clear();
                true
            }
            None => false,
        }
    }

    /// Whether a handle currently names a collection.
    pub fn contains_source(&self, id: SourceId) -> bool {
        self.sources.contains_key(&id)
    }

    /// Number of records in a collection, across all shapes.
    pub fn source_len(&self, id: SourceId) -> Option<usize> {
        self.sources.get(&id).map(Vec::len)
    }

    /// Append one record to a collection.
    ///
    /// Answers with a status envelope: `Data inserted` on success, the
    /// unknown-datasource error when the handle does not exist.
    pub fn insert<T: Shape>(&mut self, id: SourceId, value: &T) -> String {
        let Some(records) = self.sources.get_mut(&id) else {
            return envelope::error(envelope::UNKNOWN_SOURCE);
        };
        match erase(value) {
            Ok(record) => {
                records.push(record);
                envelope::text(envelope::DATA_INSERTED)
            }
            Err(_) => envelope::error(envelope::QUERY_FAULT),
        }
    }
}

pub(crate) fn erase<T: Shape>(record: &T) -> Result<StoredRecord, StoreError> {
    let value = serde_json::to_value(record).map_err(|e| StoreError::Serialize(e.to_string()))?;
    Ok(StoredRecord {
        shape: T::shape_id().to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use standin_record::{FieldDescriptor, FieldKind};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Device {
        serial: i64,
        label: String,
    }

    impl Shape for Device {
        fn shape_id() -> &'static str {
            "device"
        }

        fn fields() -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor::no_update("serial", FieldKind::Integer),
                FieldDescriptor::new("label", FieldKind::Text),
            ];
            FIELDS
        }
    }

    fn device(serial: i64, label: &str) -> Device {
        Device {
            serial,
            label: label.to_string(),
        }
    }

    #[test]
    fn handles_count_up_from_one() {
        let mut service = StandinService::new();
        assert_eq!(service.add_source(), 1);
        assert_eq!(service.add_source(), 2);
        let seeded = service
            .add_source_with(vec![device(1, "a")])
            .expect("should seed");
        assert_eq!(seeded, 3);
    }

    #[test]
    fn clear_empties_but_keeps_the_slot() {
        let mut service = StandinService::new();
        let id = service
            .add_source_with(vec![device(1, "a"), device(2, "b")])
            .expect("should seed");

        assert!(service.clear_source(id));
        assert!(service.contains_source(id));
        assert_eq!(service.source_len(id), Some(0));

        // Numbering continues past the cleared slot.
        assert_eq!(service.add_source(), id + 1);
    }

    #[test]
    fn clear_on_unknown_handle_reports_false() {
        let mut service = StandinService::new();
        assert!(!service.clear_source(7));
    }

    #[test]
    fn insert_appends_in_order() {
        let mut service = StandinService::new();
        let id = service.add_source();

        let reply = service.insert(id, &device(1, "first"));
        assert_eq!(reply, envelope::text(envelope::DATA_INSERTED));
        service.insert(id, &device(2, "second"));

        assert_eq!(service.source_len(id), Some(2));
    }

    #[test]
    fn insert_into_unknown_handle_is_an_error_envelope() {
        let mut service = StandinService::new();
        let reply = service.insert(99, &device(1, "ghost"));
        let parsed: Value = serde_json::from_str(&reply).expect("should parse");
        assert_eq!(
            parsed,
            json!({"error": {"message": "Unable to find datasource"}})
        );
    }

    #[test]
    fn collections_are_independent() {
        let mut service = StandinService::new();
        let first = service
            .add_source_with(vec![device(1, "a")])
            .expect("should seed");
        let second = service
            .add_source_with(vec![device(2, "b")])
            .expect("should seed");

        service.insert(first, &device(3, "c"));
        service.clear_source(second);

        assert_eq!(service.source_len(first), Some(2));
        assert_eq!(service.source_len(second), Some(0));
    }

    #[test]
    fn synthesized_sources_are_seeded_in_index_order() {
        let mut service = StandinService::new();
        let id = service
            .add_source_synthesized::<Device>(4)
            .expect("should synthesize");
        assert_eq!(service.source_len(id), Some(4));
    }
}

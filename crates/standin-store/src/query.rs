//! Query engine: shape filtering, pagination, output modes.
//!
//! Two variants share the pipeline but not the failure contract:
//!
//! - [`StandinService::get`] is the eager variant. An internal fault (a
//!   stored record that no longer deserializes as the requested shape)
//!   propagates to the caller as [`StoreError`].
//! - [`StandinService::get_filtered`] is fail-soft. Every internal fault
//!   collapses into the generic `No method recognized` error envelope.
//!
//! The asymmetry is contractual: hosts rely on the fail-soft variant
//! never raising. Queries never mutate the store.

use crate::envelope;
use crate::store::{SourceId, StandinService, StoreError};
use standin_record::Shape;

/// Output mode for a query, default JSON.
///
/// XML is declared but unimplemented: selecting it answers with an
/// explicit error envelope rather than silently falling back. Custom
/// hands the filtered records to a caller-supplied producer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Json,
    Xml,
    Custom,
}

/// Skip-then-take pagination over the filtered sequence.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub const fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

/// Per-call query options.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    pub mode: OutputMode,
    pub page: Option<Page>,
}

impl QueryOptions {
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_page(mut self, offset: usize, limit: usize) -> Self {
        self.page = Some(Page::new(offset, limit));
        self
    }
}

impl StandinService {
    /// Query all records of shape `T` in collection `id` (eager variant).
    ///
    /// When `token` is given it is validated first; a failed check
    /// answers with the unauthorized error envelope and touches nothing.
    /// An unknown handle reads as empty, not as an error. `Ok(None)` is
    /// only produced by custom mode without a producer.
    pub fn get<T: Shape>(
        &self,
        id: SourceId,
        token: Option<&str>,
        options: QueryOptions,
        producer: Option<&dyn Fn(&[T]) -> String>,
    ) -> Result<Option<String>, StoreError> {
        if let Some(token) = token
            && !standin_auth::validate(token, &self.secret)
        {
            return Ok(Some(envelope::error(envelope::UNAUTHORIZED)));
        }

        match options.mode {
            OutputMode::Json => {
                let records = self.select::<T>(id, None, options.page)?;
                let body = envelope::data(&records)
                    .map_err(|e| StoreError::Serialize(e.to_string()))?;
                Ok(Some(body))
            }
            OutputMode::Xml => Ok(Some(envelope::error(envelope::XML_UNSUPPORTED))),
            OutputMode::Custom => {
                let records = self.select::<T>(id, None, options.page)?;
                Ok(producer.map(|produce| produce(&records)))
            }
        }
    }

    /// Query records of shape `T` matching `predicate` (fail-soft
    /// variant).
    ///
    /// Same pipeline as [`StandinService::get`], but no fault escapes:
    /// anything going wrong inside filtering or serialization answers
    /// with the generic error envelope. `None` is only produced by
    /// custom mode without a producer.
    pub fn get_filtered<T: Shape>(
        &self,
        id: SourceId,
        token: Option<&str>,
        predicate: impl Fn(&T) -> bool,
        options: QueryOptions,
        producer: Option<&dyn Fn(&[T]) -> String>,
    ) -> Option<String> {
        if let Some(token) = token
            && !standin_auth::validate(token, &self.secret)
        {
            return Some(envelope::error(envelope::UNAUTHORIZED));
        }

        match options.mode {
            OutputMode::Json => {
                let body = self
                    .select::<T>(id, Some(&predicate), options.page)
                    .and_then(|records| {
                        envelope::data(&records)
                            .map_err(|e| StoreError::Serialize(e.to_string()))
                    });
                match body {
                    Ok(body) => Some(body),
                    Err(_) => Some(envelope::error(envelope::QUERY_FAULT)),
                }
            }
            OutputMode::Xml => Some(envelope::error(envelope::XML_UNSUPPORTED)),
            OutputMode::Custom => {
                match self.select::<T>(id, Some(&predicate), options.page) {
                    Ok(records) => producer.map(|produce| produce(&records)),
                    Err(_) => Some(envelope::error(envelope::QUERY_FAULT)),
                }
            }
        }
    }

    /// Materialize the typed view of one collection: shape filter, then
    /// predicate, then pagination, preserving insertion order.
    pub(crate) fn select<T: Shape>(
        &self,
        id: SourceId,
        predicate: Option<&dyn Fn(&T) -> bool>,
        page: Option<Page>,
    ) -> Result<Vec<T>, StoreError> {
        let Some(records) = self.sources.get(&id) else {
            return Ok(Vec::new());
        };

        let mut selected = Vec::new();
        for record in records {
            if record.shape != T::shape_id() {
                continue;
            }
            let value: T =
                serde_json::from_value(record.value.clone()).map_err(|e| {
                    StoreError::ShapeMismatch {
                        shape: T::shape_id(),
                        message: e.to_string(),
                    }
                })?;
            if predicate.is_none_or(|keep| keep(&value)) {
                selected.push(value);
            }
        }

        Ok(match page {
            Some(page) => selected
                .into_iter()
                .skip(page.offset)
                .take(page.limit)
                .collect(),
            None => selected,
        })
    }
}

//! Selective updater: first-match, per-field record update.
//!
//! The replacement's fields are copied by name onto the first record of
//! the declared shape satisfying the predicate; fields carrying the
//! no-update marker keep their previous value, and scanning stops at the
//! first match. A pass that matches nothing is still a success.

use crate::envelope;
use crate::store::{SourceId, StandinService};
use standin_record::{Shape, merge_fields};

impl StandinService {
    /// Update the first record of shape `T` in `id` matching `predicate`.
    ///
    /// When `token` is given it is validated first; a failed check
    /// answers with the unauthorized error envelope and touches nothing.
    /// An unknown handle answers with the unknown-datasource error.
    /// Otherwise the reply is the `Data updated` status envelope whether
    /// or not any record matched.
    pub fn update<T: Shape>(
        &mut self,
        id: SourceId,
        token: Option<&str>,
        predicate: impl Fn(&T) -> bool,
        replacement: &T,
    ) -> String {
        if let Some(token) = token
            && !standin_auth::validate(token, &self.secret)
        {
            return envelope::error(envelope::UNAUTHORIZED);
        }

        let Some(records) = self.sources.get_mut(&id) else {
            return envelope::error(envelope::UNKNOWN_SOURCE);
        };
        let Ok(replacement_value) = serde_json::to_value(replacement) else {
            return envelope::error(envelope::QUERY_FAULT);
        };

        for record in records.iter_mut() {
            if record.shape != T::shape_id() {
                continue;
            }
            // A record that no longer deserializes as T cannot be
            // matched; it is skipped, not an error.
            let Ok(candidate) = serde_json::from_value::<T>(record.value.clone()) else {
                continue;
            };
            if predicate(&candidate) {
                merge_fields(&mut record.value, &replacement_value, T::fields());
                break;
            }
        }

        envelope::text(envelope::DATA_UPDATED)
    }
}

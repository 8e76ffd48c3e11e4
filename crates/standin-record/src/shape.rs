//! Shape descriptors: the capability interface for storable records.
//!
//! The store keeps records type-erased. Shape identity and field layout
//! are therefore declared up front by each record type rather than
//! recovered by runtime inspection: `shape_id()` tags every stored entry,
//! and `fields()` drives synthesis and selective update.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Kind of a record field, as far as synthesis and update care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any integer field. Synthesized as the instance index.
    Integer,
    /// Any floating-point field. Synthesized as the instance index.
    Float,
    /// A text field. Synthesized as `"{name}_{index}"`.
    Text,
    /// A boolean field. Synthesized from a pseudo-random draw.
    Boolean,
    /// A date or time-point field. Synthesized as now plus `index` days.
    Date,
    /// A time-of-day field. Synthesized from now plus `index` minutes,
    /// time component only.
    TimeOfDay,
    /// A nested default-constructible record. Left at its default value;
    /// inner fields are not populated recursively.
    Nested,
    /// A parameterized container (list, map, optional). Left unset.
    Container,
}

/// One entry of a shape's field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Exact serialized field name.
    pub name: &'static str,
    pub kind: FieldKind,
    /// When set, selective update never overwrites this field.
    pub no_update: bool,
}

impl FieldDescriptor {
    /// A regular, updatable field.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            no_update: false,
        }
    }

    /// A field carrying the no-update marker.
    pub const fn no_update(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            no_update: true,
        }
    }
}

/// A record type the store can hold.
///
/// `Default` is the zero value used when synthesis cannot populate a
/// field. `shape_id()` must be stable for the life of the process: it is
/// recorded with every stored entry and is the only thing connecting a
/// query's type parameter back to the type-erased data.
pub trait Shape: Serialize + DeserializeOwned + Default + Clone {
    /// Stable identifier for this shape.
    fn shape_id() -> &'static str;

    /// The field table: name, kind, and no-update marker per field.
    fn fields() -> &'static [FieldDescriptor];
}

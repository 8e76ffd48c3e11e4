//! The sample shape the CLI synthesizes and serves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use standin_record::{FieldDescriptor, FieldKind, Shape};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sample {
    pub id: i64,
    pub name: String,
    pub score: f64,
    pub active: bool,
    pub created: DateTime<Utc>,
}

impl Shape for Sample {
    fn shape_id() -> &'static str {
        "sample"
    }

    fn fields() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::no_update("id", FieldKind::Integer),
            FieldDescriptor::new("name", FieldKind::Text),
            FieldDescriptor::new("score", FieldKind::Float),
            FieldDescriptor::new("active", FieldKind::Boolean),
            FieldDescriptor::new("created", FieldKind::Date),
        ];
        FIELDS
    }
}

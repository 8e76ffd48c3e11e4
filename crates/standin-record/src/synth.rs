//! Best-effort record synthesis.
//!
//! Given a shape and a quantity, build populated instances for seeding a
//! collection without a caller-supplied dataset. Values are deterministic
//! per field kind (booleans excepted); a field the shape cannot absorb is
//! simply left at its default value. Synthesis never fails outward.

use crate::shape::{FieldDescriptor, FieldKind, Shape};
use chrono::{Duration, Utc};
use rand::Rng;
use serde_json::Value;

/// Synthesize `quantity` instances of `T`, index order.
pub fn synthesize<T: Shape>(quantity: usize) -> Vec<T> {
    (0..quantity).map(synthesize_one::<T>).collect()
}

/// Build one instance for `index`.
///
/// Starts from the shape's default JSON projection so every field the
/// synthesizer does not touch (nested records, containers, rejected
/// values) keeps its zero value. Each synthesized field is applied and
/// round-tripped individually: a field the shape rejects is reverted and
/// skipped rather than aborting the instance.
fn synthesize_one<T: Shape>(index: usize) -> T {
    let mut instance = T::default();
    let Ok(mut canvas) = serde_json::to_value(&instance) else {
        return instance;
    };
    if !canvas.is_object() {
        return instance;
    }

    for field in T::fields() {
        let Some(value) = field_value(field, index) else {
            continue;
        };
        let Some(map) = canvas.as_object_mut() else {
            break;
        };
        let previous = map.insert(field.name.to_string(), value);

        match serde_json::from_value::<T>(canvas.clone()) {
            Ok(updated) => instance = updated,
            Err(_) => {
                // Field rejected by the shape: restore the prior value.
                if let Some(map) = canvas.as_object_mut() {
                    match previous {
                        Some(previous) => {
                            map.insert(field.name.to_string(), previous);
                        }
                        None => {
                            map.remove(field.name);
                        }
                    }
                }
            }
        }
    }

    instance
}

/// Render the synthesized JSON value for one field, or `None` for kinds
/// that stay at their default.
fn field_value(field: &FieldDescriptor, index: usize) -> Option<Value> {
    match field.kind {
        FieldKind::Integer => Some(Value::from(index as i64)),
        FieldKind::Float => Some(Value::from(index as f64)),
        FieldKind::Text => Some(Value::from(format!("{}_{}", field.name, index))),
        FieldKind::Boolean => {
            // Draw in [-10, 10); positive wins, which lands near 45% true.
            Some(Value::from(rand::rng().random_range(-10..10) > 0))
        }
        FieldKind::Date => {
            let stamp = Utc::now() + Duration::days(index as i64);
            Some(Value::from(stamp.to_rfc3339()))
        }
        FieldKind::TimeOfDay => {
            let time = (Utc::now() + Duration::minutes(index as i64)).time();
            Some(Value::from(time.format("%H:%M:%S").to_string()))
        }
        FieldKind::Nested | FieldKind::Container => None,
    }
}

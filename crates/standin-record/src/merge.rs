//! Selective field merge: the copy step behind record update.
//!
//! Both sides are the JSON projections of the same shape. The merge is
//! shallow and by exact field name; fields whose descriptor carries the
//! no-update marker keep their previous value.

use crate::shape::FieldDescriptor;
use serde_json::Value;

/// Copy every updatable field from `replacement` onto `target`.
///
/// A field named by the table but absent on the target is a no-op: the
/// merge only overwrites what the target already carries. Non-object
/// values on either side leave the target untouched.
pub fn merge_fields(target: &mut Value, replacement: &Value, fields: &[FieldDescriptor]) {
    let Some(replacement_map) = replacement.as_object() else {
        return;
    };
    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    for field in fields {
        if field.no_update {
            continue;
        }
        if !target_map.contains_key(field.name) {
            continue;
        }
        if let Some(value) = replacement_map.get(field.name) {
            target_map.insert(field.name.to_string(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::FieldKind;
    use serde_json::json;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::no_update("serial", FieldKind::Integer),
        FieldDescriptor::new("label", FieldKind::Text),
        FieldDescriptor::new("online", FieldKind::Boolean),
    ];

    #[test]
    fn merge_overwrites_updatable_fields() {
        let mut target = json!({"serial": 1, "label": "old", "online": false});
        let replacement = json!({"serial": 9, "label": "new", "online": true});

        merge_fields(&mut target, &replacement, FIELDS);

        assert_eq!(target, json!({"serial": 1, "label": "new", "online": true}));
    }

    #[test]
    fn merge_skips_fields_absent_on_the_target() {
        let mut target = json!({"serial": 1, "label": "old"});
        let replacement = json!({"serial": 9, "label": "new", "online": true});

        merge_fields(&mut target, &replacement, FIELDS);

        assert_eq!(target, json!({"serial": 1, "label": "new"}));
    }

    #[test]
    fn merge_skips_fields_absent_on_the_replacement() {
        let mut target = json!({"serial": 1, "label": "old", "online": false});
        let replacement = json!({"serial": 9});

        merge_fields(&mut target, &replacement, FIELDS);

        assert_eq!(target, json!({"serial": 1, "label": "old", "online": false}));
    }

    #[test]
    fn merge_ignores_non_object_sides() {
        let mut target = json!({"serial": 1, "label": "old"});
        merge_fields(&mut target, &json!("not a record"), FIELDS);
        assert_eq!(target, json!({"serial": 1, "label": "old"}));

        let mut scalar = json!(42);
        merge_fields(&mut scalar, &json!({"label": "new"}), FIELDS);
        assert_eq!(scalar, json!(42));
    }
}

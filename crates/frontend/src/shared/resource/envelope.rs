//! Response bodies come either bare or wrapped in the entity name:
//! `{"vendor": {...}}`, `{"vendors": [...]}` or `{"vendor": [...]}`.

use contracts::domain::common::ResourceKind;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::http::ApiError;

/// Decode a single entity
pub fn decode_one<R: DeserializeOwned>(kind: ResourceKind, body: Value) -> Result<R, ApiError> {
    let payload = match body {
        Value::Object(mut map) if map.contains_key(kind.envelope()) => map
            .remove(kind.envelope())
            .unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a list of entities
pub fn decode_list<R: DeserializeOwned>(
    kind: ResourceKind,
    body: Value,
) -> Result<Vec<R>, ApiError> {
    let payload = match body {
        Value::Object(mut map) => [kind.collection_name(), kind.envelope()]
            .iter()
            .find_map(|k| map.remove(*k).filter(Value::is_array))
            .ok_or_else(|| {
                ApiError::Decode(format!(
                    "expected an array or a \"{}\" field",
                    kind.collection_name()
                ))
            })?,
        other => other,
    };
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_category::aggregate::Category;
    use serde_json::json;

    #[test]
    fn single_entity_wrapped_or_bare() {
        let wrapped: Category =
            decode_one(ResourceKind::Category, json!({"category": {"name": "Tools"}})).unwrap();
        let bare: Category = decode_one(ResourceKind::Category, json!({"name": "Tools"})).unwrap();
        assert_eq!(wrapped, bare);
    }

    #[test]
    fn list_accepts_all_shapes() {
        let bare: Vec<Category> =
            decode_list(ResourceKind::Category, json!([{"name": "A"}, {"name": "B"}])).unwrap();
        let plural: Vec<Category> =
            decode_list(ResourceKind::Category, json!({"categories": [{"name": "A"}]})).unwrap();
        let singular: Vec<Category> =
            decode_list(ResourceKind::Category, json!({"category": [{"name": "A"}]})).unwrap();
        assert_eq!(bare.len(), 2);
        assert_eq!(plural.len(), 1);
        assert_eq!(singular.len(), 1);
    }

    #[test]
    fn list_rejects_objects_without_array() {
        let err = decode_list::<Category>(ResourceKind::Category, json!({"count": 0})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn malformed_entity_is_a_decode_error() {
        let err = decode_one::<Category>(ResourceKind::Category, json!({"category": {"title": 1}}))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}

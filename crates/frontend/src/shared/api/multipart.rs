//! Multipart bodies for endpoints that take `multipart/form-data`
//! (category writes, image upload).

use serde::Serialize;
use serde_json::Value;
use web_sys::FormData;

use super::ApiError;

/// Flattens a JSON object payload into form fields.
///
/// Strings go as-is, numbers and booleans as their JSON text, arrays as
/// repeated fields, nested objects as JSON text; nulls are left out.
/// An empty array is sent once as `[]`, so clearing a list reaches the
/// backend instead of looking like an unchanged field.
pub fn form_fields<P: Serialize>(payload: &P) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(ApiError::Decode(
            "multipart payload must be a JSON object".to_string(),
        ));
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) if items.is_empty() => {
                fields.push((key, "[]".to_string()));
            }
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(&item) {
                        fields.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(&other) {
                    fields.push((key, text));
                }
            }
        }
    }
    Ok(fields)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

pub fn to_form_data<P: Serialize>(payload: &P) -> Result<FormData, ApiError> {
    let form = new_form_data()?;
    for (key, value) in form_fields(payload)? {
        form.append_with_str(&key, &value)
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    }
    Ok(form)
}

/// Single-file body: `field` carries the file under its own name
pub fn file_form_data(field: &str, file: &web_sys::File) -> Result<FormData, ApiError> {
    let form = new_form_data()?;
    form.append_with_blob_and_filename(field, file, &file.name())
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    Ok(form)
}

fn new_form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|e| ApiError::Decode(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::CategoryPayload;

    #[test]
    fn test_category_payload_fields() {
        let payload = CategoryPayload {
            category_id: "RINGS".into(),
            name: "Rings".into(),
            description: String::new(),
            image_urls: vec!["https://cdn/1.jpg".into(), "https://cdn/2.jpg".into()],
            subcategories: vec![],
        };
        let mut fields = form_fields(&payload).unwrap();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("categoryId".to_string(), "RINGS".to_string()),
                ("description".to_string(), String::new()),
                ("imageUrls".to_string(), "https://cdn/1.jpg".to_string()),
                ("imageUrls".to_string(), "https://cdn/2.jpg".to_string()),
                ("name".to_string(), "Rings".to_string()),
                ("subcategories".to_string(), "[]".to_string()),
            ]
        );
    }

    #[test]
    fn test_cleared_lists_are_still_sent() {
        let payload = CategoryPayload {
            category_id: "RINGS".into(),
            name: "Rings".into(),
            description: String::new(),
            image_urls: vec![],
            subcategories: vec![],
        };
        let fields = form_fields(&payload).unwrap();
        let value_of = |key: &str| {
            fields
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(value_of("imageUrls"), vec!["[]"]);
        assert_eq!(value_of("subcategories"), vec!["[]"]);
    }

    #[test]
    fn test_scalars_nulls_and_nested() {
        let payload = serde_json::json!({
            "active": true,
            "position": 3,
            "linkUrl": null,
            "meta": {"a": 1}
        });
        let mut fields = form_fields(&payload).unwrap();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("active".to_string(), "true".to_string()),
                ("meta".to_string(), r#"{"a":1}"#.to_string()),
                ("position".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(matches!(form_fields(&vec![1, 2]), Err(ApiError::Decode(_))));
    }
}

//! Validation of inbound event requests.
//!
//! The payload is checked field by field against the event schema so that a
//! rejected request reports every offending field at once, not just the
//! first one a deserializer trips over.

use std::borrow::Cow;
use std::str::FromStr;

use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use crate::models::{EventType, ListingUpdates, MarketplaceEvent};

/// Validate the `type` query parameter together with the raw JSON body.
///
/// Returns the typed event, or every field-level error found. Unknown keys
/// in the body are ignored.
pub fn validate_event(
    raw_type: Option<&str>,
    body: &[u8],
) -> Result<MarketplaceEvent, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let event_type = parse_event_type(raw_type, &mut errors);

    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.add(
                "body",
                field_error("invalid_json", format!("body is not valid JSON: {e}")),
            );
            None
        }
    };

    let object = match payload.as_ref() {
        Some(Value::Object(object)) => object,
        Some(other) => {
            errors.add("body", type_error("object", other));
            return Err(errors);
        }
        None => return Err(errors),
    };

    let address = required_string(object, "address", "address", &mut errors);
    let collection = required_string(object, "collection", "collection", &mut errors);
    let image = required_string(object, "image", "image", &mut errors);
    let name = required_string(object, "name", "name", &mut errors);
    let price = required_string(object, "price", "price", &mut errors);
    let quantity = required_integer(object, "quantity", "quantity", &mut errors);
    let user = required_string(object, "user", "user", &mut errors);
    let expires = optional_integer(object, "expires", "expires", &mut errors);
    let updates = optional_updates(object, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    match (event_type, address, collection, image, name, price, quantity, user) {
        (
            Some(event_type),
            Some(address),
            Some(collection),
            Some(image),
            Some(name),
            Some(price),
            Some(quantity),
            Some(user),
        ) => Ok(MarketplaceEvent {
            event_type,
            address,
            collection,
            image,
            name,
            price,
            quantity,
            user,
            expires,
            updates,
        }),
        _ => Err(errors),
    }
}

fn parse_event_type(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<EventType> {
    match raw {
        Some(raw) => match EventType::from_str(raw) {
            Ok(event_type) => Some(event_type),
            Err(_) => {
                errors.add(
                    "type",
                    field_error(
                        "invalid_enum_value",
                        format!("expected 'list' | 'sold' | 'update', received '{raw}'"),
                    ),
                );
                None
            }
        },
        None => {
            errors.add("type", field_error("required", "type is required".to_string()));
            None
        }
    }
}

fn optional_updates(
    object: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<ListingUpdates> {
    let updates = match object.get("updates")? {
        Value::Object(updates) => updates,
        other => {
            errors.add("updates", type_error("object", other));
            return None;
        }
    };

    let price = required_string(updates, "price", "updates.price", errors);
    let quantity = required_integer(updates, "quantity", "updates.quantity", errors);
    let expires = required_integer(updates, "expires", "updates.expires", errors);

    Some(ListingUpdates {
        price: price?,
        quantity: quantity?,
        expires: expires?,
    })
}

fn required_string(
    object: &Map<String, Value>,
    key: &str,
    path: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            errors.add(path, type_error("string", other));
            None
        }
        None => {
            errors.add(path, missing(path));
            None
        }
    }
}

fn required_integer(
    object: &Map<String, Value>,
    key: &str,
    path: &'static str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    match object.get(key) {
        Some(value) => integer(value, path, errors),
        None => {
            errors.add(path, missing(path));
            None
        }
    }
}

fn optional_integer(
    object: &Map<String, Value>,
    key: &str,
    path: &'static str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    object
        .get(key)
        .and_then(|value| integer(value, path, errors))
}

fn integer(value: &Value, path: &'static str, errors: &mut ValidationErrors) -> Option<i64> {
    let parsed = value.as_i64().or_else(|| {
        // 3.0 is an integer as far as a JSON producer is concerned
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    });

    if parsed.is_none() {
        errors.add(path, type_error("integer", value));
    }
    parsed
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn missing(path: &str) -> ValidationError {
    field_error("required", format!("{path} is required"))
}

fn type_error(expected: &str, received: &Value) -> ValidationError {
    field_error(
        "invalid_type",
        format!("expected {expected}, received {}", json_type(received)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    fn listing() -> Value {
        json!({
            "address": "0xabc",
            "collection": "Smol Brains",
            "image": "https://example.com/smol.png",
            "name": "Smol #42",
            "price": "100",
            "quantity": 3,
            "user": "0xseller"
        })
    }

    fn fields_in_error(errors: &ValidationErrors) -> Vec<String> {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_listing() {
        let event = validate_event(Some("list"), &body(listing())).unwrap();

        assert_eq!(event.event_type, EventType::List);
        assert_eq!(event.address, "0xabc");
        assert_eq!(event.collection, "Smol Brains");
        assert_eq!(event.price, "100");
        assert_eq!(event.quantity, 3);
        assert_eq!(event.user, "0xseller");
        assert_eq!(event.expires, None);
        assert_eq!(event.updates, None);
    }

    #[test]
    fn test_valid_update_with_expiry() {
        let mut payload = listing();
        payload["expires"] = json!(1_700_000_000_000_i64);
        payload["updates"] =
            json!({"price": "90", "quantity": 5, "expires": 1_800_000_000_000_i64});

        let event = validate_event(Some("update"), &body(payload)).unwrap();

        assert_eq!(event.expires, Some(1_700_000_000_000));
        assert_eq!(
            event.updates,
            Some(ListingUpdates {
                price: "90".to_string(),
                quantity: 5,
                expires: 1_800_000_000_000,
            })
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut payload = listing();
        payload["tokenId"] = json!("42");

        assert!(validate_event(Some("sold"), &body(payload)).is_ok());
    }

    #[test]
    fn test_invalid_event_type() {
        let errors = validate_event(Some("deleted"), &body(listing())).unwrap_err();
        assert_eq!(fields_in_error(&errors), vec!["type"]);
    }

    #[test]
    fn test_missing_event_type() {
        let errors = validate_event(None, &body(listing())).unwrap_err();
        assert_eq!(fields_in_error(&errors), vec!["type"]);
    }

    #[test]
    fn test_reports_every_missing_field() {
        let errors = validate_event(Some("list"), &body(json!({"name": "Smol #42"}))).unwrap_err();

        assert_eq!(
            fields_in_error(&errors),
            vec!["address", "collection", "image", "price", "quantity", "user"]
        );
    }

    #[test]
    fn test_wrong_types() {
        let mut payload = listing();
        payload["price"] = json!(100);
        payload["quantity"] = json!("3");
        payload["expires"] = json!(null);

        let errors = validate_event(Some("list"), &body(payload)).unwrap_err();

        assert_eq!(fields_in_error(&errors), vec!["expires", "price", "quantity"]);
        let price_errors = errors.field_errors();
        let price = &price_errors["price"][0];
        assert_eq!(price.code, "invalid_type");
        assert_eq!(
            price.message.as_deref(),
            Some("expected string, received integer")
        );
    }

    #[test]
    fn test_fractional_quantity_is_rejected() {
        let mut payload = listing();
        payload["quantity"] = json!(2.5);

        let errors = validate_event(Some("list"), &body(payload)).unwrap_err();
        assert_eq!(fields_in_error(&errors), vec!["quantity"]);
    }

    #[test]
    fn test_whole_float_quantity_is_accepted() {
        let mut payload = listing();
        payload["quantity"] = json!(4.0);

        let event = validate_event(Some("list"), &body(payload)).unwrap();
        assert_eq!(event.quantity, 4);
    }

    #[test]
    fn test_nested_update_errors_use_dotted_paths() {
        let mut payload = listing();
        payload["updates"] = json!({"price": "90"});

        let errors = validate_event(Some("update"), &body(payload)).unwrap_err();
        assert_eq!(
            fields_in_error(&errors),
            vec!["updates.expires", "updates.quantity"]
        );
    }

    #[test]
    fn test_updates_must_be_an_object() {
        let mut payload = listing();
        payload["updates"] = json!([1, 2]);

        let errors = validate_event(Some("update"), &body(payload)).unwrap_err();
        assert_eq!(fields_in_error(&errors), vec!["updates"]);
    }

    #[test]
    fn test_body_must_be_json_object() {
        let errors = validate_event(Some("list"), b"[]").unwrap_err();
        assert_eq!(fields_in_error(&errors), vec!["body"]);

        let errors = validate_event(Some("list"), b"not json").unwrap_err();
        assert_eq!(fields_in_error(&errors), vec!["body"]);
    }

    #[test]
    fn test_type_and_body_errors_are_reported_together() {
        let errors = validate_event(Some("nope"), &body(json!({}))).unwrap_err();
        let fields = fields_in_error(&errors);

        assert!(fields.contains(&"type".to_string()));
        assert!(fields.contains(&"address".to_string()));
    }
}

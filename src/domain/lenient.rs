// Forgiving field decoders for backend payloads.
//
// The ERP sends `false` for empty relational and char fields, floats where
// counts are expected, and `[id, "Name"]` pairs for many2one values. A single
// odd field must not reject the whole dashboard.
use super::dashboard::EventId;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// JSON values the dashboard treats as "nothing": null, false, 0 and "".
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        // many2one: [id, display_name]
        Value::Array(pair) => pair
            .into_iter()
            .nth(1)
            .and_then(|name| name.as_str().map(str::to_string))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn i64_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(to_i64(&Value::deserialize(deserializer)?).unwrap_or(0))
}

pub fn f64_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(to_f64(&Value::deserialize(deserializer)?).unwrap_or(0.0))
}

pub fn optional_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(to_i64(&Value::deserialize(deserializer)?))
}

pub fn optional_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(to_f64(&Value::deserialize(deserializer)?))
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(to_text(Value::deserialize(deserializer)?))
}

pub fn event_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EventId, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(id) => EventId::Text(id),
        other => EventId::Int(to_i64(&other).unwrap_or(0)),
    })
}

/// Falsy sections decode as their default; anything else must be a proper object.
pub fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(D::Error::custom)
}

/// Non-arrays decode as empty; entries that are not records are skipped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(to_i64(&json!(4.0)), Some(4));
        assert_eq!(to_i64(&json!(7)), Some(7));
        assert_eq!(to_i64(&json!("12")), Some(12));
        assert_eq!(to_i64(&json!(false)), None);
        assert_eq!(to_f64(&json!(3)), Some(3.0));
        assert_eq!(to_f64(&Value::Null), None);
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(to_text(json!("Ama Mensah")), "Ama Mensah");
        assert_eq!(to_text(json!(false)), "");
        assert_eq!(to_text(Value::Null), "");
        assert_eq!(to_text(json!([14, "Kofi Boateng"])), "Kofi Boateng");
        assert_eq!(to_text(json!(42)), "42");
    }
}

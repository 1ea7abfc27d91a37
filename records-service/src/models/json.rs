//! BSON to JSON rendering for documents sent back to clients.

use mongodb::bson::Bson;
use serde_json::{Map, Number, Value};

/// Renders a stored value the way a JSON API client expects it: object ids
/// as hex strings, dates as RFC 3339 strings, integral doubles as integers.
/// Anything without a natural JSON form falls back to relaxed extended JSON.
pub fn to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| value.clone().into_relaxed_extjson()),
        Bson::Double(d) => double_to_json(*d),
        Bson::Int32(i) => Value::from(*i),
        Bson::Int64(i) => Value::from(*i),
        Bson::String(s) => Value::String(s.clone()),
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Array(items) => Value::Array(items.iter().map(to_json).collect()),
        Bson::Document(doc) => {
            let map: Map<String, Value> = doc.iter().map(|(k, v)| (k.clone(), to_json(v))).collect();
            Value::Object(map)
        }
        other => other.clone().into_relaxed_extjson(),
    }
}

fn double_to_json(d: f64) -> Value {
    // 2^53: beyond it not every integer is representable as a double.
    const MAX_SAFE: f64 = 9_007_199_254_740_992.0;
    if d.fract() == 0.0 && d.abs() <= MAX_SAFE {
        return Value::from(d as i64);
    }
    Number::from_f64(d).map(Value::Number).unwrap_or(Value::Null)
}

/// Text form of a value for string interpolation: strings unquoted,
/// everything else as its JSON text.
pub fn to_display(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        other => to_json(other).to_string(),
    }
}

// src/services/json_extract.rs
use serde_json::Value;

/// Recover a JSON object embedded in surrounding text, e.g. a model reply
/// that wraps its JSON in prose.
///
/// Candidates always start at the first `{`; they end at each `}` from the
/// back of the text toward the front, so the longest parseable candidate
/// wins. A later `{` is never tried as a new start. Returns the compact
/// serialization of the parsed value.
pub fn extract_first_json_object(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let tail = &text[start..];

    tail.rmatch_indices('}')
        .find_map(|(end, _)| serde_json::from_str::<Value>(&tail[..=end]).ok())
        .and_then(|mut value| {
            normalize_numbers(&mut value);
            serde_json::to_string(&value).ok()
        })
}

// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write integral floats (`1.0`, `1e2`) as integers (`1`, `100`).
fn normalize_numbers(value: &mut Value) {
    if let Some(f) = integral_float(value) {
        *value = Value::from(f as i64);
        return;
    }
    match value {
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

fn integral_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER),
        _ => None,
    }
}

/// Same as [`extract_first_json_object`]; non-string values yield `None`.
pub fn extract_first_json_object_from_value(value: &Value) -> Option<String> {
    value.as_str().and_then(extract_first_json_object)
}

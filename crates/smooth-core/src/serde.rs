//! JSON encoding used for policies and suite reports.
//!
//! Suite digests hash these bytes, so object keys are always written in
//! sorted order regardless of how `serde_json` was built.

use ::serde::de::DeserializeOwned;
use ::serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, SmoothError};

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (_, nested) in &mut entries {
                sort_keys(nested);
            }
            *map = entries.into_iter().collect::<Map<String, Value>>();
        }
        Value::Array(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}

/// Encodes `value` as compact JSON with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SmoothError> {
    let mut tree = serde_json::to_value(value)
        .map_err(|err| SmoothError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    sort_keys(&mut tree);
    serde_json::to_vec(&tree)
        .map_err(|err| SmoothError::Serde(ErrorInfo::new("json-write", err.to_string())))
}

/// Decodes JSON bytes, mapping parse failures to `json-read`.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, SmoothError> {
    serde_json::from_slice(data)
        .map_err(|err| SmoothError::Serde(ErrorInfo::new("json-read", err.to_string())))
}

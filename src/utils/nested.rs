//! Path lookups into nested JSON objects

use serde_json::Value;

use crate::error::KeyError;

/// Walk `nested_map` one key at a time and return the value at the end of `path`.
///
/// Every value along the way must be a JSON object holding the next key. The
/// first key that cannot be resolved is returned as a [`KeyError`], including
/// when the value it would be looked up in is a scalar, an array or `null`.
/// An empty path returns `nested_map` itself.
///
/// # Example
/// ```ignore
/// let map = json!({"a": {"b": 2}});
/// assert_eq!(access_nested_map(&map, &["a", "b"])?, &json!(2));
/// ```
pub fn access_nested_map<'a, K>(nested_map: &'a Value, path: &[K]) -> Result<&'a Value, KeyError>
where
    K: AsRef<str>,
{
    path.iter().try_fold(nested_map, |current, key| {
        let key = key.as_ref();
        current
            .as_object()
            .and_then(|map| map.get(key))
            .ok_or_else(|| KeyError(key.to_string()))
    })
}

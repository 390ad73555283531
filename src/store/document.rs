use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::Store;
use crate::error::Result;

/// Reads and decodes the document stored under `key`.
///
/// A missing key and a value that fails to decode both yield `None`; the
/// caller falls back to its default collection.
pub fn load_document<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: Store + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, "Ignoring malformed stored document: {e}");
            Ok(None)
        }
    }
}

pub fn save_document<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: Store + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

//! Directory entry model and the raw add-request payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored registration record.
///
/// Field order here is the field order in the backing JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Ten-digit mobile number; unique across the directory.
    pub number: String,
    pub place: String,
    pub district: String,
    pub state: String,
}

/// An unvalidated entry as submitted by a client.
///
/// Missing fields are empty strings, so the validator can report every
/// problem at once instead of failing on the first absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub number: String,
    pub place: String,
    pub district: String,
    pub state: String,
}

impl NewEntry {
    /// Build a candidate entry from a decoded JSON object.
    ///
    /// Absent keys and non-string values both read as `""`.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            number: field("number"),
            place: field("place"),
            district: field("district"),
            state: field("state"),
        }
    }
}

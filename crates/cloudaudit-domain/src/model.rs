use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub const FIELD_ACCESS_KEYS: &str = "AccessKeys";
pub const FIELD_ACCESS_KEY_ID: &str = "AccessKeyId";
pub const FIELD_STATUS: &str = "Status";

/// Point-in-time description of an audited resource.
///
/// The snapshot is opaque: checks pull the fields they care about and tolerate
/// anything missing or oddly shaped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSnapshot {
    fields: Map<String, Value>,
}

#[derive(Debug, Error)]
#[error("resource snapshot must be a JSON object, got {kind}")]
pub struct SnapshotError {
    kind: &'static str,
}

/// A snapshot entry that could not be interpreted. Recovered locally by skipping the entry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed snapshot field `{field}`: {reason}")]
pub struct MalformedSnapshotField {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ResourceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SnapshotError {
                kind: json_kind(&other),
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Access keys in snapshot order.
    ///
    /// An absent `AccessKeys` field reads as no keys. Entries that are not
    /// usable are skipped.
    pub fn access_keys(&self) -> Vec<AccessKey> {
        let Some(raw) = self.fields.get(FIELD_ACCESS_KEYS) else {
            return Vec::new();
        };
        let Some(entries) = raw.as_array() else {
            debug!(
                field = FIELD_ACCESS_KEYS,
                kind = json_kind(raw),
                "ignoring non-array field"
            );
            return Vec::new();
        };

        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match AccessKey::from_entry(entry) {
                Ok(key) => Some(key),
                Err(err) => {
                    debug!(index, %err, "skipping access key entry");
                    None
                }
            })
            .collect()
    }
}

impl From<Map<String, Value>> for ResourceSnapshot {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKeyStatus {
    Active,
    Inactive,
}

impl AccessKeyStatus {
    /// Only the exact string `Active` is active; any other status counts as inactive.
    pub fn from_status(status: &str) -> Self {
        if status == "Active" {
            AccessKeyStatus::Active
        } else {
            AccessKeyStatus::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == AccessKeyStatus::Active
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKey {
    pub access_key_id: String,
    pub status: AccessKeyStatus,
}

impl AccessKey {
    pub fn from_entry(entry: &Value) -> Result<Self, MalformedSnapshotField> {
        let Some(obj) = entry.as_object() else {
            return Err(MalformedSnapshotField {
                field: FIELD_ACCESS_KEYS,
                reason: "entry is not an object",
            });
        };
        let status = match obj.get(FIELD_STATUS) {
            Some(Value::String(s)) => AccessKeyStatus::from_status(s),
            Some(_) => {
                return Err(MalformedSnapshotField {
                    field: FIELD_STATUS,
                    reason: "not a string",
                });
            }
            None => {
                return Err(MalformedSnapshotField {
                    field: FIELD_STATUS,
                    reason: "missing",
                });
            }
        };
        let access_key_id = match obj.get(FIELD_ACCESS_KEY_ID) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(MalformedSnapshotField {
                    field: FIELD_ACCESS_KEY_ID,
                    reason: "not a string",
                });
            }
            None => {
                return Err(MalformedSnapshotField {
                    field: FIELD_ACCESS_KEY_ID,
                    reason: "missing",
                });
            }
        };

        Ok(AccessKey {
            access_key_id,
            status,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

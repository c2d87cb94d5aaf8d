//! The trigger envelope delivered by the configuration-rules service.

use anyhow::Context;
use cloudaudit_types::ids;
use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEvent {
    #[serde(deserialize_with = "invoking_event")]
    pub invoking_event: InvokingEvent,
    pub result_token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokingEvent {
    pub configuration_item: ConfigurationItem,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItem {
    pub resource_type: String,
    pub resource_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub configuration_item_capture_time: OffsetDateTime,
    #[serde(default)]
    pub configuration_item_status: Option<String>,
}

impl ConfigurationItem {
    pub fn is_deleted(&self) -> bool {
        matches!(
            self.configuration_item_status.as_deref(),
            Some(ids::ITEM_STATUS_RESOURCE_DELETED | ids::ITEM_STATUS_RESOURCE_DELETED_NOT_RECORDED)
        )
    }
}

/// The service sends `invokingEvent` as a JSON-encoded string; tests and local runs
/// often inline the object.
fn invoking_event<'de, D>(deserializer: D) -> Result<InvokingEvent, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Encoded(String),
        Inline(InvokingEvent),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Encoded(text) => serde_json::from_str(&text).map_err(serde::de::Error::custom),
        Raw::Inline(event) => Ok(event),
    }
}

pub fn parse_event(text: &str) -> anyhow::Result<TriggerEvent> {
    serde_json::from_str(text).context("parse trigger event")
}

use serde::Serialize;
use serde_json::Value;

/// One inbound event as it moves through the ingestion pipeline.
///
/// The struct is filled in stage by stage: the body parser sets `data`, the
/// header extractor sets `write_key`, `timestamp` and `sample_rate`, partition
/// selection sets `chosen_partition`, and timestamp finalization replaces a
/// missing `timestamp` with the current time. The serialized form is exactly
/// what gets written to the partition log, so the field names here are the
/// on-disk record layout.
#[derive(Debug, Clone, Serialize)]
pub struct InboundEvent {
    #[serde(rename = "Data")]
    pub data: Value,
    #[serde(rename = "WriteKey")]
    pub write_key: String,
    #[serde(rename = "SampleRate")]
    pub sample_rate: i64,
    #[serde(rename = "Timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "ChosenPartition", skip_serializing_if = "Option::is_none")]
    pub chosen_partition: Option<i32>,
}

impl InboundEvent {
    /// Starts an event from its parsed body; everything else comes later.
    pub fn new(data: Value) -> Self {
        InboundEvent {
            data,
            write_key: String::new(),
            sample_rate: 1,
            timestamp: None,
            chosen_partition: None,
        }
    }
}

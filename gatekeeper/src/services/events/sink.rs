use common::model::event::InboundEvent;
use std::fs;
use std::path::PathBuf;

/// Writes accepted events to their partition's log file.
///
/// One file per partition id under the configured root; each write replaces
/// the previous record for that partition. Stands in for a durable
/// partition-addressed store.
pub struct EventSink {
    root: PathBuf,
}

impl EventSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        EventSink { root: root.into() }
    }

    pub fn persist(&self, event: &InboundEvent) -> Result<PathBuf, String> {
        let partition = event
            .chosen_partition
            .ok_or_else(|| "no partition chosen for event".to_string())?;
        let path = self.root.join(format!("api{}.log", partition));
        let record = serde_json::to_vec(event).map_err(|e| e.to_string())?;
        fs::write(&path, record).map_err(|e| e.to_string())?;
        Ok(path)
    }
}

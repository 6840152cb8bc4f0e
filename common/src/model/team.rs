use serde::Serialize;

/// A team allowed to submit events, identified by its shared-secret write key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub write_key: String,
}

impl Team {
    pub fn new(id: u32, name: &str, write_key: &str) -> Self {
        Team {
            id,
            name: name.to_string(),
            write_key: write_key.to_string(),
        }
    }
}

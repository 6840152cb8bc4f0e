use serde::Serialize;

/// A named event stream. Incoming events are spread across the partitions
/// assigned to it; an empty partition list means nothing is assignable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub id: u32,
    pub name: String,
    pub partition_list: Vec<i32>,
}

impl Dataset {
    pub fn new(id: u32, name: &str, partition_list: Vec<i32>) -> Self {
        Dataset {
            id,
            name: name.to_string(),
            partition_list,
        }
    }
}

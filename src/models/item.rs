use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

/// Fixed in-memory catalogue served by the demo listing endpoint.
pub fn catalogue(total: u64) -> Vec<Item> {
    (1..=total)
        .map(|id| Item {
            id,
            name: format!("Item {}", id),
        })
        .collect()
}

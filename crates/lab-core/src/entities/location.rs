//! Location entity - a collection centre

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How to reach a centre from a nearby transit point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityInfo {
    /// Airport, Bus Station, Metro Station, Train Station
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub distance: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub map_link: Option<String>,
    pub opening_hours: Option<String>,
    pub connectivity: Vec<ConnectivityInfo>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Distinct connectivity kinds, in first-seen order
    pub fn connectivity_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for info in &self.connectivity {
            if !kinds.contains(&info.kind.as_str()) {
                kinds.push(&info.kind);
            }
        }
        kinds
    }
}

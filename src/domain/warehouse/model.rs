//! Warehouse domain entity

use serde::{Deserialize, Serialize};

/// Stored warehouse status.
///
/// Assigned by staff, never derived from `current_load / capacity`. See
/// [`crate::application::views::warehouse`] for the computed load tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseStatus {
    Available,
    Full,
    Overloaded,
}

impl Default for WarehouseStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl WarehouseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Full => "full",
            Self::Overloaded => "overloaded",
        }
    }
}

impl std::fmt::Display for WarehouseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Slots available
    pub capacity: u32,
    /// Slots in use
    pub current_load: u32,
    pub status: WarehouseStatus,
    /// Ids of containers assigned here
    pub containers: Vec<String>,
}

//! Container domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a container is in its journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerStatus {
    /// On the way to its warehouse
    InTransit,
    /// Checked in at the warehouse
    Arrived,
    /// Something went wrong en route
    Incident,
    /// Heading back to origin
    Returning,
}

impl Default for ContainerStatus {
    fn default() -> Self {
        Self::InTransit
    }
}

impl ContainerStatus {
    pub const ALL: [ContainerStatus; 4] = [
        Self::InTransit,
        Self::Arrived,
        Self::Incident,
        Self::Returning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InTransit => "in_transit",
            Self::Arrived => "arrived",
            Self::Incident => "incident",
            Self::Returning => "returning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in_transit" => Some(Self::InTransit),
            "arrived" => Some(Self::Arrived),
            "incident" => Some(Self::Incident),
            "returning" => Some(Self::Returning),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outer dimensions in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Dimensions {
    /// A 20ft standard box
    fn default() -> Self {
        Self {
            length: 6.0,
            width: 2.4,
            height: 2.6,
        }
    }
}

impl Dimensions {
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Shipping container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    /// Human-facing code, e.g. `CONT-001`
    pub code: String,
    /// Free-form kind, e.g. `20ft Standard`
    #[serde(rename = "type")]
    pub container_type: String,
    pub status: ContainerStatus,
    pub warehouse_id: String,
    pub notes: String,
    pub location: String,
    /// Gross weight in kg
    pub weight: f64,
    pub dimensions: Dimensions,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Username of whoever touched the record last
    pub last_updated_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in ContainerStatus::ALL {
            assert_eq!(ContainerStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ContainerStatus::from_str("lost"), None);
    }

    #[test]
    fn default_dimensions_are_twenty_foot() {
        let dims = Dimensions::default();
        assert!((dims.volume() - 37.44).abs() < 1e-9);
    }
}

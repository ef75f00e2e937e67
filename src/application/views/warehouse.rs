//! Warehouse utilization, computed at display time
//!
//! The stored [`WarehouseStatus`] is set by staff and never derived, so the
//! load tier computed here can disagree with it. Rows carry a
//! `status_mismatch` flag instead of silently overriding either value.

use serde::Serialize;

use crate::domain::{Warehouse, WarehouseStatus};

/// Utilization band used for badges and bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTier {
    /// Below 80%
    Nominal,
    /// 80% to 100% inclusive
    Full,
    /// Above 100%
    Overloaded,
}

impl LoadTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            0..=79 => Self::Nominal,
            80..=100 => Self::Full,
            _ => Self::Overloaded,
        }
    }

    /// The stored status this tier corresponds to
    pub fn expected_status(&self) -> WarehouseStatus {
        match self {
            Self::Nominal => WarehouseStatus::Available,
            Self::Full => WarehouseStatus::Full,
            Self::Overloaded => WarehouseStatus::Overloaded,
        }
    }
}

fn percentage(load: u64, capacity: u64) -> Option<u32> {
    if capacity == 0 {
        return None;
    }
    let ratio = (load as f64 / capacity as f64 * 100.0).round();
    Some(ratio.min(u32::MAX as f64) as u32)
}

/// `round(current_load / capacity * 100)`; `None` for zero capacity
pub fn utilization_percentage(warehouse: &Warehouse) -> Option<u32> {
    percentage(warehouse.current_load.into(), warehouse.capacity.into())
}

/// Tier from the computed percentage. Zero capacity counts as overloaded
/// once anything is stored there.
pub fn load_tier(warehouse: &Warehouse) -> LoadTier {
    match utilization_percentage(warehouse) {
        Some(p) => LoadTier::from_percentage(p),
        None if warehouse.current_load > 0 => LoadTier::Overloaded,
        None => LoadTier::Nominal,
    }
}

/// One warehouse card
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub current_load: u32,
    pub utilization: Option<u32>,
    pub tier: LoadTier,
    pub status: WarehouseStatus,
    pub status_mismatch: bool,
    pub container_count: usize,
}

impl From<&Warehouse> for WarehouseRow {
    fn from(w: &Warehouse) -> Self {
        let tier = load_tier(w);
        Self {
            id: w.id.clone(),
            name: w.name.clone(),
            location: w.location.clone(),
            capacity: w.capacity,
            current_load: w.current_load,
            utilization: utilization_percentage(w),
            tier,
            status: w.status,
            status_mismatch: tier.expected_status() != w.status,
            container_count: w.containers.len(),
        }
    }
}

/// Warehouse screen: totals plus one row per warehouse
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseOverview {
    pub warehouse_count: usize,
    pub total_capacity: u64,
    pub total_load: u64,
    /// `round(total_load / total_capacity * 100)`
    pub average_utilization: Option<u32>,
    pub rows: Vec<WarehouseRow>,
}

impl WarehouseOverview {
    pub fn compute(warehouses: &[Warehouse]) -> Self {
        let total_capacity: u64 = warehouses.iter().map(|w| u64::from(w.capacity)).sum();
        let total_load: u64 = warehouses.iter().map(|w| u64::from(w.current_load)).sum();
        Self {
            warehouse_count: warehouses.len(),
            total_capacity,
            total_load,
            average_utilization: percentage(total_load, total_capacity),
            rows: warehouses.iter().map(WarehouseRow::from).collect(),
        }
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &WarehouseRow> {
        self.rows.iter().filter(|r| r.status_mismatch)
    }
}

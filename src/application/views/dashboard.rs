//! Dashboard counters

use serde::Serialize;

use crate::application::store::AppState;
use crate::domain::{Container, ContainerStatus, Feedback, FeedbackStatus, Warehouse, WarehouseStatus};

/// How many containers the "recent" panel shows
pub const RECENT_CONTAINERS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerStats {
    pub total: usize,
    pub in_transit: usize,
    pub arrived: usize,
    pub incident: usize,
    pub returning: usize,
}

impl ContainerStats {
    pub fn compute(containers: &[Container]) -> Self {
        let count = |status: ContainerStatus| containers.iter().filter(|c| c.status == status).count();
        Self {
            total: containers.len(),
            in_transit: count(ContainerStatus::InTransit),
            arrived: count(ContainerStatus::Arrived),
            incident: count(ContainerStatus::Incident),
            returning: count(ContainerStatus::Returning),
        }
    }
}

/// Counts by stored status, not by computed load tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarehouseStats {
    pub total: usize,
    pub available: usize,
    pub full: usize,
    pub overloaded: usize,
}

impl WarehouseStats {
    pub fn compute(warehouses: &[Warehouse]) -> Self {
        let count = |status: WarehouseStatus| warehouses.iter().filter(|w| w.status == status).count();
        Self {
            total: warehouses.len(),
            available: count(WarehouseStatus::Available),
            full: count(WarehouseStatus::Full),
            overloaded: count(WarehouseStatus::Overloaded),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub resolved: usize,
}

impl FeedbackStats {
    pub fn compute(feedbacks: &[Feedback]) -> Self {
        let count = |status: FeedbackStatus| feedbacks.iter().filter(|f| f.status == status).count();
        Self {
            total: feedbacks.len(),
            pending: count(FeedbackStatus::Pending),
            reviewed: count(FeedbackStatus::Reviewed),
            resolved: count(FeedbackStatus::Resolved),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Display name of the logged-in user, for the greeting
    pub greeting_name: Option<String>,
    pub containers: ContainerStats,
    pub warehouses: WarehouseStats,
    pub feedback: FeedbackStats,
    /// First few containers in collection order
    pub recent_containers: Vec<Container>,
}

impl DashboardSummary {
    pub fn compute(state: &AppState) -> Self {
        Self {
            greeting_name: state.current_user.as_ref().map(|u| u.name.clone()),
            containers: ContainerStats::compute(&state.containers),
            warehouses: WarehouseStats::compute(&state.warehouses),
            feedback: FeedbackStats::compute(&state.feedbacks),
            recent_containers: state
                .containers
                .iter()
                .take(RECENT_CONTAINERS)
                .cloned()
                .collect(),
        }
    }
}

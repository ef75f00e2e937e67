use serde::Deserialize;
use validator::Validate;

use super::{Container, ContainerStatus, Dimensions};

/// Partial update for a container. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContainerDto {
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    pub container_type: Option<String>,
    pub status: Option<ContainerStatus>,
    pub warehouse_id: Option<String>,
    pub notes: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub last_updated_by: Option<String>,
}

impl UpdateContainerDto {
    /// Patch that only moves the container to a new status.
    pub fn status(status: ContainerStatus, updated_by: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            last_updated_by: Some(updated_by.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, container: &mut Container) {
        if let Some(ref code) = self.code {
            container.code = code.clone();
        }
        if let Some(ref container_type) = self.container_type {
            container.container_type = container_type.clone();
        }
        if let Some(status) = self.status {
            container.status = status;
        }
        if let Some(ref warehouse_id) = self.warehouse_id {
            container.warehouse_id = warehouse_id.clone();
        }
        if let Some(ref notes) = self.notes {
            container.notes = notes.clone();
        }
        if let Some(ref location) = self.location {
            container.location = location.clone();
        }
        if let Some(weight) = self.weight {
            container.weight = weight;
        }
        if let Some(dimensions) = self.dimensions {
            container.dimensions = dimensions;
        }
        if let Some(ref by) = self.last_updated_by {
            container.last_updated_by = by.clone();
        }
    }
}

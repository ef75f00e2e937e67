use serde::Deserialize;
use validator::Validate;

use super::{ContainerStatus, Dimensions};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContainerDto {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1))]
    pub container_type: String,
    pub status: ContainerStatus,
    pub warehouse_id: String,
    pub notes: String,
    pub location: String,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    pub dimensions: Dimensions,
    pub last_updated_by: String,
}

//! Container aggregate

pub mod model;

mod dto_create;
mod dto_update;

pub use model::{Container, ContainerStatus, Dimensions};

pub use dto_create::CreateContainerDto;
pub use dto_update::UpdateContainerDto;

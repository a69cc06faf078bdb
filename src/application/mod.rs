//! Application layer: executes parsed commands against the equipment registry

pub mod error;
pub mod registry;

pub use error::{ApplicationError, ApplicationResult};
pub use registry::{parse_cost, CommandResult, Equipment, EquipmentManager};

mod error;
mod ids;
mod item;
mod nbt;
mod outcome;
mod report;

pub use error::ConfigError;
pub use ids::{BlockPos, Difficulty, Direction, EquipmentSlot, ResourceId};
pub use item::{BlockState, ItemStack};
pub use nbt::{Compound, Tag};
pub use outcome::EventResult;
pub use report::MatchReport;

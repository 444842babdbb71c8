//! Declarative rules that gate spawn and experience events.
//!
//! Rule files are JSON arrays of rule documents. Each document is matched
//! against the keywords its rule kind understands, compiled once into an
//! ordered list of [`Check`]s and then evaluated against events through the
//! [`EventQuery`] the host implements for each event kind.

mod actions;
mod attributes;
mod compile;
mod diagnostics;
mod error;
mod evaluate;
mod events;
mod host;
pub mod keys;
mod matchers;
mod parse;
mod query;
mod rules;
mod types;

#[cfg(test)]
mod testing;

pub use actions::{ActionTarget, EntityAttribute, LivingEntity, PotionEffect};
pub use attributes::{Attribute, AttributeMap, AttributeType, DescriptorSet, Key, Shape, ValueType};
pub use compile::CountInfo;
pub use diagnostics::{Diagnostic, ErrorSink, Severity};
pub use error::GatehouseError;
pub use evaluate::{Check, RandomChance, RuleEvaluator};
pub use events::{CheckSpawn, ExperienceDrop, JoinWorld};
pub use host::{
    BaubleSlot, Capability, CapabilityProvider, Host, NoCapabilities, PopulationCache, Registry,
    Season,
};
pub use matchers::{BlockMatcher, BlockOffset, ItemMatcher, RangeExpr, TagMatcher};
pub use parse::{
    ItemDescriptor, ParseError, parse_count, parse_item, parse_potion, parse_range, parse_state,
};
pub use query::{DamageSource, Entity, EventQuery, Player, World};
pub use rules::{ExperienceRule, Phases, SpawnRule};
pub use types::{
    BlockPos, BlockState, Compound, ConfigError, Difficulty, Direction, EquipmentSlot, EventResult,
    ItemStack, MatchReport, ResourceId, Tag,
};

//! The event-agnostic view every check is written against.
//!
//! Each concrete event kind implements [`EventQuery`] once; checks only ever
//! see the trait, so the same compiled rule body serves spawn checks, world
//! joins and experience drops alike.

use crate::types::{
    BlockPos, BlockState, Difficulty, Direction, EquipmentSlot, ItemStack, ResourceId,
};

/// Read access to the world an event happens in.
pub trait World {
    fn dimension(&self) -> &ResourceId;

    /// Absolute day time in ticks; a day is 24000 ticks long.
    fn day_time(&self) -> i64;

    fn is_raining(&self) -> bool;

    fn is_thundering(&self) -> bool;

    fn biome(&self, pos: BlockPos) -> ResourceId;

    /// Lower-case biome category name (`plains`, `ocean`, ...).
    fn biome_category(&self, pos: BlockPos) -> String;

    fn is_in_structure(&self, structure: &str, pos: BlockPos) -> bool;

    fn difficulty(&self) -> Difficulty;

    /// Effective regional difficulty at `pos`.
    fn local_difficulty(&self, pos: BlockPos) -> f32;

    fn shared_spawn_pos(&self) -> BlockPos;

    /// Highest of sky and block light at `pos`.
    fn light(&self, pos: BlockPos) -> i32;

    fn can_see_sky(&self, pos: BlockPos) -> bool;

    /// Block state at `pos`, or `None` if its chunk is not loaded.
    fn block_state(&self, pos: BlockPos) -> Option<BlockState>;

    /// Energy stored in the block entity at `pos`, seen from `side`.
    fn block_energy(&self, pos: BlockPos, side: Option<Direction>) -> Option<i64>;

    /// Inventory of the block entity at `pos`, seen from `side`.
    fn block_inventory(&self, pos: BlockPos, side: Option<Direction>) -> Option<Vec<ItemStack>>;

    /// Persisted number of in-game days elapsed.
    fn day_counter(&self) -> i32;

    /// Block the player is looking at, if any.
    fn looked_at_block(&self, player: &dyn Player) -> Option<BlockPos>;
}

pub trait Entity {
    fn species(&self) -> &ResourceId;

    fn is_hostile(&self) -> bool;

    fn is_animal(&self) -> bool;

    /// Vanilla spawn placement rules; `None` when the entity is not a mob.
    fn check_spawn_rules(&self) -> Option<bool>;

    /// Whether the entity's bounding box is free; `None` when not a mob.
    fn is_unobstructed(&self) -> Option<bool>;

    fn as_player(&self) -> Option<&dyn Player>;
}

pub trait Player {
    fn name(&self) -> &str;

    fn item_in_slot(&self, slot: EquipmentSlot) -> Option<&ItemStack>;

    /// True for automated players (machines acting as players) and players
    /// not found in the online player list.
    fn is_fake(&self) -> bool;
}

/// Cause of damage attached to events that have one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DamageSource {
    pub msg_id: String,
    pub explosion: bool,
    pub projectile: bool,
    pub fire: bool,
    pub magic: bool,
}

impl DamageSource {
    pub fn new(msg_id: impl Into<String>) -> Self {
        Self {
            msg_id: msg_id.into(),
            ..Self::default()
        }
    }
}

/// Uniform accessor over a concrete event.
pub trait EventQuery {
    fn world(&self) -> &dyn World;

    fn pos(&self) -> BlockPos;

    /// Position biased to stand on solid ground, used for block lookups.
    fn valid_block_pos(&self) -> BlockPos;

    fn y(&self) -> i32;

    fn entity(&self) -> &dyn Entity;

    fn source(&self) -> Option<&DamageSource>;

    fn attacker(&self) -> Option<&dyn Entity>;

    fn player(&self) -> Option<&dyn Player>;

    fn item(&self) -> Option<&ItemStack>;

    /// Whether the event comes from a mob spawner. `None` for event kinds
    /// where the question does not apply.
    fn from_spawner(&self) -> Option<bool> {
        None
    }

    /// Whether the rule engine's own spawner is producing this event.
    fn spawned_by_rules(&self) -> bool {
        false
    }
}

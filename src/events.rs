//! Query accessors for the event kinds the rules are wired to.
//!
//! The host builds one of these at its event-dispatch boundary and hands it
//! to [`SpawnRule::matches`](crate::SpawnRule::matches) or
//! [`ExperienceRule::matches`](crate::ExperienceRule::matches).

use crate::query::{DamageSource, Entity, EventQuery, Player, World};
use crate::types::{BlockPos, ItemStack};

/// A natural or spawner spawn attempt at an exact position.
pub struct CheckSpawn<'a> {
    pub world: &'a dyn World,
    pub entity: &'a dyn Entity,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub nearest_player: Option<&'a dyn Player>,
    pub from_spawner: bool,
    pub spawned_by_rules: bool,
}

impl EventQuery for CheckSpawn<'_> {
    fn world(&self) -> &dyn World {
        self.world
    }

    fn pos(&self) -> BlockPos {
        BlockPos::containing(self.x, self.y, self.z)
    }

    fn valid_block_pos(&self) -> BlockPos {
        BlockPos::containing(self.x, self.y - 1.0, self.z)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn y(&self) -> i32 {
        self.y as i32
    }

    fn entity(&self) -> &dyn Entity {
        self.entity
    }

    fn source(&self) -> Option<&DamageSource> {
        None
    }

    fn attacker(&self) -> Option<&dyn Entity> {
        None
    }

    fn player(&self) -> Option<&dyn Player> {
        self.nearest_player
    }

    fn item(&self) -> Option<&ItemStack> {
        None
    }

    fn from_spawner(&self) -> Option<bool> {
        Some(self.from_spawner)
    }

    fn spawned_by_rules(&self) -> bool {
        self.spawned_by_rules
    }
}

/// An entity joining the world (rules with `onjoin`).
pub struct JoinWorld<'a> {
    pub world: &'a dyn World,
    pub entity: &'a dyn Entity,
    pub pos: BlockPos,
    pub nearest_player: Option<&'a dyn Player>,
    pub spawned_by_rules: bool,
}

impl EventQuery for JoinWorld<'_> {
    fn world(&self) -> &dyn World {
        self.world
    }

    fn pos(&self) -> BlockPos {
        self.pos
    }

    fn valid_block_pos(&self) -> BlockPos {
        self.pos.below()
    }

    fn y(&self) -> i32 {
        self.pos.y
    }

    fn entity(&self) -> &dyn Entity {
        self.entity
    }

    fn source(&self) -> Option<&DamageSource> {
        None
    }

    fn attacker(&self) -> Option<&dyn Entity> {
        None
    }

    fn player(&self) -> Option<&dyn Player> {
        self.nearest_player
    }

    fn item(&self) -> Option<&ItemStack> {
        None
    }

    fn spawned_by_rules(&self) -> bool {
        self.spawned_by_rules
    }
}

/// Experience dropped by a dying entity.
pub struct ExperienceDrop<'a> {
    pub world: &'a dyn World,
    pub entity: &'a dyn Entity,
    pub pos: BlockPos,
    /// The player that killed the entity, if any.
    pub attacking_player: Option<&'a dyn Entity>,
}

impl EventQuery for ExperienceDrop<'_> {
    fn world(&self) -> &dyn World {
        self.world
    }

    fn pos(&self) -> BlockPos {
        self.pos
    }

    fn valid_block_pos(&self) -> BlockPos {
        self.pos.below()
    }

    fn y(&self) -> i32 {
        self.pos.y
    }

    fn entity(&self) -> &dyn Entity {
        self.entity
    }

    fn source(&self) -> Option<&DamageSource> {
        None
    }

    fn attacker(&self) -> Option<&dyn Entity> {
        self.attacking_player
    }

    fn player(&self) -> Option<&dyn Player> {
        self.attacking_player.and_then(|e| e.as_player())
    }

    fn item(&self) -> Option<&ItemStack> {
        None
    }
}

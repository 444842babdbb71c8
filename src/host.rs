//! Collaborators the host supplies when rules are compiled.

use std::fmt;
use std::sync::Arc;

use crate::query::{EventQuery, Player, World};
use crate::types::{BlockState, ItemStack, ResourceId};

/// Lookup of the host's registries, used to validate identifiers at
/// compile time.
pub trait Registry: Send + Sync {
    fn has_entity(&self, id: &ResourceId) -> bool;

    fn has_block(&self, id: &ResourceId) -> bool;

    fn has_item(&self, id: &ResourceId) -> bool;

    fn has_effect(&self, id: &ResourceId) -> bool;

    /// Default state of a block with every property it declares.
    fn default_state(&self, block: &ResourceId) -> Option<BlockState>;

    /// Biomes registered under a biome type (`WARM`, `ICY`, ...). `None`
    /// when the type does not exist.
    fn biomes_of_type(&self, biome_type: &str) -> Option<Vec<ResourceId>>;
}

/// Live population counts.
pub trait PopulationCache: Send + Sync {
    fn count(&self, world: &dyn World, species: &ResourceId) -> i32;

    fn count_hostile(&self, world: &dyn World) -> i32;

    fn count_passive(&self, world: &dyn World) -> i32;

    fn count_per_mod(&self, world: &dyn World, namespace: &str) -> i32;

    fn count_per_mod_hostile(&self, world: &dyn World, namespace: &str) -> i32;

    fn count_per_mod_passive(&self, world: &dyn World, namespace: &str) -> i32;

    fn valid_players(&self, world: &dyn World) -> i32;

    fn valid_spawn_chunks(&self, world: &dyn World) -> i32;
}

/// Optional third-party integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Seasons,
    GameStages,
    LostCities,
    Baubles,
    EnigmaScript,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Seasons => "Serene Seasons",
            Capability::GameStages => "Game Stages",
            Capability::LostCities => "The Lost Cities",
            Capability::Baubles => "Baubles",
            Capability::EnigmaScript => "EnigmaScript",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Auxiliary equipment slot categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaubleSlot {
    Amulet,
    Ring,
    Belt,
    Trinket,
    Head,
    Body,
    Charm,
}

/// Availability flags and accessors for optional integrations.
///
/// Accessors are only called when [`has`](Self::has) returned `true` for the
/// matching capability at compile time.
pub trait CapabilityProvider: Send + Sync {
    fn has(&self, capability: Capability) -> bool;

    fn season(&self, world: &dyn World) -> Option<Season>;

    fn has_game_stage(&self, player: &dyn Player, stage: &str) -> bool;

    fn is_city(&self, query: &dyn EventQuery) -> bool;

    fn is_street(&self, query: &dyn EventQuery) -> bool;

    fn in_sphere(&self, query: &dyn EventQuery) -> bool;

    fn is_building(&self, query: &dyn EventQuery) -> bool;

    fn bauble_slots(&self, slot: BaubleSlot) -> Vec<i32>;

    fn bauble_stack(&self, player: &dyn Player, slot: i32) -> Option<ItemStack>;

    fn state(&self, world: &dyn World, name: &str) -> Option<String>;

    fn player_state(&self, player: &dyn Player, name: &str) -> Option<String>;

    /// Alternative biome name from a biome-renaming integration.
    fn biome_name(&self, biome: &ResourceId) -> Option<String>;
}

/// Provider for hosts that ship without any optional integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapabilities;

impl CapabilityProvider for NoCapabilities {
    fn has(&self, _capability: Capability) -> bool {
        false
    }

    fn season(&self, _world: &dyn World) -> Option<Season> {
        None
    }

    fn has_game_stage(&self, _player: &dyn Player, _stage: &str) -> bool {
        false
    }

    fn is_city(&self, _query: &dyn EventQuery) -> bool {
        false
    }

    fn is_street(&self, _query: &dyn EventQuery) -> bool {
        false
    }

    fn in_sphere(&self, _query: &dyn EventQuery) -> bool {
        false
    }

    fn is_building(&self, _query: &dyn EventQuery) -> bool {
        false
    }

    fn bauble_slots(&self, _slot: BaubleSlot) -> Vec<i32> {
        Vec::new()
    }

    fn bauble_stack(&self, _player: &dyn Player, _slot: i32) -> Option<ItemStack> {
        None
    }

    fn state(&self, _world: &dyn World, _name: &str) -> Option<String> {
        None
    }

    fn player_state(&self, _player: &dyn Player, _name: &str) -> Option<String> {
        None
    }

    fn biome_name(&self, _biome: &ResourceId) -> Option<String> {
        None
    }
}

/// Everything compiled checks may call into, shared by all rules.
#[derive(Clone)]
pub struct Host {
    pub registry: Arc<dyn Registry>,
    pub counts: Arc<dyn PopulationCache>,
    pub capabilities: Arc<dyn CapabilityProvider>,
}

impl Host {
    /// A host without optional integrations.
    pub fn new(registry: Arc<dyn Registry>, counts: Arc<dyn PopulationCache>) -> Self {
        Self {
            registry,
            counts,
            capabilities: Arc::new(NoCapabilities),
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Arc<dyn CapabilityProvider>) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}

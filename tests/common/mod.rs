#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use gatehouse::{
    BlockPos, BlockState, Difficulty, Direction, Entity, EquipmentSlot, Host, ItemStack,
    PopulationCache, Player, Registry, ResourceId, World,
};

/// Registry that knows everything except ids whose path contains `unknown`.
pub struct MockRegistry;

fn known(id: &ResourceId) -> bool {
    !id.path().contains("unknown")
}

impl Registry for MockRegistry {
    fn has_entity(&self, id: &ResourceId) -> bool {
        known(id)
    }

    fn has_block(&self, id: &ResourceId) -> bool {
        known(id)
    }

    fn has_item(&self, id: &ResourceId) -> bool {
        known(id)
    }

    fn has_effect(&self, id: &ResourceId) -> bool {
        known(id)
    }

    fn default_state(&self, block: &ResourceId) -> Option<BlockState> {
        known(block).then(|| BlockState::new(block.clone()))
    }

    fn biomes_of_type(&self, biome_type: &str) -> Option<Vec<ResourceId>> {
        (biome_type == "HOT").then(|| vec!["minecraft:desert".into()])
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockCounts {
    pub species: HashMap<ResourceId, i32>,
    pub hostile: i32,
    pub passive: i32,
    pub players: i32,
    pub chunks: i32,
}

impl MockCounts {
    pub fn with(mut self, species: &str, count: i32) -> Self {
        self.species.insert(species.into(), count);
        self
    }
}

impl PopulationCache for MockCounts {
    fn count(&self, _world: &dyn World, species: &ResourceId) -> i32 {
        self.species.get(species).copied().unwrap_or(0)
    }

    fn count_hostile(&self, _world: &dyn World) -> i32 {
        self.hostile
    }

    fn count_passive(&self, _world: &dyn World) -> i32 {
        self.passive
    }

    fn count_per_mod(&self, _world: &dyn World, namespace: &str) -> i32 {
        self.species
            .iter()
            .filter(|(id, _)| id.namespace() == namespace)
            .map(|(_, n)| n)
            .sum()
    }

    fn count_per_mod_hostile(&self, world: &dyn World, namespace: &str) -> i32 {
        self.count_per_mod(world, namespace)
    }

    fn count_per_mod_passive(&self, _world: &dyn World, _namespace: &str) -> i32 {
        0
    }

    fn valid_players(&self, _world: &dyn World) -> i32 {
        self.players
    }

    fn valid_spawn_chunks(&self, _world: &dyn World) -> i32 {
        self.chunks
    }
}

pub fn host(counts: MockCounts) -> Host {
    Host::new(Arc::new(MockRegistry), Arc::new(counts))
}

#[derive(Debug, Clone)]
pub struct MockWorld {
    pub dimension: ResourceId,
    pub day_time: i64,
    pub raining: bool,
    pub light: i32,
    pub biome: ResourceId,
    pub blocks: HashMap<BlockPos, BlockState>,
    pub loaded: bool,
    pub day_counter: i32,
}

impl Default for MockWorld {
    fn default() -> Self {
        Self {
            dimension: "minecraft:overworld".into(),
            day_time: 6000,
            raining: false,
            light: 15,
            biome: "minecraft:plains".into(),
            blocks: HashMap::new(),
            loaded: true,
            day_counter: 0,
        }
    }
}

impl World for MockWorld {
    fn dimension(&self) -> &ResourceId {
        &self.dimension
    }

    fn day_time(&self) -> i64 {
        self.day_time
    }

    fn is_raining(&self) -> bool {
        self.raining
    }

    fn is_thundering(&self) -> bool {
        false
    }

    fn biome(&self, _pos: BlockPos) -> ResourceId {
        self.biome.clone()
    }

    fn biome_category(&self, _pos: BlockPos) -> String {
        "plains".to_owned()
    }

    fn is_in_structure(&self, _structure: &str, _pos: BlockPos) -> bool {
        false
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Normal
    }

    fn local_difficulty(&self, _pos: BlockPos) -> f32 {
        2.0
    }

    fn shared_spawn_pos(&self) -> BlockPos {
        BlockPos::new(0, 64, 0)
    }

    fn light(&self, _pos: BlockPos) -> i32 {
        self.light
    }

    fn can_see_sky(&self, _pos: BlockPos) -> bool {
        true
    }

    fn block_state(&self, pos: BlockPos) -> Option<BlockState> {
        self.loaded.then(|| {
            self.blocks
                .get(&pos)
                .cloned()
                .unwrap_or_else(|| BlockState::new("minecraft:air"))
        })
    }

    fn block_energy(&self, _pos: BlockPos, _side: Option<Direction>) -> Option<i64> {
        None
    }

    fn block_inventory(&self, _pos: BlockPos, _side: Option<Direction>) -> Option<Vec<ItemStack>> {
        None
    }

    fn day_counter(&self) -> i32 {
        self.day_counter
    }

    fn looked_at_block(&self, _player: &dyn Player) -> Option<BlockPos> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockPlayer {
    pub name: String,
    pub equipment: HashMap<EquipmentSlot, ItemStack>,
}

impl MockPlayer {
    pub fn holding(item: ItemStack) -> Self {
        let mut equipment = HashMap::new();
        equipment.insert(EquipmentSlot::MainHand, item);
        Self {
            name: "alex".to_owned(),
            equipment,
        }
    }
}

impl Player for MockPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_in_slot(&self, slot: EquipmentSlot) -> Option<&ItemStack> {
        self.equipment.get(&slot)
    }

    fn is_fake(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct MockEntity {
    pub species: ResourceId,
    pub hostile: bool,
    pub player: Option<MockPlayer>,
}

impl MockEntity {
    pub fn mob(species: &str, hostile: bool) -> Self {
        Self {
            species: species.into(),
            hostile,
            player: None,
        }
    }

    pub fn player(player: MockPlayer) -> Self {
        Self {
            species: "minecraft:player".into(),
            hostile: false,
            player: Some(player),
        }
    }
}

impl Entity for MockEntity {
    fn species(&self) -> &ResourceId {
        &self.species
    }

    fn is_hostile(&self) -> bool {
        self.hostile
    }

    fn is_animal(&self) -> bool {
        !self.hostile && self.player.is_none()
    }

    fn check_spawn_rules(&self) -> Option<bool> {
        self.player.is_none().then_some(true)
    }

    fn is_unobstructed(&self) -> Option<bool> {
        self.player.is_none().then_some(true)
    }

    fn as_player(&self) -> Option<&dyn Player> {
        self.player.as_ref().map(|p| p as &dyn Player)
    }
}

//! In-memory host doubles for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::host::{
    BaubleSlot, Capability, CapabilityProvider, Host, PopulationCache, Registry, Season,
};
use crate::query::{DamageSource, Entity, EventQuery, Player, World};
use crate::types::{
    BlockPos, BlockState, Difficulty, Direction, EquipmentSlot, ItemStack, ResourceId,
};

/// Knows every identifier except those whose path mentions `nonsense`.
pub(crate) struct TestRegistry;

fn known(id: &ResourceId) -> bool {
    !id.path().contains("nonsense")
}

impl Registry for TestRegistry {
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
        match block.path() {
            "furnace" => Some(
                BlockState::new(block.clone())
                    .with_property("facing", "north")
                    .with_property("lit", "false"),
            ),
            _ => known(block).then(|| BlockState::new(block.clone())),
        }
    }

    fn biomes_of_type(&self, biome_type: &str) -> Option<Vec<ResourceId>> {
        match biome_type {
            "HOT" => Some(vec!["minecraft:desert".into(), "minecraft:badlands".into()]),
            "COLD" => Some(vec!["minecraft:snowy_plains".into()]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TestWorld {
    pub dimension: ResourceId,
    pub day_time: i64,
    pub raining: bool,
    pub thundering: bool,
    pub biome: ResourceId,
    pub category: String,
    pub structures: Vec<String>,
    pub difficulty: Difficulty,
    pub local_difficulty: f32,
    pub spawn: BlockPos,
    pub light: i32,
    pub sky: bool,
    pub blocks: HashMap<BlockPos, BlockState>,
    pub unloaded: bool,
    pub energy: HashMap<BlockPos, i64>,
    pub inventories: HashMap<BlockPos, Vec<ItemStack>>,
    pub day_counter: i32,
    pub looked_at: Option<BlockPos>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            dimension: "minecraft:overworld".into(),
            day_time: 0,
            raining: false,
            thundering: false,
            biome: "minecraft:plains".into(),
            category: "plains".into(),
            structures: Vec::new(),
            difficulty: Difficulty::Normal,
            local_difficulty: 1.5,
            spawn: BlockPos::new(0, 64, 0),
            light: 15,
            sky: true,
            blocks: HashMap::new(),
            unloaded: false,
            energy: HashMap::new(),
            inventories: HashMap::new(),
            day_counter: 0,
            looked_at: None,
        }
    }
}

impl TestWorld {
    pub fn with_block(mut self, pos: BlockPos, state: BlockState) -> Self {
        self.blocks.insert(pos, state);
        self
    }

    pub fn with_unloaded(mut self) -> Self {
        self.unloaded = true;
        self
    }

    pub fn with_energy(mut self, pos: BlockPos, energy: i64) -> Self {
        self.energy.insert(pos, energy);
        self
    }

    pub fn with_inventory(mut self, pos: BlockPos, items: Vec<ItemStack>) -> Self {
        self.inventories.insert(pos, items);
        self
    }
}

impl World for TestWorld {
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
        self.thundering
    }

    fn biome(&self, _pos: BlockPos) -> ResourceId {
        self.biome.clone()
    }

    fn biome_category(&self, _pos: BlockPos) -> String {
        self.category.clone()
    }

    fn is_in_structure(&self, structure: &str, _pos: BlockPos) -> bool {
        self.structures.iter().any(|s| s == structure)
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn local_difficulty(&self, _pos: BlockPos) -> f32 {
        self.local_difficulty
    }

    fn shared_spawn_pos(&self) -> BlockPos {
        self.spawn
    }

    fn light(&self, _pos: BlockPos) -> i32 {
        self.light
    }

    fn can_see_sky(&self, _pos: BlockPos) -> bool {
        self.sky
    }

    fn block_state(&self, pos: BlockPos) -> Option<BlockState> {
        if self.unloaded {
            return None;
        }
        Some(
            self.blocks
                .get(&pos)
                .cloned()
                .unwrap_or_else(|| BlockState::new("minecraft:air")),
        )
    }

    fn block_energy(&self, pos: BlockPos, _side: Option<Direction>) -> Option<i64> {
        self.energy.get(&pos).copied()
    }

    fn block_inventory(&self, pos: BlockPos, _side: Option<Direction>) -> Option<Vec<ItemStack>> {
        self.inventories.get(&pos).cloned()
    }

    fn day_counter(&self) -> i32 {
        self.day_counter
    }

    fn looked_at_block(&self, _player: &dyn Player) -> Option<BlockPos> {
        self.looked_at
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TestPlayer {
    pub name: String,
    pub equipment: HashMap<EquipmentSlot, ItemStack>,
    pub fake: bool,
}

impl TestPlayer {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    pub fn holding(mut self, slot: EquipmentSlot, stack: ItemStack) -> Self {
        self.equipment.insert(slot, stack);
        self
    }
}

impl Player for TestPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_in_slot(&self, slot: EquipmentSlot) -> Option<&ItemStack> {
        self.equipment.get(&slot)
    }

    fn is_fake(&self) -> bool {
        self.fake
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TestEntity {
    pub species: ResourceId,
    pub hostile: bool,
    pub animal: bool,
    pub spawn_rules: Option<bool>,
    pub unobstructed: Option<bool>,
    pub player: Option<TestPlayer>,
}

impl TestEntity {
    pub fn zombie() -> Self {
        Self {
            species: "minecraft:zombie".into(),
            hostile: true,
            animal: false,
            spawn_rules: Some(true),
            unobstructed: Some(true),
            player: None,
        }
    }

    pub fn cow() -> Self {
        Self {
            species: "minecraft:cow".into(),
            hostile: false,
            animal: true,
            ..Self::zombie()
        }
    }

    pub fn player(player: TestPlayer) -> Self {
        Self {
            species: "minecraft:player".into(),
            hostile: false,
            animal: false,
            spawn_rules: None,
            unobstructed: None,
            player: Some(player),
        }
    }
}

impl Entity for TestEntity {
    fn species(&self) -> &ResourceId {
        &self.species
    }

    fn is_hostile(&self) -> bool {
        self.hostile
    }

    fn is_animal(&self) -> bool {
        self.animal
    }

    fn check_spawn_rules(&self) -> Option<bool> {
        self.spawn_rules
    }

    fn is_unobstructed(&self) -> Option<bool> {
        self.unobstructed
    }

    fn as_player(&self) -> Option<&dyn Player> {
        self.player.as_ref().map(|p| p as &dyn Player)
    }
}

pub(crate) struct TestQuery<'a> {
    pub world: &'a TestWorld,
    pub entity: &'a TestEntity,
    pub pos: BlockPos,
    pub player: Option<&'a TestPlayer>,
    pub attacker: Option<&'a TestEntity>,
    pub source: Option<DamageSource>,
    pub from_spawner: Option<bool>,
    pub spawned_by_rules: bool,
}

pub(crate) fn query<'a>(world: &'a TestWorld, entity: &'a TestEntity) -> TestQuery<'a> {
    TestQuery {
        world,
        entity,
        pos: BlockPos::new(0, 64, 0),
        player: None,
        attacker: None,
        source: None,
        from_spawner: None,
        spawned_by_rules: false,
    }
}

impl<'a> TestQuery<'a> {
    pub fn at(mut self, pos: BlockPos) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_player(mut self, player: &'a TestPlayer) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_attacker(mut self, attacker: &'a TestEntity) -> Self {
        self.attacker = Some(attacker);
        self
    }

    pub fn with_source(mut self, source: DamageSource) -> Self {
        self.source = Some(source);
        self
    }
}

impl EventQuery for TestQuery<'_> {
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
        self.source.as_ref()
    }

    fn attacker(&self) -> Option<&dyn Entity> {
        self.attacker.map(|a| a as &dyn Entity)
    }

    fn player(&self) -> Option<&dyn Player> {
        self.player.map(|p| p as &dyn Player)
    }

    fn item(&self) -> Option<&ItemStack> {
        None
    }

    fn from_spawner(&self) -> Option<bool> {
        self.from_spawner
    }

    fn spawned_by_rules(&self) -> bool {
        self.spawned_by_rules
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TestCounts {
    pub species: HashMap<ResourceId, i32>,
    pub hostile: i32,
    pub passive: i32,
    pub per_mod: HashMap<String, i32>,
    pub per_mod_hostile: HashMap<String, i32>,
    pub per_mod_passive: HashMap<String, i32>,
    pub players: i32,
    pub chunks: i32,
}

impl TestCounts {
    pub fn with_species(mut self, id: &str, count: i32) -> Self {
        self.species.insert(id.into(), count);
        self
    }
}

impl PopulationCache for TestCounts {
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
        self.per_mod.get(namespace).copied().unwrap_or(0)
    }

    fn count_per_mod_hostile(&self, _world: &dyn World, namespace: &str) -> i32 {
        self.per_mod_hostile.get(namespace).copied().unwrap_or(0)
    }

    fn count_per_mod_passive(&self, _world: &dyn World, namespace: &str) -> i32 {
        self.per_mod_passive.get(namespace).copied().unwrap_or(0)
    }

    fn valid_players(&self, _world: &dyn World) -> i32 {
        self.players
    }

    fn valid_spawn_chunks(&self, _world: &dyn World) -> i32 {
        self.chunks
    }
}

/// Every integration present, with scripted answers.
#[derive(Debug, Clone, Default)]
pub(crate) struct TestCapabilities {
    pub season: Option<Season>,
    pub stages: HashSet<String>,
    pub city: bool,
    pub street: bool,
    pub sphere: bool,
    pub building: bool,
    pub bauble_slots: HashMap<BaubleSlot, Vec<i32>>,
    pub baubles: HashMap<i32, ItemStack>,
    pub states: HashMap<String, String>,
    pub player_states: HashMap<String, String>,
    pub biome_names: HashMap<ResourceId, String>,
}

impl CapabilityProvider for TestCapabilities {
    fn has(&self, _capability: Capability) -> bool {
        true
    }

    fn season(&self, _world: &dyn World) -> Option<Season> {
        self.season
    }

    fn has_game_stage(&self, _player: &dyn Player, stage: &str) -> bool {
        self.stages.contains(stage)
    }

    fn is_city(&self, _query: &dyn EventQuery) -> bool {
        self.city
    }

    fn is_street(&self, _query: &dyn EventQuery) -> bool {
        self.street
    }

    fn in_sphere(&self, _query: &dyn EventQuery) -> bool {
        self.sphere
    }

    fn is_building(&self, _query: &dyn EventQuery) -> bool {
        self.building
    }

    fn bauble_slots(&self, slot: BaubleSlot) -> Vec<i32> {
        self.bauble_slots.get(&slot).cloned().unwrap_or_default()
    }

    fn bauble_stack(&self, _player: &dyn Player, slot: i32) -> Option<ItemStack> {
        self.baubles.get(&slot).cloned()
    }

    fn state(&self, _world: &dyn World, name: &str) -> Option<String> {
        self.states.get(name).cloned()
    }

    fn player_state(&self, _player: &dyn Player, name: &str) -> Option<String> {
        self.player_states.get(name).cloned()
    }

    fn biome_name(&self, biome: &ResourceId) -> Option<String> {
        self.biome_names.get(biome).cloned()
    }
}

/// Host without optional integrations.
pub(crate) fn host(counts: TestCounts) -> Host {
    Host::new(Arc::new(TestRegistry), Arc::new(counts))
}

/// Host with every integration available.
pub(crate) fn full_host(counts: TestCounts, capabilities: TestCapabilities) -> Host {
    host(counts).with_capabilities(Arc::new(capabilities))
}

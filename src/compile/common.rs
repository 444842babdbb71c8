//! Conditions on the world and the event position, shared by every rule kind.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value as Json;

use super::{Compiler, Membership};
use crate::ConfigError;
use crate::attributes::{AttributeMap, Key};
use crate::evaluate::RandomChance;
use crate::host::{BaubleSlot, Capability, CapabilityProvider, Season};
use crate::keys::*;
use crate::matchers::{BlockMatcher, BlockOffset, ItemMatcher, any_matches};
use crate::parse::parse_state;
use crate::query::EventQuery;
use crate::types::{Difficulty, EquipmentSlot, ResourceId};

const DAY_LENGTH: i64 = 24000;

impl Compiler<'_, '_> {
    pub(super) fn common(&mut self, map: &mut AttributeMap) {
        map.consume(&RANDOM, |chance| self.push(RANDOM.name(), RandomChance(chance)));

        self.dimension(map);
        self.time(map);

        map.consume(&MINHEIGHT, |v| self.add(MINHEIGHT.name(), move |q| q.y() >= v));
        map.consume(&MAXHEIGHT, |v| self.add(MAXHEIGHT.name(), move |q| q.y() <= v));

        self.weather(map);
        self.category(map);
        self.difficulty(map);
        self.spawn_distance(map);

        map.consume(&MINLIGHT, |v| {
            self.add(MINLIGHT.name(), move |q| q.world().light(q.pos()) >= v);
        });
        map.consume(&MAXLIGHT, |v| {
            self.add(MAXLIGHT.name(), move |q| q.world().light(q.pos()) <= v);
        });
        map.consume(&MINDIFFICULTY, |v| {
            self.add(MINDIFFICULTY.name(), move |q| {
                q.world().local_difficulty(q.pos()) >= v
            });
        });
        map.consume(&MAXDIFFICULTY, |v| {
            self.add(MAXDIFFICULTY.name(), move |q| {
                q.world().local_difficulty(q.pos()) <= v
            });
        });
        map.consume(&SEESKY, |b| {
            self.add(SEESKY.name(), move |q| q.world().can_see_sky(q.pos()) == b);
        });

        self.block(map);
        self.biome(map);
        self.biome_type(map);

        self.equipment(map, &HELMET, &[EquipmentSlot::Head]);
        self.equipment(map, &CHESTPLATE, &[EquipmentSlot::Chest]);
        self.equipment(map, &LEGGINGS, &[EquipmentSlot::Legs]);
        self.equipment(map, &BOOTS, &[EquipmentSlot::Feet]);
        self.equipment(map, &PLAYER_HELDITEM, &[EquipmentSlot::MainHand]);
        self.equipment(map, &HELDITEM, &[EquipmentSlot::MainHand]);
        self.equipment(map, &OFFHANDITEM, &[EquipmentSlot::OffHand]);
        self.equipment(
            map,
            &BOTHHANDSITEM,
            &[EquipmentSlot::MainHand, EquipmentSlot::OffHand],
        );

        map.consume(&STRUCTURE, |name| {
            self.add(STRUCTURE.name(), move |q| {
                q.world().is_in_structure(&name, q.pos())
            });
        });

        self.state(map);
        self.player_state(map);

        self.season(map, &SUMMER, Season::Summer);
        self.season(map, &WINTER, Season::Winter);
        self.season(map, &SPRING, Season::Spring);
        self.season(map, &AUTUMN, Season::Autumn);

        self.game_stage(map);

        self.city(map, &INCITY, |c, q| c.is_city(q));
        self.city(map, &INSTREET, |c, q| c.is_street(q));
        self.city(map, &INSPHERE, |c, q| c.in_sphere(q));
        self.city(map, &INBUILDING, |c, q| c.is_building(q));

        self.bauble(map, &AMULET, BaubleSlot::Amulet);
        self.bauble(map, &RING, BaubleSlot::Ring);
        self.bauble(map, &BELT, BaubleSlot::Belt);
        self.bauble(map, &TRINKET, BaubleSlot::Trinket);
        self.bauble(map, &HEAD, BaubleSlot::Head);
        self.bauble(map, &BODY, BaubleSlot::Body);
        self.bauble(map, &CHARM, BaubleSlot::Charm);
    }

    fn dimension(&mut self, map: &mut AttributeMap) {
        if let Some(values) = map.take_list(&DIMENSION) {
            let ids = values.iter().map(|v| ResourceId::parse(v)).collect();
            if let Some(ids) = Membership::new(ids) {
                self.add(DIMENSION.name(), move |q| ids.contains(q.world().dimension()));
            }
        }
        if let Some(values) = map.take_list(&DIMENSION_MOD) {
            if let Some(mods) = Membership::new(values) {
                self.add(DIMENSION_MOD.name(), move |q| {
                    mods.contains(q.world().dimension().namespace())
                });
            }
        }
    }

    fn time(&mut self, map: &mut AttributeMap) {
        map.consume(&MINTIME, |v| {
            self.add(MINTIME.name(), move |q| {
                q.world().day_time().rem_euclid(DAY_LENGTH) >= i64::from(v)
            });
        });
        map.consume(&MAXTIME, |v| {
            self.add(MAXTIME.name(), move |q| {
                q.world().day_time().rem_euclid(DAY_LENGTH) <= i64::from(v)
            });
        });
    }

    fn weather(&mut self, map: &mut AttributeMap) {
        let Some(weather) = map.take(&WEATHER) else {
            return;
        };
        let lower = weather.to_lowercase();
        if lower.starts_with("rain") {
            self.add(WEATHER.name(), |q| q.world().is_raining());
        } else if lower.starts_with("thunder") {
            self.add(WEATHER.name(), |q| q.world().is_thundering());
        } else {
            self.reporter.error(ConfigError::UnknownWeather(weather));
        }
    }

    fn category(&mut self, map: &mut AttributeMap) {
        let Some(values) = map.take_list(&CATEGORY) else {
            return;
        };
        let lower = values.iter().map(|v| v.to_lowercase()).collect();
        if let Some(categories) = Membership::new(lower) {
            self.add(CATEGORY.name(), move |q| {
                categories.contains(q.world().biome_category(q.pos()).as_str())
            });
        }
    }

    fn difficulty(&mut self, map: &mut AttributeMap) {
        let Some(name) = map.take(&DIFFICULTY) else {
            return;
        };
        match Difficulty::from_name(&name) {
            Some(difficulty) => {
                self.add(DIFFICULTY.name(), move |q| q.world().difficulty() == difficulty);
            }
            None => self.reporter.error(ConfigError::UnknownDifficulty(name)),
        }
    }

    fn spawn_distance(&mut self, map: &mut AttributeMap) {
        map.consume(&MINSPAWNDIST, |d| {
            let squared = f64::from(d) * f64::from(d);
            self.add(MINSPAWNDIST.name(), move |q| {
                q.pos().dist_sqr(q.world().shared_spawn_pos()) >= squared
            });
        });
        map.consume(&MAXSPAWNDIST, |d| {
            let squared = f64::from(d) * f64::from(d);
            self.add(MAXSPAWNDIST.name(), move |q| {
                q.pos().dist_sqr(q.world().shared_spawn_pos()) <= squared
            });
        });
    }

    /// One invalid block description drops the whole check.
    fn block(&mut self, map: &mut AttributeMap) {
        let Some(values) = map.take_list(&BLOCK) else {
            return;
        };
        let offset = match map.consume_and_fetch(&BLOCKOFFSET) {
            Some(raw) => match BlockOffset::from_json(&raw) {
                Ok(offset) => offset,
                Err(err) => {
                    self.reporter.error(err);
                    return;
                }
            },
            None => BlockOffset::default(),
        };

        let registry = self.registry();
        let mut matchers = Vec::with_capacity(values.len());
        for value in &values {
            match BlockMatcher::from_json(value, registry, self.reporter) {
                Ok(matcher) => matchers.push(matcher),
                Err(err) => {
                    self.reporter.error(err);
                    return;
                }
            }
        }

        self.add(BLOCK.name(), move |q| {
            let pos = offset.position(q);
            matchers.iter().any(|m| m.test(q.world(), pos))
        });
    }

    fn biome(&mut self, map: &mut AttributeMap) {
        let Some(values) = map.take_list(&BIOME) else {
            return;
        };
        let ids = Membership::new(values.iter().map(|v| ResourceId::parse(v)).collect());
        let (Some(ids), Some(names)) = (ids, Membership::new(values)) else {
            return;
        };
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(BIOME.name(), move |q| {
            let biome = q.world().biome(q.pos());
            ids.contains(&biome)
                || capabilities
                    .biome_name(&biome)
                    .is_some_and(|name| names.contains(name.as_str()))
        });
    }

    fn biome_type(&mut self, map: &mut AttributeMap) {
        let Some(values) = map.take_list(&BIOMETYPE) else {
            return;
        };
        let registry = self.registry();
        let mut biomes = HashSet::new();
        for value in values {
            match registry.biomes_of_type(&value.to_uppercase()) {
                Some(found) => biomes.extend(found),
                None => self.reporter.error(ConfigError::UnknownBiomeType(value)),
            }
        }
        if !biomes.is_empty() {
            self.add(BIOMETYPE.name(), move |q| biomes.contains(&q.world().biome(q.pos())));
        }
    }

    fn item_matchers(&mut self, values: &[Json]) -> Vec<ItemMatcher> {
        ItemMatcher::list_from_json(values, self.registry(), self.reporter)
    }

    fn equipment(
        &mut self,
        map: &mut AttributeMap,
        key: &Key<Json>,
        slots: &'static [EquipmentSlot],
    ) {
        let Some(values) = map.take_list(key) else {
            return;
        };
        let matchers = self.item_matchers(&values);
        if matchers.is_empty() {
            return;
        }
        self.add(key.name(), move |q| {
            q.player().is_some_and(|player| {
                slots.iter().any(|&slot| {
                    player
                        .item_in_slot(slot)
                        .is_some_and(|stack| any_matches(&matchers, stack))
                })
            })
        });
    }

    fn state(&mut self, map: &mut AttributeMap) {
        let Some(spec) = map.take(&STATE) else {
            return;
        };
        if !self.requires(Capability::EnigmaScript, STATE.name()) {
            return;
        }
        let Some((name, value)) = self.state_spec(spec) else {
            return;
        };
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(STATE.name(), move |q| {
            capabilities
                .state(q.world(), &name)
                .is_some_and(|current| current == value)
        });
    }

    fn player_state(&mut self, map: &mut AttributeMap) {
        let Some(spec) = map.take(&PSTATE) else {
            return;
        };
        if !self.requires(Capability::EnigmaScript, PSTATE.name()) {
            return;
        }
        let Some((name, value)) = self.state_spec(spec) else {
            return;
        };
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(PSTATE.name(), move |q| {
            q.player().is_some_and(|player| {
                capabilities
                    .player_state(player, &name)
                    .is_some_and(|current| current == value)
            })
        });
    }

    fn state_spec(&mut self, spec: String) -> Option<(String, String)> {
        let parsed = parse_state(&spec).map(|(name, value)| (name.to_owned(), value.to_owned()));
        match parsed {
            Ok(pair) => Some(pair),
            Err(_) => {
                self.reporter.error(ConfigError::BadStateSpecifier(spec));
                None
            }
        }
    }

    fn season(&mut self, map: &mut AttributeMap, key: &Key<bool>, season: Season) {
        let Some(b) = map.take(key) else {
            return;
        };
        if !self.requires(Capability::Seasons, key.name()) {
            return;
        }
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(key.name(), move |q| {
            (capabilities.season(q.world()) == Some(season)) == b
        });
    }

    fn game_stage(&mut self, map: &mut AttributeMap) {
        let Some(stage) = map.take(&GAMESTAGE) else {
            return;
        };
        if !self.requires(Capability::GameStages, GAMESTAGE.name()) {
            return;
        }
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(GAMESTAGE.name(), move |q| {
            q.player()
                .is_some_and(|player| capabilities.has_game_stage(player, &stage))
        });
    }

    fn city(
        &mut self,
        map: &mut AttributeMap,
        key: &Key<bool>,
        test: fn(&dyn CapabilityProvider, &dyn EventQuery) -> bool,
    ) {
        let Some(b) = map.take(key) else {
            return;
        };
        if !self.requires(Capability::LostCities, key.name()) {
            return;
        }
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(key.name(), move |q| test(capabilities.as_ref(), q) == b);
    }

    fn bauble(&mut self, map: &mut AttributeMap, key: &Key<Json>, slot: BaubleSlot) {
        let Some(values) = map.take_list(key) else {
            return;
        };
        if !self.requires(Capability::Baubles, key.name()) {
            return;
        }
        let matchers = self.item_matchers(&values);
        if matchers.is_empty() {
            return;
        }
        let capabilities = Arc::clone(&self.host.capabilities);
        self.add(key.name(), move |q| {
            q.player().is_some_and(|player| {
                capabilities.bauble_slots(slot).into_iter().any(|index| {
                    capabilities
                        .bauble_stack(player, index)
                        .is_some_and(|stack| any_matches(&matchers, &stack))
                })
            })
        });
    }
}

//! Conditions on the entity and on the event itself.

use std::sync::Arc;

use serde_json::Value as Json;

use super::count::{Bound, CountCheck, CountInfo};
use super::{Compiler, Membership};
use crate::ConfigError;
use crate::attributes::{AttributeMap, Key};
use crate::keys::*;
use crate::query::DamageSource;
use crate::types::ResourceId;

impl Compiler<'_, '_> {
    pub(super) fn generic(&mut self, map: &mut AttributeMap) {
        // Rule metadata; read by the rule before compiling.
        map.consume(&ONJOIN, |_| {});
        map.consume_as_list(&PHASE, |_| {});

        map.consume(&HOSTILE, |b| {
            self.add(HOSTILE.name(), move |q| q.entity().is_hostile() == b);
        });
        map.consume(&PASSIVE, |b| {
            self.add(PASSIVE.name(), move |q| {
                let entity = q.entity();
                (entity.is_animal() && !entity.is_hostile()) == b
            });
        });
        map.consume(&CANSPAWNHERE, |b| {
            self.add(CANSPAWNHERE.name(), move |q| match q.entity().check_spawn_rules() {
                Some(can) => can == b,
                None => !b,
            });
        });
        map.consume(&NOTCOLLIDING, |b| {
            self.add(NOTCOLLIDING.name(), move |q| match q.entity().is_unobstructed() {
                Some(free) => free == b,
                None => !b,
            });
        });
        map.consume(&SPAWNER, |b| {
            self.add(SPAWNER.name(), move |q| q.from_spawner().is_some_and(|s| s == b));
        });
        map.consume(&INCONTROL, |b| {
            self.add(INCONTROL.name(), move |q| q.spawned_by_rules() == b);
        });

        self.mob(map);
        self.attacker(map);

        self.damage(map, &EXPLOSION, |s| s.explosion);
        self.damage(map, &PROJECTILE, |s| s.projectile);
        self.damage(map, &FIRE, |s| s.fire);
        self.damage(map, &MAGIC, |s| s.magic);

        if let Some(sources) = map.take_list(&SOURCE).and_then(Membership::new) {
            self.add(SOURCE.name(), move |q| {
                q.source().is_some_and(|s| sources.contains(s.msg_id.as_str()))
            });
        }

        if let Some(mods) = map.take_list(&MOD).and_then(Membership::new) {
            self.add(MOD.name(), move |q| {
                mods.contains(q.entity().species().namespace())
            });
        }

        self.count(map, &MINCOUNT, Bound::Min);
        self.count(map, &MAXCOUNT, Bound::Max);

        self.day_count(map);
    }

    fn mob(&mut self, map: &mut AttributeMap) {
        let Some(names) = map.take_list(&MOB) else {
            return;
        };
        let registry = self.registry();
        let mut species = Vec::with_capacity(names.len());
        for name in names {
            let id = ResourceId::parse(&name);
            if registry.has_entity(&id) {
                species.push(id);
            } else {
                self.reporter.error(ConfigError::UnknownEntity(name));
            }
        }
        if let Some(species) = Membership::new(species) {
            self.add(MOB.name(), move |q| species.contains(q.entity().species()));
        }
    }

    fn attacker(&mut self, map: &mut AttributeMap) {
        map.consume(&PLAYER, |b| {
            self.add(PLAYER.name(), move |q| {
                q.attacker().is_some_and(|a| a.as_player().is_some()) == b
            });
        });
        map.consume(&REALPLAYER, |b| {
            self.add(REALPLAYER.name(), move |q| match q.attacker() {
                Some(attacker) => attacker.as_player().is_some_and(|p| !p.is_fake()) == b,
                None => !b,
            });
        });
        map.consume(&FAKEPLAYER, |b| {
            self.add(FAKEPLAYER.name(), move |q| match q.attacker() {
                Some(attacker) => attacker.as_player().is_some_and(|p| p.is_fake()) == b,
                None => !b,
            });
        });
    }

    fn damage(&mut self, map: &mut AttributeMap, key: &Key<bool>, flag: fn(&DamageSource) -> bool) {
        map.consume(key, |b| {
            self.add(key.name(), move |q| q.source().map_or(!b, |s| flag(s) == b));
        });
    }

    fn count(&mut self, map: &mut AttributeMap, key: &Key<Json>, bound: Bound) {
        let Some(value) = map.take(key) else {
            return;
        };
        match CountInfo::from_json(&value, self.registry()) {
            Ok(info) => {
                let counts = Arc::clone(&self.host.counts);
                self.push(key.name(), CountCheck { info, bound, counts });
            }
            Err(err) => self.reporter.error(err),
        }
    }

    fn day_count(&mut self, map: &mut AttributeMap) {
        if let Some(n) = map.take(&DAYCOUNT) {
            if n > 0 {
                self.add(DAYCOUNT.name(), move |q| q.world().day_counter() % n == 0);
            } else {
                self.reporter.error(ConfigError::BadDayCount {
                    key: DAYCOUNT.name(),
                    value: n,
                });
            }
        }
        map.consume(&MINDAYCOUNT, |n| {
            self.add(MINDAYCOUNT.name(), move |q| q.world().day_counter() >= n);
        });
        map.consume(&MAXDAYCOUNT, |n| {
            self.add(MAXDAYCOUNT.name(), move |q| q.world().day_counter() < n);
        });
    }
}

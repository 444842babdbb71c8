use std::sync::Arc;

use rand::RngCore;
use serde::Deserialize;
use serde_json::Value as Json;

use crate::ConfigError;
use crate::evaluate::Check;
use crate::host::{PopulationCache, Registry};
use crate::parse::parse_count;
use crate::query::EventQuery;
use crate::types::ResourceId;

/// Chunks in the 17x17 area a player keeps spawnable.
const CHUNK_AREA: i64 = 289;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Passive,
    Hostile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Fixed,
    PerPlayer,
    PerChunk,
}

/// A validated population-count condition.
///
/// With no species, no mod and no category the count is taken for the
/// species of the entity the event is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountInfo {
    amount: i32,
    species: Vec<ResourceId>,
    namespace: Option<String>,
    category: Option<Category>,
    scale: Scale,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CountDoc {
    amount: f64,
    #[serde(default)]
    mob: Option<OneOrMany>,
    #[serde(default, rename = "mod")]
    namespace: Option<String>,
    #[serde(default)]
    perplayer: bool,
    #[serde(default)]
    perchunk: bool,
    #[serde(default)]
    passive: bool,
    #[serde(default)]
    hostile: bool,
}

impl CountInfo {
    /// Parse a count description: a bare amount, an `amount,mob` string or
    /// an object with `amount`, `mob`, `mod`, `perplayer`, `perchunk`,
    /// `passive` and `hostile`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed descriptions, unknown mobs
    /// and contradictory combinations.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_json(value: &Json, registry: &dyn Registry) -> Result<Self, ConfigError> {
        let bad = |reason: &str| ConfigError::BadCount {
            description: match value {
                Json::String(text) => text.clone(),
                other => other.to_string(),
            },
            reason: reason.to_owned(),
        };

        let info = match value {
            Json::Number(n) => Self::plain(n.as_f64().unwrap_or_default() as i32, Vec::new()),
            Json::String(text) => {
                let (amount, mob) = parse_count(text).map_err(|_| bad("bad amount"))?;
                let species = mob
                    .map(|name| known_entity(name, registry))
                    .transpose()?
                    .into_iter()
                    .collect();
                Self::plain(amount, species)
            }
            Json::Object(_) => {
                let doc: CountDoc =
                    serde_json::from_value(value.clone()).map_err(|e| bad(&e.to_string()))?;
                Self::from_doc(doc, registry)?
            }
            _ => return Err(bad("expected a number, a string or an object")),
        };
        Ok(info)
    }

    fn plain(amount: i32, species: Vec<ResourceId>) -> Self {
        Self {
            amount,
            species,
            namespace: None,
            category: None,
            scale: Scale::Fixed,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_doc(doc: CountDoc, registry: &dyn Registry) -> Result<Self, ConfigError> {
        if doc.perchunk && doc.perplayer {
            return Err(ConfigError::InvalidCount(
                "cannot combine 'perchunk' and 'perplayer'",
            ));
        }
        let names = match doc.mob {
            None => Vec::new(),
            Some(OneOrMany::One(name)) => vec![name],
            Some(OneOrMany::Many(names)) => names,
        };
        if doc.namespace.is_some() && !names.is_empty() {
            return Err(ConfigError::InvalidCount("cannot combine 'mod' with 'mob'"));
        }
        if doc.passive && doc.hostile {
            return Err(ConfigError::InvalidCount(
                "cannot use 'passive' and 'hostile' together",
            ));
        }
        if (doc.passive || doc.hostile) && !names.is_empty() {
            return Err(ConfigError::InvalidCount(
                "cannot combine 'passive' or 'hostile' with 'mob'",
            ));
        }

        let species = names
            .iter()
            .map(|name| known_entity(name, registry))
            .collect::<Result<Vec<_>, _>>()?;
        let category = match (doc.passive, doc.hostile) {
            (true, _) => Some(Category::Passive),
            (_, true) => Some(Category::Hostile),
            _ => None,
        };
        let scale = match (doc.perplayer, doc.perchunk) {
            (true, _) => Scale::PerPlayer,
            (_, true) => Scale::PerChunk,
            _ => Scale::Fixed,
        };

        Ok(Self {
            amount: doc.amount as i32,
            species,
            namespace: doc.namespace,
            category,
            scale,
        })
    }

    /// Live count this condition is about.
    pub fn current(&self, counts: &dyn PopulationCache, query: &dyn EventQuery) -> i32 {
        let world = query.world();
        if let Some(namespace) = &self.namespace {
            return match self.category {
                Some(Category::Hostile) => counts.count_per_mod_hostile(world, namespace),
                Some(Category::Passive) => counts.count_per_mod_passive(world, namespace),
                None => counts.count_per_mod(world, namespace),
            };
        }
        match (self.category, self.species.as_slice()) {
            (Some(Category::Hostile), _) => counts.count_hostile(world),
            (Some(Category::Passive), _) => counts.count_passive(world),
            (None, []) => counts.count(world, query.entity().species()),
            (None, [one]) => counts.count(world, one),
            (None, many) => many.iter().map(|species| counts.count(world, species)).sum(),
        }
    }

    /// Amount after scaling by players or spawnable chunks.
    pub fn threshold(&self, counts: &dyn PopulationCache, query: &dyn EventQuery) -> i64 {
        let amount = i64::from(self.amount);
        match self.scale {
            Scale::Fixed => amount,
            Scale::PerPlayer => amount * i64::from(counts.valid_players(query.world())),
            Scale::PerChunk => {
                amount * i64::from(counts.valid_spawn_chunks(query.world())) / CHUNK_AREA
            }
        }
    }
}

fn known_entity(name: &str, registry: &dyn Registry) -> Result<ResourceId, ConfigError> {
    let id = ResourceId::parse(name);
    if registry.has_entity(&id) {
        Ok(id)
    } else {
        Err(ConfigError::UnknownEntity(name.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    /// Passes at or above the threshold.
    Min,
    /// Passes strictly below the threshold.
    Max,
}

pub(crate) struct CountCheck {
    pub(crate) info: CountInfo,
    pub(crate) bound: Bound,
    pub(crate) counts: Arc<dyn PopulationCache>,
}

impl Check for CountCheck {
    fn evaluate(&self, query: &dyn EventQuery, _rng: &mut dyn RngCore) -> bool {
        let current = i64::from(self.info.current(self.counts.as_ref(), query));
        let threshold = self.info.threshold(self.counts.as_ref(), query);
        match self.bound {
            Bound::Min => current >= threshold,
            Bound::Max => current < threshold,
        }
    }
}

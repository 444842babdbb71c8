use std::fmt;
use std::fs;
use std::path::Path;

use rand::RngCore;
use serde_json::Value as Json;
use tracing::debug;

use super::{Phases, attributes, documents, report_leftovers};
use crate::actions::{Action, ActionTarget, compile_actions};
use crate::attributes::DescriptorSet;
use crate::compile::compile;
use crate::diagnostics::{ErrorSink, Reporter};
use crate::error::GatehouseError;
use crate::evaluate::RuleEvaluator;
use crate::host::Host;
use crate::keys::*;
use crate::query::EventQuery;
use crate::types::{EventResult, MatchReport};

/// A rule from `spawn.json`: decides whether an entity may spawn (or join
/// the world) and adjusts it when it does.
pub struct SpawnRule {
    evaluator: RuleEvaluator,
    actions: Vec<Action>,
    phases: Phases,
    on_join: bool,
    result: Option<EventResult>,
    do_continue: bool,
}

impl SpawnRule {
    /// Keywords a spawn rule understands.
    #[must_use]
    pub fn descriptors() -> DescriptorSet {
        DescriptorSet::new()
            .single(&ONJOIN)
            .multi(&PHASE)
            .single(&MINTIME)
            .single(&MAXTIME)
            .single(&DAYCOUNT)
            .single(&MINDAYCOUNT)
            .single(&MAXDAYCOUNT)
            .single(&MINCOUNT)
            .single(&MAXCOUNT)
            .single(&MINLIGHT)
            .single(&MAXLIGHT)
            .single(&MINHEIGHT)
            .single(&MAXHEIGHT)
            .single(&MINDIFFICULTY)
            .single(&MAXDIFFICULTY)
            .single(&MINSPAWNDIST)
            .single(&MAXSPAWNDIST)
            .single(&RANDOM)
            .single(&CANSPAWNHERE)
            .single(&NOTCOLLIDING)
            .single(&SPAWNER)
            .single(&INCONTROL)
            .single(&INBUILDING)
            .single(&INCITY)
            .single(&INSTREET)
            .single(&INSPHERE)
            .single(&GAMESTAGE)
            .single(&PASSIVE)
            .single(&HOSTILE)
            .single(&SEESKY)
            .single(&WEATHER)
            .multi(&CATEGORY)
            .single(&DIFFICULTY)
            .single(&STRUCTURE)
            .single(&WINTER)
            .single(&SUMMER)
            .single(&SPRING)
            .single(&AUTUMN)
            .multi(&MOB)
            .multi(&MOD)
            .multi(&BLOCK)
            .single(&BLOCKOFFSET)
            .multi(&BIOME)
            .multi(&BIOMETYPE)
            .multi(&DIMENSION)
            .multi(&DIMENSION_MOD)
            .single(&STATE)
            .multi(&HELMET)
            .multi(&CHESTPLATE)
            .multi(&LEGGINGS)
            .multi(&BOOTS)
            .multi(&AMULET)
            .multi(&RING)
            .multi(&BELT)
            .multi(&TRINKET)
            .multi(&HEAD)
            .multi(&BODY)
            .multi(&CHARM)
            .multi(&PLAYER_HELDITEM)
            .multi(&OFFHANDITEM)
            .multi(&BOTHHANDSITEM)
            .single(&ACTION_RESULT)
            .single(&ACTION_CONTINUE)
            .single(&ACTION_MESSAGE)
            .single(&ACTION_HEALTHSET)
            .single(&ACTION_HEALTHMULTIPLY)
            .single(&ACTION_HEALTHADD)
            .single(&ACTION_SPEEDSET)
            .single(&ACTION_SPEEDMULTIPLY)
            .single(&ACTION_SPEEDADD)
            .single(&ACTION_DAMAGESET)
            .single(&ACTION_DAMAGEMULTIPLY)
            .single(&ACTION_DAMAGEADD)
            .single(&ACTION_SIZEMULTIPLY)
            .single(&ACTION_SIZEADD)
            .single(&ACTION_ANGRY)
            .single(&ACTION_MOBNBT)
            .single(&ACTION_CUSTOMNAME)
            .multi(&ACTION_HELDITEM)
            .multi(&ACTION_ARMORBOOTS)
            .multi(&ACTION_ARMORLEGS)
            .multi(&ACTION_ARMORCHEST)
            .multi(&ACTION_ARMORHELMET)
            .multi(&ACTION_POTION)
    }

    /// Build one rule from its document. Problems are reported to `sink`;
    /// `None` only when the document is not an object or has a malformed
    /// value.
    pub fn parse(
        document: &Json,
        descriptors: &DescriptorSet,
        host: &Host,
        name: &str,
        sink: &mut dyn ErrorSink,
    ) -> Option<Self> {
        let mut reporter = Reporter::new(name, sink);
        let (mut map, phases) = attributes(document, descriptors, &mut reporter)?;
        let on_join = map.get(&ONJOIN).unwrap_or(false);

        // `helditem` equips the entity here; keep it away from the
        // condition of the same name.
        let held = map.take_list(&ACTION_HELDITEM);
        let evaluator = compile(&mut map, host, &mut reporter);
        if let Some(values) = held {
            map.insert_raw(ACTION_HELDITEM.name(), values);
        }

        let actions = compile_actions(&mut map, host.registry.as_ref(), &mut reporter);
        let result = map.take(&ACTION_RESULT).map(|r| EventResult::from_keyword(&r));
        let do_continue = map.take(&ACTION_CONTINUE).unwrap_or(false);
        report_leftovers(&map, "spawn", &mut reporter);

        debug!(
            document = name,
            checks = evaluator.len(),
            actions = actions.len(),
            "compiled spawn rule"
        );
        Some(Self {
            evaluator,
            actions,
            phases,
            on_join,
            result,
            do_continue,
        })
    }

    /// Parse a whole `spawn.json`.
    ///
    /// # Errors
    ///
    /// Returns [`GatehouseError`] if the text is not a JSON array. Rules
    /// that fail to build are reported to `sink` and skipped.
    pub fn load_all(
        text: &str,
        host: &Host,
        sink: &mut dyn ErrorSink,
    ) -> Result<Vec<Self>, GatehouseError> {
        let descriptors = Self::descriptors();
        let rules: Vec<Self> = documents(text)?
            .iter()
            .enumerate()
            .filter_map(|(i, doc)| {
                Self::parse(doc, &descriptors, host, &format!("spawn.json[{i}]"), sink)
            })
            .collect();
        debug!(rules = rules.len(), "loaded spawn rules");
        Ok(rules)
    }

    /// Read and parse a `spawn.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`GatehouseError`] if the file cannot be read or is not a
    /// JSON array.
    pub fn from_file(
        path: impl AsRef<Path>,
        host: &Host,
        sink: &mut dyn ErrorSink,
    ) -> Result<Vec<Self>, GatehouseError> {
        let text = fs::read_to_string(path)?;
        Self::load_all(&text, host, sink)
    }

    pub fn matches(&self, query: &dyn EventQuery, rng: &mut dyn RngCore) -> bool {
        self.evaluator.matches(query, rng)
    }

    pub fn match_detailed(&self, query: &dyn EventQuery, rng: &mut dyn RngCore) -> MatchReport {
        self.evaluator.match_detailed(query, rng)
    }

    /// Run the rule's actions, in order, on a matched entity.
    pub fn apply(&self, target: &mut dyn ActionTarget, rng: &mut dyn RngCore) {
        for action in &self.actions {
            action.apply(target, rng);
        }
    }

    #[must_use]
    pub fn evaluator(&self) -> &RuleEvaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn phases(&self) -> &Phases {
        &self.phases
    }

    /// Whether the rule applies to entities joining the world instead of
    /// spawn checks.
    #[must_use]
    pub fn on_join(&self) -> bool {
        self.on_join
    }

    /// Outcome override; `None` leaves the event alone.
    #[must_use]
    pub fn result(&self) -> Option<EventResult> {
        self.result
    }

    /// Whether later rules are still considered after this one matched.
    #[must_use]
    pub fn do_continue(&self) -> bool {
        self.do_continue
    }

    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

impl fmt::Debug for SpawnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpawnRule")
            .field("evaluator", &self.evaluator)
            .field("actions", &self.actions.len())
            .field("phases", &self.phases)
            .field("on_join", &self.on_join)
            .field("result", &self.result)
            .field("do_continue", &self.do_continue)
            .finish()
    }
}

use std::fs;
use std::path::Path;

use rand::RngCore;
use serde_json::Value as Json;
use tracing::debug;

use super::{Phases, attributes, documents, report_leftovers};
use crate::attributes::DescriptorSet;
use crate::compile::compile;
use crate::diagnostics::{ErrorSink, Reporter};
use crate::error::GatehouseError;
use crate::evaluate::RuleEvaluator;
use crate::host::Host;
use crate::keys::*;
use crate::query::EventQuery;
use crate::types::{EventResult, MatchReport};

/// A rule from `experience.json`: adjusts or cancels the experience an
/// entity drops.
#[derive(Debug)]
pub struct ExperienceRule {
    evaluator: RuleEvaluator,
    phases: Phases,
    result: EventResult,
    set_xp: Option<i32>,
    mult_xp: f32,
    add_xp: f32,
}

impl ExperienceRule {
    /// Keywords an experience rule understands.
    #[must_use]
    pub fn descriptors() -> DescriptorSet {
        DescriptorSet::new()
            .multi(&PHASE)
            .single(&MINTIME)
            .single(&MAXTIME)
            .single(&MINLIGHT)
            .single(&MAXLIGHT)
            .single(&MINHEIGHT)
            .single(&MAXHEIGHT)
            .single(&MINDIFFICULTY)
            .single(&MAXDIFFICULTY)
            .single(&MINSPAWNDIST)
            .single(&MAXSPAWNDIST)
            .single(&RANDOM)
            .single(&INBUILDING)
            .single(&INCITY)
            .single(&INSTREET)
            .single(&INSPHERE)
            .single(&PASSIVE)
            .single(&HOSTILE)
            .single(&SEESKY)
            .single(&WEATHER)
            .multi(&CATEGORY)
            .single(&DIFFICULTY)
            .single(&STRUCTURE)
            .single(&PLAYER)
            .single(&REALPLAYER)
            .single(&FAKEPLAYER)
            .single(&WINTER)
            .single(&SUMMER)
            .single(&SPRING)
            .single(&AUTUMN)
            .single(&STATE)
            .single(&PSTATE)
            .multi(&MOB)
            .multi(&MOD)
            .multi(&BLOCK)
            .single(&BLOCKOFFSET)
            .multi(&BIOME)
            .multi(&BIOMETYPE)
            .multi(&DIMENSION)
            .multi(&DIMENSION_MOD)
            .multi(&HELDITEM)
            .multi(&PLAYER_HELDITEM)
            .multi(&OFFHANDITEM)
            .multi(&BOTHHANDSITEM)
            .single(&ACTION_RESULT)
            .single(&ACTION_SETXP)
            .single(&ACTION_ADDXP)
            .single(&ACTION_MULTXP)
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
        let evaluator = compile(&mut map, host, &mut reporter);

        let result = map
            .take(&ACTION_RESULT)
            .map_or(EventResult::Default, |r| EventResult::from_keyword(&r));
        let set_xp = map.take(&ACTION_SETXP);
        let add_xp = map.take(&ACTION_ADDXP).unwrap_or(0.0);
        let mult_xp = map.take(&ACTION_MULTXP).unwrap_or(1.0);
        report_leftovers(&map, "experience", &mut reporter);

        debug!(
            document = name,
            checks = evaluator.len(),
            "compiled experience rule"
        );
        Some(Self {
            evaluator,
            phases,
            result,
            set_xp,
            mult_xp,
            add_xp,
        })
    }

    /// Parse a whole `experience.json`.
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
                Self::parse(doc, &descriptors, host, &format!("experience.json[{i}]"), sink)
            })
            .collect();
        debug!(rules = rules.len(), "loaded experience rules");
        Ok(rules)
    }

    /// Read and parse an `experience.json` file.
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

    /// Experience after the rule's overrides. `setxp` replaces the dropped
    /// amount before it is scaled and offset; the result is truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn modify_xp(&self, xp: i32) -> i32 {
        let base = self.set_xp.unwrap_or(xp);
        (base as f32 * self.mult_xp + self.add_xp) as i32
    }

    #[must_use]
    pub fn evaluator(&self) -> &RuleEvaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn phases(&self) -> &Phases {
        &self.phases
    }

    #[must_use]
    pub fn result(&self) -> EventResult {
        self.result
    }
}

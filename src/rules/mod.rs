//! Rule kinds and the loaders for their JSON rule files.

mod experience;
mod phase;
mod spawn;

pub use experience::ExperienceRule;
pub use phase::Phases;
pub use spawn::SpawnRule;

use serde_json::Value as Json;

use crate::ConfigError;
use crate::attributes::{AttributeMap, DescriptorSet};
use crate::diagnostics::Reporter;
use crate::error::GatehouseError;
use crate::keys::PHASE;

/// Split a rule file into its rule documents.
fn documents(text: &str) -> Result<Vec<Json>, GatehouseError> {
    match serde_json::from_str(text)? {
        Json::Array(items) => Ok(items),
        _ => Err(GatehouseError::NotAList),
    }
}

/// Parse a document against `descriptors`, reporting a malformed one.
fn attributes(
    document: &Json,
    descriptors: &DescriptorSet,
    reporter: &mut Reporter<'_>,
) -> Option<(AttributeMap, Phases)> {
    match descriptors.parse(document) {
        Ok(map) => {
            let phases = Phases::new(map.get_list(&PHASE));
            Some((map, phases))
        }
        Err(err) => {
            reporter.error(err);
            None
        }
    }
}

/// Report every key nothing consumed as one error.
fn report_leftovers(map: &AttributeMap, rule: &'static str, reporter: &mut Reporter<'_>) {
    if !map.is_empty() {
        reporter.error(ConfigError::InvalidKeywords {
            rule,
            keys: map.keys().map(str::to_owned).collect(),
        });
    }
}

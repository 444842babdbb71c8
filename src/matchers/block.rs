use serde::Deserialize;
use serde_json::Value as Json;

use super::RangeExpr;
use super::item::{ItemMatcher, any_matches};
use crate::ConfigError;
use crate::diagnostics::Reporter;
use crate::host::Registry;
use crate::query::{EventQuery, World};
use crate::types::{BlockPos, BlockState, Direction, ResourceId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockTest {
    Any,
    Block(ResourceId),
    State(BlockState),
    OreDictionary,
}

/// Predicate over the block at a position.
///
/// Identity tests read the block state and fail when the chunk holding the
/// position is not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMatcher {
    test: BlockTest,
    namespace: Option<String>,
    energy: Option<(RangeExpr, Option<Direction>)>,
    contains: Option<(Vec<ItemMatcher>, Option<Direction>)>,
}

#[derive(Deserialize)]
struct PropertyDoc {
    name: String,
    value: String,
}

impl BlockMatcher {
    #[must_use]
    pub fn test(&self, world: &dyn World, pos: BlockPos) -> bool {
        let identity = match &self.test {
            BlockTest::Any => true,
            BlockTest::Block(id) => world.block_state(pos).is_some_and(|s| s.block() == id),
            BlockTest::State(state) => world.block_state(pos).as_ref() == Some(state),
            BlockTest::OreDictionary => false,
        };
        identity
            && self.namespace.as_deref().is_none_or(|ns| {
                world
                    .block_state(pos)
                    .is_some_and(|s| s.block().namespace() == ns)
            })
            && self
                .energy
                .is_none_or(|(expr, side)| expr.test(world.block_energy(pos, side).unwrap_or(0)))
            && self.contains.as_ref().is_none_or(|(matchers, side)| {
                world
                    .block_inventory(pos, *side)
                    .is_some_and(|items| items.iter().any(|stack| any_matches(matchers, stack)))
            })
    }

    pub(crate) fn from_json(
        value: &Json,
        registry: &dyn Registry,
        reporter: &mut Reporter<'_>,
    ) -> Result<Self, ConfigError> {
        match value {
            Json::String(name) => {
                let test = if let Some(ore) = name.strip_prefix("ore:") {
                    reporter.warn(ConfigError::OreDictionary(ore.to_owned()));
                    BlockTest::OreDictionary
                } else {
                    BlockTest::Block(known_block(name, registry)?)
                };
                Ok(Self::simple(test))
            }
            Json::Object(obj) => {
                let test = if let Some(ore) = obj.get("ore") {
                    reporter.warn(ConfigError::OreDictionary(ore.to_string()));
                    BlockTest::OreDictionary
                } else if let Some(name) = obj.get("block") {
                    let name = name
                        .as_str()
                        .ok_or_else(|| ConfigError::BadBlockDescription(value.to_string()))?;
                    let block = known_block(name, registry)?;
                    match obj.get("properties") {
                        Some(props) => {
                            let props: Vec<PropertyDoc> = serde_json::from_value(props.clone())
                                .map_err(|_| ConfigError::BadBlockDescription(value.to_string()))?;
                            let mut state = registry
                                .default_state(&block)
                                .unwrap_or_else(|| BlockState::new(block));
                            for prop in &props {
                                state.set_existing(&prop.name, &prop.value);
                            }
                            BlockTest::State(state)
                        }
                        None => BlockTest::Block(block),
                    }
                } else {
                    BlockTest::Any
                };

                let side = obj
                    .get("side")
                    .map(|s| {
                        let name = s.as_str().unwrap_or_default();
                        Direction::from_name(name)
                            .ok_or_else(|| ConfigError::UnknownSide(name.to_owned()))
                    })
                    .transpose()?;

                let energy = match obj.get("energy") {
                    Some(v) => match RangeExpr::from_json(v) {
                        Ok(expr) => Some((expr, side)),
                        Err(err) => {
                            reporter.error(err);
                            None
                        }
                    },
                    None => None,
                };

                // Every item rejected: the constraint is dropped, not kept empty.
                let contains = obj
                    .get("contains")
                    .map(|v| {
                        let values: Vec<&Json> = match v {
                            Json::Array(items) => items.iter().collect(),
                            single => vec![single],
                        };
                        ItemMatcher::list_from_json(values, registry, reporter)
                    })
                    .filter(|matchers| !matchers.is_empty())
                    .map(|matchers| (matchers, side));

                Ok(Self {
                    test,
                    namespace: obj.get("mod").and_then(Json::as_str).map(str::to_owned),
                    energy,
                    contains,
                })
            }
            other => Err(ConfigError::BadBlockDescription(other.to_string())),
        }
    }

    fn simple(test: BlockTest) -> Self {
        Self {
            test,
            namespace: None,
            energy: None,
            contains: None,
        }
    }
}

fn known_block(name: &str, registry: &dyn Registry) -> Result<ResourceId, ConfigError> {
    let id = ResourceId::parse(name);
    if registry.has_block(&id) {
        Ok(id)
    } else {
        Err(ConfigError::UnknownBlock(name.to_owned()))
    }
}

/// Where a block check looks, relative to the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct BlockOffset {
    #[serde(default)]
    offset: Offset,
    /// Start from the block the player looks at instead of the ground.
    #[serde(default)]
    look: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
struct Offset {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
    #[serde(default)]
    z: i32,
}

impl BlockOffset {
    /// Accepts the offset object itself or a string holding it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadBlockOffset`] if the value does not
    /// describe an offset.
    pub fn from_json(value: &Json) -> Result<Self, ConfigError> {
        let bad = || ConfigError::BadBlockOffset(value.to_string());
        match value {
            Json::String(text) => serde_json::from_str(text).map_err(|_| bad()),
            other => serde_json::from_value(other.clone()).map_err(|_| bad()),
        }
    }

    #[must_use]
    pub fn position(&self, query: &dyn EventQuery) -> BlockPos {
        let base = if self.look {
            query
                .player()
                .and_then(|player| query.world().looked_at_block(player))
                .unwrap_or_else(|| query.valid_block_pos())
        } else {
            query.valid_block_pos()
        };
        base.offset(self.offset.x, self.offset.y, self.offset.z)
    }
}

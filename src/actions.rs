//! Side effects a matching spawn rule has on the entity it matched.

use rand::RngCore;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::Deserialize;
use serde_json::Value as Json;

use crate::ConfigError;
use crate::attributes::{AttributeMap, Key};
use crate::diagnostics::Reporter;
use crate::host::Registry;
use crate::keys::*;
use crate::parse::{parse_item, parse_potion};
use crate::types::{Compound, EquipmentSlot, ItemStack, ResourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityAttribute {
    MaxHealth,
    MovementSpeed,
    AttackDamage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionEffect {
    pub effect: ResourceId,
    pub duration: i32,
    pub amplifier: i32,
}

/// Mutable view of the living entity a rule acts on.
pub trait LivingEntity {
    /// Base value of an attribute, `None` if the entity does not have it.
    fn base_attribute(&self, attribute: EntityAttribute) -> Option<f64>;

    fn set_base_attribute(&mut self, attribute: EntityAttribute, value: f64);

    fn set_health(&mut self, health: f32);

    fn has_marker(&self, marker: &str) -> bool;

    fn add_marker(&mut self, marker: &str);

    fn scale(&self) -> f32;

    fn set_scale(&mut self, scale: f32);

    fn make_angry(&mut self);

    fn set_custom_name(&mut self, name: &str);

    fn equip(&mut self, slot: EquipmentSlot, stack: ItemStack);

    fn add_effect(&mut self, effect: &PotionEffect);

    fn merge_tag(&mut self, tag: &Compound);
}

/// What the host exposes while a rule's actions run.
pub trait ActionTarget {
    /// `None` when the event's entity is not a living entity.
    fn living(&mut self) -> Option<&mut dyn LivingEntity>;

    /// Deliver a status message to the player nearest to the event.
    fn send_message(&mut self, message: &str);
}

pub(crate) enum Action {
    /// Applied once per entity; `marker` records that it happened.
    Attribute {
        attribute: EntityAttribute,
        marker: &'static str,
        set: Option<f32>,
        multiply: f32,
        add: f32,
    },
    Size {
        multiply: f32,
        add: f32,
    },
    Potion(PotionEffect),
    Equip {
        slot: EquipmentSlot,
        items: Vec<ItemStack>,
        weights: WeightedIndex<f32>,
    },
    Angry,
    MergeTag(Compound),
    CustomName(String),
    Message(String),
}

impl Action {
    pub(crate) fn apply(&self, target: &mut dyn ActionTarget, rng: &mut dyn RngCore) {
        if let Action::Message(message) = self {
            target.send_message(message);
            return;
        }
        let Some(entity) = target.living() else {
            return;
        };
        match self {
            Action::Attribute {
                attribute,
                marker,
                set,
                multiply,
                add,
            } => {
                if entity.has_marker(marker) {
                    return;
                }
                let Some(base) = entity.base_attribute(*attribute) else {
                    return;
                };
                let value = set.map_or(base, f64::from) * f64::from(*multiply) + f64::from(*add);
                entity.set_base_attribute(*attribute, value);
                if *attribute == EntityAttribute::MaxHealth {
                    #[allow(clippy::cast_possible_truncation)]
                    entity.set_health(value as f32);
                }
                entity.add_marker(marker);
            }
            Action::Size { multiply, add } => {
                let scale = entity.scale() * multiply + add;
                entity.set_scale(scale);
            }
            Action::Potion(effect) => entity.add_effect(effect),
            Action::Equip {
                slot,
                items,
                weights,
            } => {
                if let Some(stack) = items.get(weights.sample(rng)) {
                    entity.equip(*slot, stack.clone());
                }
            }
            Action::Angry => entity.make_angry(),
            Action::MergeTag(tag) => entity.merge_tag(tag),
            Action::CustomName(name) => entity.set_custom_name(name),
            Action::Message(_) => {}
        }
    }
}

/// Compile every action key present in `map`, consuming it.
pub(crate) fn compile_actions(
    map: &mut AttributeMap,
    registry: &dyn Registry,
    reporter: &mut Reporter<'_>,
) -> Vec<Action> {
    let mut actions = Vec::new();

    let attributes = [
        (
            EntityAttribute::MaxHealth,
            "ctrlHealth",
            [ACTION_HEALTHSET, ACTION_HEALTHMULTIPLY, ACTION_HEALTHADD],
        ),
        (
            EntityAttribute::MovementSpeed,
            "ctrlSpeed",
            [ACTION_SPEEDSET, ACTION_SPEEDMULTIPLY, ACTION_SPEEDADD],
        ),
        (
            EntityAttribute::AttackDamage,
            "ctrlDamage",
            [ACTION_DAMAGESET, ACTION_DAMAGEMULTIPLY, ACTION_DAMAGEADD],
        ),
    ];
    for (attribute, marker, [set, multiply, add]) in attributes {
        if [set, multiply, add].iter().any(|k| map.contains(k)) {
            actions.push(Action::Attribute {
                attribute,
                marker,
                set: map.take(&set),
                multiply: map.take(&multiply).unwrap_or(1.0),
                add: map.take(&add).unwrap_or(0.0),
            });
        }
    }

    if map.contains(&ACTION_SIZEMULTIPLY) || map.contains(&ACTION_SIZEADD) {
        actions.push(Action::Size {
            multiply: map.take(&ACTION_SIZEMULTIPLY).unwrap_or(1.0),
            add: map.take(&ACTION_SIZEADD).unwrap_or(0.0),
        });
    }

    for spec in map.take_list(&ACTION_POTION).unwrap_or_default() {
        match potion(&spec, registry) {
            Ok(effect) => actions.push(Action::Potion(effect)),
            Err(err) => reporter.error(err),
        }
    }

    let equipment = [
        (ACTION_HELDITEM, EquipmentSlot::MainHand),
        (ACTION_ARMORHELMET, EquipmentSlot::Head),
        (ACTION_ARMORCHEST, EquipmentSlot::Chest),
        (ACTION_ARMORLEGS, EquipmentSlot::Legs),
        (ACTION_ARMORBOOTS, EquipmentSlot::Feet),
    ];
    for (key, slot) in equipment {
        if let Some(action) = equip(map, &key, slot, registry, reporter) {
            actions.push(action);
        }
    }

    if map.take(&ACTION_ANGRY) == Some(true) {
        actions.push(Action::Angry);
    }

    if let Some(raw) = map.take(&ACTION_MOBNBT) {
        match tag_from_json(&raw) {
            Some(tag) => actions.push(Action::MergeTag(tag)),
            None => reporter.error(ConfigError::BadTag(raw.to_string())),
        }
    }

    if let Some(name) = map.take(&ACTION_CUSTOMNAME) {
        actions.push(Action::CustomName(name));
    }
    if let Some(message) = map.take(&ACTION_MESSAGE) {
        actions.push(Action::Message(message));
    }

    actions
}

fn potion(spec: &str, registry: &dyn Registry) -> Result<PotionEffect, ConfigError> {
    let (name, duration, amplifier) =
        parse_potion(spec).map_err(|_| ConfigError::BadPotion(spec.to_owned()))?;
    let effect = ResourceId::parse(name);
    if !registry.has_effect(&effect) {
        return Err(ConfigError::UnknownEffect(name.to_owned()));
    }
    Ok(PotionEffect {
        effect,
        duration,
        amplifier,
    })
}

#[derive(Deserialize)]
struct WeightedDoc {
    item: String,
    #[serde(default = "default_weight")]
    weight: f32,
    #[serde(default)]
    count: Option<i32>,
    #[serde(default)]
    nbt: Option<Json>,
}

fn default_weight() -> f32 {
    1.0
}

fn equip(
    map: &mut AttributeMap,
    key: &Key<Json>,
    slot: EquipmentSlot,
    registry: &dyn Registry,
    reporter: &mut Reporter<'_>,
) -> Option<Action> {
    let values = map.take_list(key)?;
    let mut items = Vec::with_capacity(values.len());
    let mut weights = Vec::with_capacity(values.len());
    for value in &values {
        match weighted_item(value, registry) {
            Ok((stack, weight)) => {
                items.push(stack);
                weights.push(weight);
            }
            Err(err) => reporter.error(err),
        }
    }
    if items.is_empty() {
        return None;
    }
    match WeightedIndex::new(weights) {
        Ok(weights) => Some(Action::Equip {
            slot,
            items,
            weights,
        }),
        Err(_) => {
            reporter.error(ConfigError::BadItemDescription(Json::Array(values).to_string()));
            None
        }
    }
}

fn weighted_item(value: &Json, registry: &dyn Registry) -> Result<(ItemStack, f32), ConfigError> {
    match value {
        Json::String(text) => Ok((item_stack(text, registry)?, 1.0)),
        Json::Object(_) => {
            let doc: WeightedDoc = serde_json::from_value(value.clone())
                .map_err(|_| ConfigError::BadItemDescription(value.to_string()))?;
            let mut stack = item_stack(&doc.item, registry)?;
            if let Some(count) = doc.count {
                stack = stack.with_count(count);
            }
            if let Some(nbt) = doc.nbt {
                let tag = tag_from_json(&nbt).ok_or_else(|| ConfigError::BadTag(nbt.to_string()))?;
                stack = stack.with_tag(tag);
            }
            Ok((stack, doc.weight))
        }
        other => Err(ConfigError::BadItemDescription(other.to_string())),
    }
}

fn item_stack(text: &str, registry: &dyn Registry) -> Result<ItemStack, ConfigError> {
    let descriptor =
        parse_item(text).map_err(|_| ConfigError::BadItemDescription(text.to_owned()))?;
    let id = ResourceId::parse(descriptor.id);
    if !registry.has_item(&id) {
        return Err(ConfigError::UnknownItem(descriptor.id.to_owned()));
    }
    let mut stack = ItemStack::new(id);
    if let Some(damage) = descriptor.damage {
        stack = stack.with_damage(damage);
    }
    if let Some(raw) = descriptor.tag {
        let json: Json =
            serde_json::from_str(raw).map_err(|_| ConfigError::BadTag(raw.to_owned()))?;
        let tag = Compound::from_json(&json).ok_or_else(|| ConfigError::BadTag(raw.to_owned()))?;
        stack = stack.with_tag(tag);
    }
    Ok(stack)
}

/// A compound given inline or as a string holding JSON.
fn tag_from_json(value: &Json) -> Option<Compound> {
    match value {
        Json::String(text) => serde_json::from_str::<Json>(text)
            .ok()
            .and_then(|json| Compound::from_json(&json)),
        other => Compound::from_json(other),
    }
}

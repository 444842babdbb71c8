use std::collections::BTreeMap;

use super::ids::ResourceId;
use super::nbt::Compound;

/// A stack of items as seen by item matchers.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    item: ResourceId,
    count: i32,
    damage: i32,
    tag: Option<Compound>,
    energy: Option<i64>,
}

impl ItemStack {
    pub fn new(item: impl Into<ResourceId>) -> Self {
        Self {
            item: item.into(),
            count: 1,
            damage: 0,
            tag: None,
            energy: None,
        }
    }

    /// The empty stack.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ResourceId::new(ResourceId::DEFAULT_NAMESPACE, "air")).with_count(0)
    }

    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Compound) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Attach a stored-energy capability.
    #[must_use]
    pub fn with_energy(mut self, energy: i64) -> Self {
        self.energy = Some(energy);
        self
    }

    #[must_use]
    pub fn item(&self) -> &ResourceId {
        &self.item
    }

    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    #[must_use]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Compound> {
        self.tag.as_ref()
    }

    #[must_use]
    pub fn energy(&self) -> Option<i64> {
        self.energy
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0
            || (self.item.namespace() == ResourceId::DEFAULT_NAMESPACE && self.item.path() == "air")
    }
}

/// A block together with its property values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockState {
    block: ResourceId,
    properties: BTreeMap<String, String>,
}

impl BlockState {
    pub fn new(block: impl Into<ResourceId>) -> Self {
        Self {
            block: block.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn block(&self) -> &ResourceId {
        &self.block
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Overwrite a property only if this state already declares it.
    pub(crate) fn set_existing(&mut self, name: &str, value: &str) -> bool {
        match self.properties.get_mut(name) {
            Some(slot) => {
                value.clone_into(slot);
                true
            }
            None => false,
        }
    }
}

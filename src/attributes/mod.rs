//! Typed configuration keys and the per-rule attribute store.

mod descriptor;
mod key;
mod map;

pub use descriptor::{Attribute, DescriptorSet, Shape};
pub use key::{AttributeType, Key, ValueType};
pub use map::AttributeMap;

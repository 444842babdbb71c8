//! Block, item, tag and numeric-range predicates compiled from rule
//! documents.

mod block;
mod item;
mod range;
mod tag;

pub use block::{BlockMatcher, BlockOffset};
pub use item::ItemMatcher;
pub(crate) use item::any_matches;
pub use range::RangeExpr;
pub use tag::TagMatcher;

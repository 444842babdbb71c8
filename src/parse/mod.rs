//! Grammars for the compact textual forms used inside rule documents.

mod error;
mod grammar;

pub use error::ParseError;
pub use grammar::ItemDescriptor;

use winnow::Parser;

use crate::matchers::RangeExpr;

/// Parse a numeric range expression such as `>=5` or `3-7`.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid expression.
pub fn parse_range(input: &str) -> Result<RangeExpr, ParseError> {
    let input = input.trim();
    grammar::range_expr
        .parse(input)
        .map_err(|e| ParseError::new("range expression", input, e.offset()))
}

/// Split an item descriptor such as `minecraft:bow@3/{"Unbreakable":1}`.
///
/// # Errors
///
/// Returns [`ParseError`] if the damage part is not a number.
pub fn parse_item(input: &str) -> Result<ItemDescriptor<'_>, ParseError> {
    let input = input.trim();
    grammar::item_descriptor
        .parse(input)
        .map_err(|e| ParseError::new("item descriptor", input, e.offset()))
}

/// Split a `name=value` state specifier.
///
/// # Errors
///
/// Returns [`ParseError`] if either side is missing.
pub fn parse_state(input: &str) -> Result<(&str, &str), ParseError> {
    let input = input.trim();
    grammar::state_spec
        .parse(input)
        .map_err(|e| ParseError::new("state specifier", input, e.offset()))
}

/// Split an `amount[,mob]` count shorthand.
///
/// # Errors
///
/// Returns [`ParseError`] if the amount is not an integer.
pub fn parse_count(input: &str) -> Result<(i32, Option<&str>), ParseError> {
    let input = input.trim();
    grammar::count_shorthand
        .parse(input)
        .map_err(|e| ParseError::new("count", input, e.offset()))
}

/// Split an `effect,duration,amplifier` potion specifier.
///
/// # Errors
///
/// Returns [`ParseError`] if a part is missing or not a number.
pub fn parse_potion(input: &str) -> Result<(&str, i32, i32), ParseError> {
    let input = input.trim();
    grammar::potion_spec
        .parse(input)
        .map_err(|e| ParseError::new("potion", input, e.offset()))
}

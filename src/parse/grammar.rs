use winnow::ascii::{dec_int, space0};
use winnow::combinator::{alt, delimited, opt, preceded, separated_pair};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{rest, take_till};

use crate::matchers::RangeExpr;

// -- Numbers ----------------------------------------------------------------

fn number(input: &mut &str) -> ModalResult<i64> {
    delimited(space0, dec_int::<_, i64, _>, space0).parse_next(input)
}

fn small_number(input: &mut &str) -> ModalResult<i32> {
    delimited(space0, dec_int::<_, i32, _>, space0).parse_next(input)
}

fn word<'i>(input: &mut &'i str, stop: char) -> ModalResult<&'i str> {
    take_till(1.., move |c: char| c == stop)
        .map(str::trim)
        .verify(|s: &str| !s.is_empty())
        .parse_next(input)
}

// -- Range expressions ------------------------------------------------------

/// `>=N`, `>N`, `<=N`, `<N`, `=N`, `!=N`, `<>N`, `A-B` or a bare `N`.
pub fn range_expr(input: &mut &str) -> ModalResult<RangeExpr> {
    alt((
        preceded(">=", number).map(RangeExpr::AtLeast),
        preceded('>', number).map(RangeExpr::Above),
        preceded("<=", number).map(RangeExpr::AtMost),
        preceded(alt(("!=", "<>")), number).map(RangeExpr::NotEqual),
        preceded('<', number).map(RangeExpr::Below),
        preceded('=', number).map(RangeExpr::Equal),
        separated_pair(number, '-', number).map(|(low, high)| RangeExpr::Between(low, high)),
        number.map(RangeExpr::Equal),
    ))
    .parse_next(input)
}

// -- Item descriptors -------------------------------------------------------

/// Pieces of an `id[@damage][/tag]` item descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor<'i> {
    pub id: &'i str,
    pub damage: Option<i32>,
    pub tag: Option<&'i str>,
}

pub fn item_descriptor<'i>(input: &mut &'i str) -> ModalResult<ItemDescriptor<'i>> {
    (
        take_till(1.., |c: char| c == '@' || c == '/').map(str::trim),
        opt(preceded('@', small_number)),
        opt(preceded('/', rest)),
    )
        .map(|(id, damage, tag)| ItemDescriptor { id, damage, tag })
        .parse_next(input)
}

// -- Small specifiers -------------------------------------------------------

/// `name=value`
pub fn state_spec<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    separated_pair(
        move |i: &mut &'i str| word(i, '='),
        '=',
        rest.map(str::trim).verify(|s: &str| !s.is_empty()),
    )
    .parse_next(input)
}

/// `amount[,mob]`
pub fn count_shorthand<'i>(input: &mut &'i str) -> ModalResult<(i32, Option<&'i str>)> {
    (small_number, opt(preceded(',', rest.map(str::trim)))).parse_next(input)
}

/// `effect,duration,amplifier`
pub fn potion_spec<'i>(input: &mut &'i str) -> ModalResult<(&'i str, i32, i32)> {
    (
        move |i: &mut &'i str| word(i, ','),
        preceded(',', small_number),
        preceded(',', small_number),
    )
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(input: &str) -> RangeExpr {
        range_expr.parse(input).unwrap()
    }

    #[test]
    fn parse_comparison_prefixes() {
        let cases = [
            (">=5", RangeExpr::AtLeast(5)),
            (">5", RangeExpr::Above(5)),
            ("<=5", RangeExpr::AtMost(5)),
            ("<5", RangeExpr::Below(5)),
            ("=5", RangeExpr::Equal(5)),
            ("!=5", RangeExpr::NotEqual(5)),
            ("<>5", RangeExpr::NotEqual(5)),
        ];
        for (text, expected) in cases {
            assert_eq!(range(text), expected, "failed for {text}");
        }
    }

    #[test]
    fn parse_between_and_bare() {
        assert_eq!(range("3-7"), RangeExpr::Between(3, 7));
        assert_eq!(range("42"), RangeExpr::Equal(42));
        assert_eq!(range("-4"), RangeExpr::Equal(-4));
        assert_eq!(range(">= 10 "), RangeExpr::AtLeast(10));
    }

    #[test]
    fn parse_range_rejects_garbage() {
        assert!(range_expr.parse("lots").is_err());
        assert!(range_expr.parse(">=").is_err());
        assert!(range_expr.parse("3-").is_err());
        assert!(range_expr.parse("5x").is_err());
    }

    #[test]
    fn parse_item_forms() {
        let plain = item_descriptor.parse("minecraft:diamond_sword").unwrap();
        assert_eq!(plain.id, "minecraft:diamond_sword");
        assert_eq!(plain.damage, None);
        assert_eq!(plain.tag, None);

        let damaged = item_descriptor.parse("minecraft:bow@12").unwrap();
        assert_eq!(damaged.damage, Some(12));

        let tagged = item_descriptor
            .parse(r#"minecraft:bow@3/{"Unbreakable":1}"#)
            .unwrap();
        assert_eq!(tagged.damage, Some(3));
        assert_eq!(tagged.tag, Some(r#"{"Unbreakable":1}"#));
    }

    #[test]
    fn parse_item_rejects_bad_damage() {
        assert!(item_descriptor.parse("minecraft:bow@high").is_err());
    }

    #[test]
    fn parse_state() {
        assert_eq!(state_spec.parse("phase=night").unwrap(), ("phase", "night"));
        assert!(state_spec.parse("phase").is_err());
        assert!(state_spec.parse("phase=").is_err());
        assert!(state_spec.parse("=night").is_err());
    }

    #[test]
    fn parse_counts() {
        assert_eq!(count_shorthand.parse("10").unwrap(), (10, None));
        assert_eq!(
            count_shorthand.parse("10,minecraft:zombie").unwrap(),
            (10, Some("minecraft:zombie"))
        );
        assert!(count_shorthand.parse("ten,minecraft:zombie").is_err());
    }

    #[test]
    fn parse_potion() {
        assert_eq!(
            potion_spec.parse("minecraft:speed,200,1").unwrap(),
            ("minecraft:speed", 200, 1)
        );
        assert!(potion_spec.parse("minecraft:speed,200").is_err());
    }
}

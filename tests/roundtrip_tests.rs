//! Property-based tests - pragmatic approach testing core roundtrip guarantees
//!
//! The two properties the generator promises: generated text re-parses to a
//! value-equal tree, and generating that re-parsed tree reproduces the text
//! exactly.

use datastring::{generate, parse, BigFloat, BinaryBase, BitString, Item};
use num_bigint::BigInt;
use proptest::prelude::*;

fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_map(String::from)
}

/// Strings in the notation cannot contain the quote character.
fn arb_string_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,_-]{0,12}".prop_map(String::from)
}

fn arb_base() -> impl Strategy<Value = BinaryBase> {
    prop_oneof![
        Just(BinaryBase::Binary),
        Just(BinaryBase::Octal),
        Just(BinaryBase::Hexadecimal),
    ]
}

/// Binary literals built from digit text so the bit length is digit-aligned,
/// the only shape the parser itself ever produces.
fn arb_binary() -> impl Strategy<Value = Item> {
    arb_base().prop_flat_map(|base| {
        let digits = match base {
            BinaryBase::Binary => "[01]{1,16}",
            BinaryBase::Octal => "[0-7]{1,8}",
            BinaryBase::Hexadecimal => "[0-9a-f]{1,6}",
        };
        digits.prop_map(move |text| {
            let bits = BitString::from_digits(&text, base).unwrap();
            Item::binary(bits, base)
        })
    })
}

fn arb_leaf() -> impl Strategy<Value = Item> {
    prop_oneof![
        arb_identifier().prop_map(Item::symbol),
        any::<i64>().prop_map(Item::integer),
        (any::<i64>(), -6i64..6).prop_map(|(m, e)| Item::float(BigFloat::new(m, e))),
        arb_string_text().prop_map(Item::string),
        arb_binary(),
    ]
}

fn arb_item() -> impl Strategy<Value = Item> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        (arb_identifier(), prop::collection::vec(inner, 0..4))
            .prop_map(|(name, args)| Item::function(name, args))
    })
}

fn arb_document() -> impl Strategy<Value = Item> {
    prop::collection::vec(arb_item(), 0..5).prop_map(Item::MainContext)
}

proptest! {
    #[test]
    fn prop_generated_text_reparses_value_equal(document in arb_document()) {
        let text = generate(&document);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, document);
    }

    #[test]
    fn prop_generation_is_idempotent(document in arb_document()) {
        let once = generate(&document);
        let twice = generate(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_integers_round_trip(n in any::<i64>()) {
        let document = parse(&n.to_string()).unwrap();
        prop_assert_eq!(&document.children()[0], &Item::integer(n));
        prop_assert_eq!(generate(&document), n.to_string());
    }

    #[test]
    fn prop_binary_literals_keep_base_and_width(item in arb_binary()) {
        let document = Item::MainContext(vec![item]);
        let text = generate(&document);
        prop_assert_eq!(parse(&text).unwrap(), document);
    }

    #[test]
    fn prop_float_exponent_forms_agree(m in any::<i32>(), e in 0u32..6) {
        // `MeE` and the expanded integer-with-zeros form parse value-equal.
        // A zero mantissa would expand to an octal literal, so skip it.
        prop_assume!(m != 0);
        let exponential = format!("{m}e{e}");
        let expanded = format!("{}{}", m, "0".repeat(e as usize));
        let a = parse(&exponential).unwrap();
        let b = parse(&expanded).unwrap();
        let a = a.children()[0].as_literal().unwrap().as_float().unwrap();
        prop_assert_eq!(
            a,
            &BigFloat::from(expanded.parse::<BigInt>().unwrap())
        );
        // The expanded form has no point or exponent, so it is an integer.
        prop_assert!(b.children()[0].as_literal().unwrap().as_integer().is_some());
    }
}

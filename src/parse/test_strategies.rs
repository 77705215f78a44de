use proptest::prelude::*;

fn number_strategy() -> BoxedStrategy<String> {
    (0u32..=1000).prop_map(|n| n.to_string()).boxed()
}

fn identifier_strategy() -> BoxedStrategy<String> {
    "[a-zA-Z]{1,6}".boxed()
}

/// Joins operands with randomly chosen operators, spacing them the way people type.
fn chain(
    operand: BoxedStrategy<String>,
    ops: &'static [&'static str],
) -> BoxedStrategy<String> {
    let spacing = prop_oneof![Just(""), Just(" "), Just("   ")];
    let rest = prop::collection::vec((spacing, prop::sample::select(ops), operand.clone()), 0..3);
    (operand, rest)
        .prop_map(|(first, rest)| {
            rest.into_iter().fold(first, |acc, (pad, op, next)| {
                // Without spacing `1d` and `d2` would lex as one identifier.
                let pad = if op == "d" { " " } else { pad };
                format!("{}{}{}{}{}", acc, pad, op, pad, next)
            })
        })
        .boxed()
}

fn expression_from(value: BoxedStrategy<String>) -> BoxedStrategy<String> {
    let factor = (value.clone(), prop::option::of(value))
        .prop_map(|(base, exponent)| match exponent {
            Some(exponent) => format!("{}^{}", base, exponent),
            None => base,
        })
        .boxed();
    let term = chain(factor, &["*", "/"]);
    chain(term, &["+", "-", "d"])
}

/// Strings accepted by the grammar, with nested parentheses and uneven spacing.
pub(crate) fn expression_strategy() -> BoxedStrategy<String> {
    let leaf = prop_oneof![number_strategy(), identifier_strategy()];
    let value = leaf
        .prop_recursive(3, 24, 3, |inner| {
            expression_from(inner)
                .prop_map(|e| format!("( {} )", e))
                .boxed()
        })
        .boxed();
    expression_from(value)
}

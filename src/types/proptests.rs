//! Proptest strategies for types and substitutions.

use proptest::prelude::*;

use super::{Subst, TVarName, Type};

// A small pool so generated types share variables often
fn var_name_strategy() -> impl Strategy<Value = TVarName> {
    prop::sample::select(vec!["u0", "u1", "u2", "u3", "a", "b"]).prop_map(TVarName::from)
}

pub(crate) fn arb_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![
        Just(Type::Int),
        Just(Type::Bool),
        var_name_strategy().prop_map(Type::Var),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), inner).prop_map(|(arg, ret)| Type::func(arg, ret))
    })
}

pub(crate) fn arb_subst() -> impl Strategy<Value = Subst> {
    prop::collection::vec((var_name_strategy(), arb_type()), 0..4)
        .prop_map(|pairs| pairs.into_iter().collect())
}

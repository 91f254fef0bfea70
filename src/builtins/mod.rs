//! Built-in bindings.
//!
//! The primitive environment every program starts from: a handful of
//! polymorphic combinators and integer operations.

use crate::infer::TypeEnv;
use crate::types::{TVarName, Type, TypeScheme};

/// Create the initial type environment with built-in bindings.
pub fn primitives() -> TypeEnv {
    let a = || Type::var("a");
    let b = || Type::var("b");
    let quantify = |names: &[&str], ty: Type| {
        TypeScheme::poly(names.iter().copied().map(TVarName::from).collect(), ty)
    };

    TypeEnv::empty().extend_many([
        // identity : forall a. a -> a
        ("identity".to_string(), quantify(&["a"], Type::func(a(), a()))),
        // const : forall a b. a -> b -> a
        (
            "const".to_string(),
            quantify(&["a", "b"], Type::curried([a(), b()], a())),
        ),
        (
            "add".to_string(),
            TypeScheme::mono(Type::curried([Type::Int, Type::Int], Type::Int)),
        ),
        (
            "gte".to_string(),
            TypeScheme::mono(Type::curried([Type::Int, Type::Int], Type::Bool)),
        ),
        // if : forall a. Bool -> a -> a -> a
        (
            "if".to_string(),
            quantify(&["a"], Type::curried([Type::Bool, a(), a()], a())),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        let env = primitives();
        assert_eq!(env.len(), 5);
        for name in ["identity", "const", "add", "gte", "if"] {
            assert!(env.contains(name), "missing primitive {}", name);
        }
    }

    #[test]
    fn test_primitives_are_closed() {
        assert!(primitives().free_vars().is_empty());
    }

    #[test]
    fn test_primitive_schemes() {
        let env = primitives();
        let show = |name: &str| env.lookup(name).unwrap().to_string();

        assert_eq!(show("identity"), "forall a. a -> a");
        assert_eq!(show("const"), "forall a b. a -> b -> a");
        assert_eq!(show("add"), "Int -> Int -> Int");
        assert_eq!(show("gte"), "Int -> Int -> Bool");
        assert_eq!(show("if"), "forall a. Bool -> a -> a -> a");
    }
}

//! hmw: Hindley-Milner type inference (Algorithm W) for a small lambda
//! calculus.
//!
//! The language has integers, booleans, application, abstraction and
//! non-recursive `let`. Inference features:
//!
//! - **Substitutions** composed so that one application always suffices
//! - **Unification** with an occurs check
//! - **Let-polymorphism** through generalization and instantiation of
//!   type schemes (configurable, see [`infer::LetPolicy`])
//! - **A primitive environment** of polymorphic combinators
//!
//! ```
//! use hmw::builtins::primitives;
//! use hmw::infer::type_inference;
//! use hmw::parser::parse_expr;
//!
//! let expr = parse_expr("let id = \\x -> x in id true").unwrap();
//! let ty = type_inference(&primitives(), &expr).unwrap();
//! assert_eq!(ty.to_string(), "Bool");
//! ```

pub mod builtins;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod infer;
pub mod lexer;
pub mod parser;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

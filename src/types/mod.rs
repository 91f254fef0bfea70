//! Type system module for hmw.
//!
//! This module provides the core type definitions, substitution implementation,
//! and pretty-printing for the Algorithm W inference engine.

mod pretty;
mod subst;
mod ty;

#[cfg(test)]
pub(crate) mod proptests;

pub use pretty::PrettyContext;
pub use subst::{Subst, Substitutable};
pub use ty::{TVarName, Type, TypeScheme};

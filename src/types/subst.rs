//! Substitution for type inference.
//!
//! Implements the substitution data structure and the Substitutable trait
//! for applying substitutions to types and type schemes.

use std::collections::{HashMap, HashSet};

use super::ty::{TVarName, Type, TypeScheme};

/// A substitution mapping type variables to types.
///
/// Substitutions are values: every combining operation returns a new one.
/// Two substitutions are only ever combined through `compose`, which keeps
/// the map idempotent for the order in which they were produced, so applying
/// a substitution never needs to iterate to a fixpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subst {
    map: HashMap<TVarName, Type>,
}

impl Subst {
    /// Create an empty substitution.
    pub fn empty() -> Self {
        Subst {
            map: HashMap::new(),
        }
    }

    /// Create a singleton substitution.
    pub fn singleton(var: TVarName, ty: Type) -> Self {
        let mut map = HashMap::new();
        map.insert(var, ty);
        Subst { map }
    }

    /// Check if the substitution is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Get the type for a variable, if present.
    pub fn get(&self, var: &TVarName) -> Option<&Type> {
        self.map.get(var)
    }

    /// Compose two substitutions: (self ∘ other)(x) = self(other(x))
    ///
    /// `self` is applied to every type in the range of `other`, then the
    /// bindings of `self` are added. When both bind the same variable the
    /// entry coming from `other` wins, since `other` is the one applied
    /// first.
    pub fn compose(&self, other: &Subst) -> Subst {
        let mut result: HashMap<TVarName, Type> = other
            .map
            .iter()
            .map(|(var, ty)| (var.clone(), self.apply(ty)))
            .collect();

        for (var, ty) in &self.map {
            result.entry(var.clone()).or_insert_with(|| ty.clone());
        }

        Subst { map: result }
    }

    /// Apply this substitution to a substitutable value.
    pub fn apply<T: Substitutable>(&self, t: &T) -> T {
        t.apply_subst(self)
    }

    /// Create a new substitution with certain variables removed.
    pub fn remove_vars(&self, vars: &[TVarName]) -> Subst {
        let mut map = self.map.clone();
        for var in vars {
            map.remove(var);
        }
        Subst { map }
    }
}

impl FromIterator<(TVarName, Type)> for Subst {
    fn from_iter<T: IntoIterator<Item = (TVarName, Type)>>(iter: T) -> Self {
        Subst {
            map: iter.into_iter().collect(),
        }
    }
}

/// Trait for types that can have substitutions applied.
pub trait Substitutable {
    /// Apply a substitution to this value.
    fn apply_subst(&self, subst: &Subst) -> Self;

    /// Collect all free type variables.
    fn free_vars(&self) -> HashSet<TVarName>;
}

impl Substitutable for Type {
    fn apply_subst(&self, subst: &Subst) -> Self {
        match self {
            Type::Int => Type::Int,
            Type::Bool => Type::Bool,

            // A single lookup: composed substitutions are already resolved
            Type::Var(name) => subst.get(name).cloned().unwrap_or_else(|| self.clone()),

            Type::Func(arg, ret) => Type::Func(
                Box::new(arg.apply_subst(subst)),
                Box::new(ret.apply_subst(subst)),
            ),
        }
    }

    fn free_vars(&self) -> HashSet<TVarName> {
        Type::free_vars(self)
    }
}

impl Substitutable for TypeScheme {
    fn apply_subst(&self, subst: &Subst) -> Self {
        // Quantified variables shadow the substitution
        let filtered_subst = subst.remove_vars(&self.vars);
        TypeScheme {
            vars: self.vars.clone(),
            ty: self.ty.apply_subst(&filtered_subst),
        }
    }

    fn free_vars(&self) -> HashSet<TVarName> {
        TypeScheme::free_vars(self)
    }
}

//! Type environment for name bindings.
//!
//! The type environment maps variable names to their type schemes,
//! supporting scoping through immutable extension.

use std::collections::{HashMap, HashSet};

use crate::types::{Subst, Substitutable, TVarName, TypeScheme};

/// Type environment mapping names to type schemes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEnv {
    bindings: HashMap<String, TypeScheme>,
}

impl TypeEnv {
    /// Create an empty environment.
    pub fn empty() -> Self {
        TypeEnv {
            bindings: HashMap::new(),
        }
    }

    /// Look up a name in the environment.
    pub fn lookup(&self, name: &str) -> Option<&TypeScheme> {
        self.bindings.get(name)
    }

    /// Extend the environment with a new binding, shadowing any previous
    /// binding of the same name. Returns a new environment.
    pub fn extend(&self, name: String, scheme: TypeScheme) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(name, scheme);
        TypeEnv { bindings }
    }

    /// Extend the environment with multiple bindings.
    pub fn extend_many(&self, bindings: impl IntoIterator<Item = (String, TypeScheme)>) -> Self {
        let mut new_bindings = self.bindings.clone();
        new_bindings.extend(bindings);
        TypeEnv {
            bindings: new_bindings,
        }
    }

    /// Check if a name is bound in the environment.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Get all free type variables in the environment.
    pub fn free_vars(&self) -> HashSet<TVarName> {
        let mut vars = HashSet::new();
        for scheme in self.bindings.values() {
            vars.extend(scheme.free_vars());
        }
        vars
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypeScheme)> {
        self.bindings.iter()
    }
}

impl Substitutable for TypeEnv {
    fn apply_subst(&self, subst: &Subst) -> Self {
        if subst.is_empty() {
            return self.clone();
        }
        let bindings = self
            .bindings
            .iter()
            .map(|(k, scheme)| (k.clone(), scheme.apply_subst(subst)))
            .collect();
        TypeEnv { bindings }
    }

    fn free_vars(&self) -> HashSet<TVarName> {
        TypeEnv::free_vars(self)
    }
}

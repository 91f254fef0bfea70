//! Core type definitions for hmw type inference.
//!
//! Types are plain structural values: a type variable, a function type, or
//! one of the two base types. A `TypeScheme` quantifies a type over a list
//! of variable names.

use std::collections::HashSet;

/// Name of a type variable.
///
/// Names are opaque; the inference engine produces `u0`, `u1`, ... and the
/// primitive environment quantifies over `a`, `b`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TVarName(pub String);

impl TVarName {
    pub fn new(name: impl Into<String>) -> Self {
        TVarName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TVarName {
    fn from(s: &str) -> Self {
        TVarName(s.to_string())
    }
}

impl From<String> for TVarName {
    fn from(s: String) -> Self {
        TVarName(s)
    }
}

/// Core type representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Type variable.
    Var(TVarName),
    /// Function type: argument -> result.
    Func(Box<Type>, Box<Type>),
    /// Machine integer.
    Int,
    /// Boolean.
    Bool,
}

impl Type {
    // === Constructors ===

    /// Create a type variable.
    pub fn var(name: impl Into<TVarName>) -> Self {
        Type::Var(name.into())
    }

    /// Create a function type.
    pub fn func(arg: Type, ret: Type) -> Self {
        Type::Func(Box::new(arg), Box::new(ret))
    }

    /// Create a curried function type `p1 -> p2 -> ... -> ret`.
    pub fn curried(params: impl IntoIterator<Item = Type>, ret: Type) -> Self {
        let params: Vec<Type> = params.into_iter().collect();
        params
            .into_iter()
            .rev()
            .fold(ret, |acc, param| Type::func(param, acc))
    }

    // === Predicates ===

    /// Check if this is a type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    /// Check if this is a function type.
    pub fn is_func(&self) -> bool {
        matches!(self, Type::Func(..))
    }

    /// Check if this is a base type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Int | Type::Bool)
    }

    /// Collect all free type variables in this type.
    pub fn free_vars(&self) -> HashSet<TVarName> {
        let mut vars = HashSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut HashSet<TVarName>) {
        match self {
            Type::Int | Type::Bool => {}
            Type::Var(name) => {
                vars.insert(name.clone());
            }
            Type::Func(arg, ret) => {
                arg.collect_free_vars(vars);
                ret.collect_free_vars(vars);
            }
        }
    }

    /// Free type variables in order of first appearance, left to right.
    pub fn free_vars_ordered(&self) -> Vec<TVarName> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        self.collect_ordered(&mut seen, &mut ordered);
        ordered
    }

    fn collect_ordered(&self, seen: &mut HashSet<TVarName>, ordered: &mut Vec<TVarName>) {
        match self {
            Type::Int | Type::Bool => {}
            Type::Var(name) => {
                if seen.insert(name.clone()) {
                    ordered.push(name.clone());
                }
            }
            Type::Func(arg, ret) => {
                arg.collect_ordered(seen, ordered);
                ret.collect_ordered(seen, ordered);
            }
        }
    }

    /// Check whether `var` occurs anywhere in this type.
    pub fn occurs(&self, var: &TVarName) -> bool {
        match self {
            Type::Int | Type::Bool => false,
            Type::Var(name) => name == var,
            Type::Func(arg, ret) => arg.occurs(var) || ret.occurs(var),
        }
    }
}

/// Type scheme: a universally quantified type.
/// Represents ∀α₁...αₙ. τ
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeScheme {
    /// Quantified type variables.
    pub vars: Vec<TVarName>,
    /// The type body.
    pub ty: Type,
}

impl TypeScheme {
    /// Create a monomorphic type scheme (no quantification).
    pub fn mono(ty: Type) -> Self {
        TypeScheme { vars: vec![], ty }
    }

    /// Create a type scheme with the given quantified variables.
    pub fn poly(vars: Vec<TVarName>, ty: Type) -> Self {
        TypeScheme { vars, ty }
    }

    /// Get the underlying type (without looking at quantifiers).
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if this is a monomorphic type (no quantified variables).
    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    /// Collect all free type variables (not including quantified ones).
    pub fn free_vars(&self) -> HashSet<TVarName> {
        let mut vars = self.ty.free_vars();
        for v in &self.vars {
            vars.remove(v);
        }
        vars
    }
}

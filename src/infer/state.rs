//! Inference state management.
//!
//! This module provides the `InferState` struct which tracks:
//! - Fresh variable generation
//! - The options the run was started with
//!
//! It also hosts generalization and instantiation, the two places where
//! fresh names and schemes meet.

use tracing::trace;

use crate::types::{Subst, TVarName, Type, TypeScheme};

use super::env::TypeEnv;

/// How `let` treats the type of its bound expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LetPolicy {
    /// Quantify over the variables not free in the surrounding environment.
    #[default]
    Generalize,
    /// Bind the substituted type with an empty quantifier list. Each use of
    /// the binding shares the same type variables.
    Monomorphic,
}

/// Options for one inference run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InferOptions {
    pub let_policy: LetPolicy,
}

impl InferOptions {
    /// Replace the let policy.
    pub fn with_let_policy(mut self, let_policy: LetPolicy) -> Self {
        self.let_policy = let_policy;
        self
    }
}

/// State for a single inference run.
///
/// Each run owns its counter, so independent runs never share names or
/// interfere with each other.
#[derive(Debug, Default)]
pub struct InferState {
    /// Counter for generating fresh type variables.
    name_source: u32,

    options: InferOptions,
}

impl InferState {
    /// Create a new inference state with default options.
    pub fn new() -> Self {
        Self::with_options(InferOptions::default())
    }

    /// Create a new inference state whose counter starts at `u0`.
    pub fn with_options(options: InferOptions) -> Self {
        InferState {
            name_source: 0,
            options,
        }
    }

    /// Create a state for a run over `env`.
    ///
    /// The counter starts past every `u<n>` mentioned in `env`, bound or
    /// free, so fresh variables never reuse a name the caller already holds.
    pub fn for_env(options: InferOptions, env: &TypeEnv) -> Self {
        let name_source = env
            .iter()
            .flat_map(|(_, scheme)| {
                scheme
                    .vars
                    .iter()
                    .cloned()
                    .chain(scheme.ty.free_vars_ordered())
            })
            .filter_map(|var| fresh_index(var.as_str())?.checked_add(1))
            .max()
            .unwrap_or(0);

        InferState {
            name_source,
            options,
        }
    }

    /// The options this run was started with.
    pub fn options(&self) -> InferOptions {
        self.options
    }

    /// Generate a fresh type variable name: `u0`, `u1`, ...
    pub fn fresh_var(&mut self) -> TVarName {
        let id = self.name_source;
        self.name_source += 1;
        TVarName(format!("u{}", id))
    }

    /// Generate a fresh type variable (as a Type).
    pub fn fresh_type_var(&mut self) -> Type {
        Type::Var(self.fresh_var())
    }

    /// Number of fresh variables handed out so far.
    pub fn next_var_id(&self) -> u32 {
        self.name_source
    }

    /// Instantiate a type scheme with fresh variables.
    pub fn instantiate(&mut self, scheme: &TypeScheme) -> Type {
        if scheme.is_mono() {
            return scheme.ty.clone();
        }

        let subst: Subst = scheme
            .vars
            .iter()
            .map(|var| (var.clone(), self.fresh_type_var()))
            .collect();

        let ty = subst.apply(&scheme.ty);
        trace!(scheme = %scheme, instance = ?ty, "instantiate");
        ty
    }

    /// Generalize a type over the free variables not in the environment.
    ///
    /// Quantified variables are listed in order of first appearance in `ty`.
    pub fn generalize(env: &TypeEnv, ty: &Type) -> TypeScheme {
        let env_free_vars = env.free_vars();

        let gen_vars: Vec<TVarName> = ty
            .free_vars_ordered()
            .into_iter()
            .filter(|v| !env_free_vars.contains(v))
            .collect();

        if gen_vars.is_empty() {
            TypeScheme::mono(ty.clone())
        } else {
            TypeScheme::poly(gen_vars, ty.clone())
        }
    }
}

/// Counter value of a name shaped like the ones `fresh_var` produces.
fn fresh_index(name: &str) -> Option<u32> {
    name.strip_prefix('u')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_vars() {
        let mut state = InferState::new();

        assert_eq!(state.fresh_type_var(), Type::var("u0"));
        assert_eq!(state.fresh_type_var(), Type::var("u1"));
        assert_eq!(state.next_var_id(), 2);
    }

    #[test]
    fn test_runs_do_not_share_counters() {
        let mut first = InferState::new();
        first.fresh_var();
        first.fresh_var();

        let mut second = InferState::new();
        assert_eq!(second.fresh_var(), TVarName::from("u0"));
    }

    #[test]
    fn test_for_env_counts_past_env_names() {
        let env = TypeEnv::empty()
            .extend("x".to_string(), TypeScheme::mono(Type::var("u3")))
            .extend(
                "f".to_string(),
                TypeScheme::poly(vec!["u7".into()], Type::func(Type::var("u7"), Type::var("a"))),
            );
        let mut state = InferState::for_env(InferOptions::default(), &env);

        assert_eq!(state.next_var_id(), 8);
        assert_eq!(state.fresh_var(), TVarName::from("u8"));
    }

    #[test]
    fn test_for_env_ignores_other_names() {
        let env = TypeEnv::empty()
            .extend("x".to_string(), TypeScheme::mono(Type::var("a")))
            .extend("y".to_string(), TypeScheme::mono(Type::var("u")))
            .extend("z".to_string(), TypeScheme::mono(Type::var("ux1")));
        let state = InferState::for_env(InferOptions::default(), &env);

        assert_eq!(state.next_var_id(), 0);
    }

    #[test]
    fn test_instantiate_mono() {
        let mut state = InferState::new();
        let scheme = TypeScheme::mono(Type::var("x"));
        assert_eq!(state.instantiate(&scheme), Type::var("x"));
        assert_eq!(state.next_var_id(), 0);
    }

    #[test]
    fn test_instantiate_poly() {
        let mut state = InferState::new();
        // forall a. a -> b
        let scheme = TypeScheme::poly(vec!["a".into()], Type::func(Type::var("a"), Type::var("b")));

        let ty = state.instantiate(&scheme);
        assert_eq!(ty, Type::func(Type::var("u0"), Type::var("b")));
    }

    #[test]
    fn test_instantiations_are_independent() {
        let mut state = InferState::new();
        let scheme = TypeScheme::poly(
            vec!["a".into(), "b".into()],
            Type::func(Type::var("a"), Type::var("b")),
        );

        let first = state.instantiate(&scheme).free_vars();
        let second = state.instantiate(&scheme).free_vars();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn test_generalize_empty_env() {
        let ty = Type::func(Type::var("u0"), Type::var("u0"));
        let scheme = InferState::generalize(&TypeEnv::empty(), &ty);

        assert_eq!(scheme.vars, vec![TVarName::from("u0")]);
        assert_eq!(scheme.ty, ty);
    }

    #[test]
    fn test_generalize_skips_env_vars() {
        let env = TypeEnv::empty().extend("x".to_string(), TypeScheme::mono(Type::var("u0")));
        let ty = Type::func(Type::var("u0"), Type::var("u1"));
        let scheme = InferState::generalize(&env, &ty);

        assert_eq!(scheme.vars, vec![TVarName::from("u1")]);
    }

    #[test]
    fn test_generalize_closed_type_is_mono() {
        let scheme = InferState::generalize(&TypeEnv::empty(), &Type::Int);
        assert!(scheme.is_mono());
    }

    #[test]
    fn test_options() {
        let state = InferState::with_options(
            InferOptions::default().with_let_policy(LetPolicy::Monomorphic),
        );
        assert_eq!(state.options().let_policy, LetPolicy::Monomorphic);
        assert_eq!(InferOptions::default().let_policy, LetPolicy::Generalize);
    }
}

//! Core type inference algorithm.
//!
//! Implements Algorithm W over the five expression forms. Every case
//! returns the substitution it produced together with the inferred type;
//! callers thread substitutions explicitly, newest composed on top.

use tracing::debug;

use crate::error::TypeError;
use crate::parser::ast::{Exp, Literal};
use crate::types::{Subst, Type, TypeScheme};

use super::env::TypeEnv;
use super::state::{InferOptions, InferState, LetPolicy};
use super::unify::unify;

/// Result type for inference operations.
pub type InferResult<T> = Result<T, TypeError>;

/// Infer the type of `expr` in `env` with default options.
///
/// The returned type has the whole accumulated substitution applied. It is
/// not generalized; see [`InferState::generalize`].
pub fn type_inference(env: &TypeEnv, expr: &Exp) -> InferResult<Type> {
    type_inference_with(InferOptions::default(), env, expr)
}

/// Infer the type of `expr` in `env` in a fresh run with the given options.
pub fn type_inference_with(options: InferOptions, env: &TypeEnv, expr: &Exp) -> InferResult<Type> {
    let mut state = InferState::for_env(options, env);
    let (subst, ty) = state.infer(env, expr)?;
    Ok(subst.apply(&ty))
}

impl InferState {
    /// Infer the type of an expression.
    pub fn infer(&mut self, env: &TypeEnv, expr: &Exp) -> InferResult<(Subst, Type)> {
        match expr {
            Exp::Var(name) => match env.lookup(name) {
                Some(scheme) => Ok((Subst::empty(), self.instantiate(scheme))),
                None => Err(TypeError::UnboundVariable { name: name.clone() }),
            },

            Exp::Lit(lit) => Ok((Subst::empty(), infer_literal(lit))),

            Exp::App(func, arg) => self.infer_app(env, func, arg),

            Exp::Abs(param, body) => {
                // Parameters are never generalized
                let param_ty = self.fresh_type_var();
                let body_env = env.extend(param.clone(), TypeScheme::mono(param_ty.clone()));
                let (s1, body_ty) = self.infer(&body_env, body)?;
                let ty = Type::func(s1.apply(&param_ty), body_ty);
                Ok((s1, ty))
            }

            Exp::Let(name, bound, body) => self.infer_let(env, name, bound, body),
        }
    }

    fn infer_app(&mut self, env: &TypeEnv, func: &Exp, arg: &Exp) -> InferResult<(Subst, Type)> {
        let (s0, func_ty) = self.infer(env, func)?;
        let (s1, arg_ty) = self.infer(&s0.apply(env), arg)?;
        let result_ty = self.fresh_type_var();

        let s2 = unify(&s1.apply(&func_ty), &Type::func(arg_ty, result_ty.clone()))?;

        let subst = s2.compose(&s1.compose(&s0));
        let ty = s2.apply(&result_ty);
        Ok((subst, ty))
    }

    fn infer_let(
        &mut self,
        env: &TypeEnv,
        name: &str,
        bound: &Exp,
        body: &Exp,
    ) -> InferResult<(Subst, Type)> {
        let (s1, bound_ty) = self.infer(env, bound)?;
        let bound_env = s1.apply(env);
        let bound_ty = s1.apply(&bound_ty);

        let scheme = match self.options().let_policy {
            LetPolicy::Generalize => InferState::generalize(&bound_env, &bound_ty),
            LetPolicy::Monomorphic => TypeScheme::mono(bound_ty),
        };
        debug!(name, scheme = %scheme, "let binding");

        let body_env = bound_env.extend(name.to_string(), scheme);
        let (s2, body_ty) = self.infer(&body_env, body)?;

        Ok((s2.compose(&s1), body_ty))
    }
}

fn infer_literal(lit: &Literal) -> Type {
    match lit {
        Literal::Int(_) => Type::Int,
        Literal::Bool(_) => Type::Bool,
    }
}

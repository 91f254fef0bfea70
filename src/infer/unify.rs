//! Unification algorithm for type inference.
//!
//! Computes the most general substitution that makes two types equal,
//! with an occurs check to rule out infinite types.

use tracing::trace;

use crate::error::TypeError;
use crate::types::{Subst, TVarName, Type};

/// Result type for unification.
pub type UnifyResult<T> = Result<T, TypeError>;

/// Unify two types, returning the most general unifier.
pub fn unify(t1: &Type, t2: &Type) -> UnifyResult<Subst> {
    match (t1, t2) {
        // Primitives
        (Type::Int, Type::Int) | (Type::Bool, Type::Bool) => Ok(Subst::empty()),

        // A variable binds to anything, on either side
        (Type::Var(var), t) | (t, Type::Var(var)) => var_bind(var, t),

        (Type::Func(arg1, ret1), Type::Func(arg2, ret2)) => {
            let s1 = unify(arg1, arg2)?;
            // Results are unified under what the arguments already solved
            let s2 = unify(&s1.apply(ret1.as_ref()), &s1.apply(ret2.as_ref()))?;
            Ok(s2.compose(&s1))
        }

        // Mismatch
        _ => Err(TypeError::UnificationMismatch {
            t1: t1.clone(),
            t2: t2.clone(),
        }),
    }
}

/// Bind a type variable to a type (with occurs check).
fn var_bind(var: &TVarName, ty: &Type) -> UnifyResult<Subst> {
    // Don't bind to itself
    if let Type::Var(other) = ty {
        if other == var {
            return Ok(Subst::empty());
        }
    }

    if ty.occurs(var) {
        return Err(TypeError::OccursCheck {
            var: var.clone(),
            ty: ty.clone(),
        });
    }

    trace!(var = %var, ty = ?ty, "bind");
    Ok(Subst::singleton(var.clone(), ty.clone()))
}

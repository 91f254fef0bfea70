//! Top-level driver: checks a program statement by statement.
//!
//! Each statement is inferred in its own run and its type generalized
//! against the environment built so far. Definitions extend that
//! environment, so later statements can use them polymorphically.

use std::fmt;

use tracing::debug;

use crate::builtins::primitives;
use crate::error::Result;
use crate::infer::{InferOptions, InferState, TypeEnv};
use crate::parser::ast::{Program, Stmt};
use crate::parser::parse_program;
use crate::types::TypeScheme;

/// The inferred scheme of one top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    /// Name of the definition, `None` for a bare expression.
    pub name: Option<String>,
    pub scheme: TypeScheme,
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name.as_deref().unwrap_or("-"), self.scheme)
    }
}

/// Check every statement of `program`, starting from `env`.
///
/// Stops at the first type error, located at the offending statement.
pub fn check_program(
    options: InferOptions,
    env: &TypeEnv,
    program: &Program,
) -> Result<Vec<Judgement>> {
    let mut env = env.clone();
    let mut judgements = Vec::with_capacity(program.statements.len());

    for stmt in &program.statements {
        let (name, expr) = match stmt {
            Stmt::Let { name, value, .. } => (Some(name), value),
            Stmt::Expr { expression, .. } => (None, expression),
        };

        // A fresh run per statement, counting past the names in `env`
        let mut state = InferState::for_env(options, &env);
        let (subst, ty) = state
            .infer(&env, expr)
            .map_err(|e| e.at(stmt.span()))?;
        let ty = subst.apply(&ty);
        let scheme = InferState::generalize(&env, &ty);
        debug!(name = name.map(String::as_str).unwrap_or("-"), scheme = %scheme, "checked statement");

        if let Some(name) = name {
            env = env.extend(name.clone(), scheme.clone());
        }
        judgements.push(Judgement {
            name: name.cloned(),
            scheme,
        });
    }

    Ok(judgements)
}

/// Parse `source` and check it against the primitive environment.
pub fn check_source(options: InferOptions, source: &str) -> Result<Vec<Judgement>> {
    let program = parse_program(source)?;
    check_program(options, &primitives(), &program)
}

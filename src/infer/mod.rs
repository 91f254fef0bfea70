//! Type inference module for hmw.
//!
//! This module provides the core type inference implementation:
//! - `state`: Inference state with fresh variable generation, generalization
//!   and instantiation
//! - `env`: Type environment for variable bindings
//! - `unify`: Unification algorithm with occurs check
//! - `infer`: Algorithm W over expressions

mod env;
mod infer;
mod state;
mod unify;

pub use env::TypeEnv;
pub use infer::{type_inference, type_inference_with, InferResult};
pub use state::{InferOptions, InferState, LetPolicy};
pub use unify::{unify, UnifyResult};

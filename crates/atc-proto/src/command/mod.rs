//! Command vocabulary: kinds, registry, validators, and parsers.

mod invocation;
mod kind;
pub mod parse;
mod registry;
pub mod validate;
mod value;

pub use invocation::CommandInvocation;
pub use kind::CommandKind;
pub use registry::{CommandDefinition, Registry, BUILTIN_DEFINITIONS};
pub use validate::Arity;
pub use value::{Args, TurnDirection, Value};

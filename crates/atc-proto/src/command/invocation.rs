//! A single command invocation within a line.

use smallvec::SmallVec;

use super::kind::CommandKind;
use super::value::{Args, Value};
use crate::error::CommandError;

/// One recognised command name followed by the tokens typed after it.
///
/// Created empty when the command token is seen, filled with argument tokens
/// until the next command token, then validated and parsed once.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandInvocation {
    kind: CommandKind,
    raw_args: SmallVec<[String; 3]>,
    typed_args: Option<Args>,
}

impl CommandInvocation {
    pub(crate) fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            raw_args: SmallVec::new(),
            typed_args: None,
        }
    }

    pub(crate) fn push_arg(&mut self, token: impl Into<String>) {
        debug_assert!(self.typed_args.is_none(), "invocation already parsed");
        self.raw_args.push(token.into());
    }

    /// Validate the raw arguments and, if they pass, parse them.
    pub(crate) fn resolve(&mut self) -> Result<(), CommandError> {
        self.kind.validate(self.raw_args.as_slice())?;
        self.typed_args = Some(self.kind.parse(self.raw_args.as_slice())?);
        Ok(())
    }

    /// The resolved command.
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Canonical command name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Argument tokens in the order typed.
    pub fn raw_args(&self) -> &[String] {
        &self.raw_args
    }

    /// Typed arguments, once parsed.
    pub fn typed_args(&self) -> Option<&[Value]> {
        self.typed_args.as_deref()
    }

    /// Typed arguments, or an empty slice before parsing.
    pub fn args(&self) -> &[Value] {
        self.typed_args().unwrap_or(&[])
    }

    /// Whether validation and parsing have succeeded.
    pub fn is_parsed(&self) -> bool {
        self.typed_args.is_some()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CommandInvocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CommandInvocation", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("args", self.args())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut invocation = CommandInvocation::new(CommandKind::Heading);
        assert!(!invocation.is_parsed());
        assert!(invocation.args().is_empty());

        invocation.push_arg("180");
        assert_eq!(invocation.raw_args(), ["180"]);

        invocation.resolve().unwrap();
        assert!(invocation.is_parsed());
        assert_eq!(
            invocation.args(),
            &[Value::Null, Value::Int(180), Value::Bool(false)]
        );
    }

    #[test]
    fn test_failed_validation_leaves_args_unparsed() {
        let mut invocation = CommandInvocation::new(CommandKind::Takeoff);
        invocation.push_arg("threeve");
        assert!(invocation.resolve().is_err());
        assert!(invocation.typed_args().is_none());
    }
}

//! Running the pipeline and assembling the parse result.
//!
//! ```
//! use atc_proto::{CommandParser, ParsedLine, Value};
//!
//! let parser = CommandParser::builtin().expect("builtin registry");
//! match parser.parse("AAL777 fh 180").expect("valid line") {
//!     ParsedLine::Transmit(line) => {
//!         assert_eq!(line.callsign, "AAL777");
//!         assert_eq!(line.commands[0].name(), "heading");
//!         assert_eq!(line.commands[0].args()[1], Value::Int(180));
//!     }
//!     ParsedLine::System(_) => unreachable!(),
//! }
//! ```

use std::fmt;

use crate::command::{Args, CommandInvocation, CommandKind, Registry, Value};
use crate::error::{CommandError, InvocationError, ParseError, RegistryError, Result};
use crate::line::{self, Classified};
use crate::transmit;

/// How invalid invocations in a transmit line are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorPolicy {
    /// Stop at the first invalid invocation and report only it.
    #[default]
    FirstError,
    /// Validate every invocation and report all failures together.
    CollectAll,
}

/// A validated system command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemCommand {
    /// The command.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    pub command: CommandKind,
    /// Typed arguments.
    pub args: Args,
}

/// A validated transmission to one aircraft.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransmitLine {
    /// The addressed aircraft, as typed. Not checked against any roster.
    pub callsign: String,
    /// Parsed commands, in the order they must be applied.
    pub commands: Vec<CommandInvocation>,
}

impl TransmitLine {
    /// Whether at least one command was recognised.
    ///
    /// A line with no recognised command should be reported as not understood.
    pub fn is_understood(&self) -> bool {
        !self.commands.is_empty()
    }
}

/// The outcome of parsing one line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ParsedLine {
    /// An application-level command.
    System(SystemCommand),
    /// Commands for one aircraft.
    Transmit(TransmitLine),
}

impl ParsedLine {
    /// Short label for logging and metrics.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ParsedLine::System(_) => "system",
            ParsedLine::Transmit(_) => "transmit",
        }
    }

    /// Canonical names of every command in the line.
    pub fn command_names(&self) -> Vec<&'static str> {
        match self {
            ParsedLine::System(cmd) => vec![cmd.command.name()],
            ParsedLine::Transmit(line) => line.commands.iter().map(|c| c.name()).collect(),
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_str("]")
}

impl fmt::Display for ParsedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLine::System(cmd) => {
                write!(f, "{} ", cmd.command)?;
                write_args(f, &cmd.args)
            }
            ParsedLine::Transmit(line) => {
                write!(f, "{}:", line.callsign)?;
                for (i, command) in line.commands.iter().enumerate() {
                    f.write_str(if i == 0 { " " } else { "; " })?;
                    write!(f, "{} ", command.name())?;
                    write_args(f, command.args())?;
                }
                Ok(())
            }
        }
    }
}

/// Turns raw lines into [`ParsedLine`]s against a registry.
#[derive(Clone, Copy, Debug)]
pub struct CommandParser<'r> {
    registry: &'r Registry,
    policy: ErrorPolicy,
}

impl CommandParser<'static> {
    /// A parser over the built-in vocabulary.
    pub fn builtin() -> std::result::Result<Self, RegistryError> {
        Registry::builtin().map(CommandParser::new)
    }
}

impl<'r> CommandParser<'r> {
    /// Create a parser using the default [`ErrorPolicy`].
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            policy: ErrorPolicy::default(),
        }
    }

    /// Use a different error policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// The registry commands are resolved against.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Parse one line.
    #[must_use = "parse result should be handled"]
    pub fn parse(&self, input: &str) -> Result<ParsedLine> {
        match line::classify(self.registry, input).ok_or(ParseError::EmptyLine)? {
            Classified::System { command, argument } => self.parse_system(command, argument),
            Classified::Transmit { callsign, tokens } => self.parse_transmit(callsign, &tokens),
        }
    }

    fn parse_system(&self, command: CommandKind, argument: Option<String>) -> Result<ParsedLine> {
        let raw: Vec<String> = argument.into_iter().collect();

        let args = command
            .validate(raw.as_slice())
            .and_then(|()| command.parse(raw.as_slice()))
            .map_err(|source| InvocationError {
                index: 0,
                command,
                source,
            })?;

        Ok(ParsedLine::System(SystemCommand { command, args }))
    }

    fn parse_transmit(&self, callsign: &str, tokens: &[String]) -> Result<ParsedLine> {
        let mut commands = transmit::build_command_list(self.registry, tokens);
        let mut errors = Vec::new();

        for (index, invocation) in commands.iter_mut().enumerate() {
            let Err(source) = resolve_transmitted(invocation) else {
                continue;
            };
            tracing::debug!(
                callsign,
                command = invocation.name(),
                index,
                error = %source,
                "invalid command invocation"
            );

            let err = InvocationError {
                index,
                command: invocation.kind(),
                source,
            };
            match self.policy {
                ErrorPolicy::FirstError => return Err(err.into()),
                ErrorPolicy::CollectAll => errors.push(err),
            }
        }

        match errors.len() {
            0 => Ok(ParsedLine::Transmit(TransmitLine {
                callsign: callsign.to_owned(),
                commands,
            })),
            1 => Err(errors.swap_remove(0).into()),
            _ => Err(ParseError::Multiple(errors)),
        }
    }
}

/// System commands never run as part of a transmission.
fn resolve_transmitted(invocation: &mut CommandInvocation) -> std::result::Result<(), CommandError> {
    if invocation.kind().is_system() {
        return Err(CommandError::SystemCommandInTransmit(invocation.kind()));
    }
    invocation.resolve()
}

//! Error types for the command language.
//!
//! Every error here is "rejected input", never a system fault. The
//! [`CommandError`] messages are shown verbatim to the operator, so their
//! text is part of the public contract.

use thiserror::Error;

use crate::command::{Arity, CommandKind};

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Rejections produced while validating or parsing a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CommandError {
    /// Wrong number of arguments for the command.
    #[error("{}", .0.message())]
    Arity(Arity),

    /// Altitude argument was not numeric.
    #[error("Altitude must be a number")]
    AltitudeNotNumber,

    /// Altitude argument was too large to represent in feet.
    #[error("Altitude is out of range")]
    AltitudeOutOfRange,

    /// Second altitude argument was not an expedite keyword.
    #[error("Altitude accepts only \"expedite\" or \"x\" as a second argument")]
    InvalidExpedite,

    /// Heading argument was not numeric.
    #[error("Heading must be a number")]
    HeadingNotNumber,

    /// Heading argument had more than three digits.
    #[error("Heading must be between one and three digits")]
    HeadingTooLong,

    /// First heading argument was not a turn direction.
    #[error(
        "Expected one of 'left / l' or 'right / r' as the first argument when passed two arguments"
    )]
    InvalidDirection,

    /// Transponder code was not four octal digits.
    #[error("Invalid transponder code. Expected four digits between 0 and 7")]
    InvalidSquawk,

    /// Timewarp argument was not numeric.
    #[error("Timewarp must be a number")]
    TimewarpNotNumber,

    /// Speed argument was not numeric.
    #[error("Speed must be a number")]
    SpeedNotNumber,

    /// A three-digit hold course outside 000-360.
    #[error("Hold radial must be between 000 and 360")]
    InvalidHoldRadial,

    /// Two hold arguments filled the same slot.
    #[error("Hold accepts only one {0}")]
    DuplicateHoldArgument(&'static str),

    /// A system command appeared inside a transmit chain.
    #[error("'{}' is a system command and cannot be transmitted", .0.name())]
    SystemCommandInTransmit(CommandKind),
}

impl CommandError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Arity(_) => "arity",
            Self::AltitudeNotNumber => "altitude_not_number",
            Self::AltitudeOutOfRange => "altitude_out_of_range",
            Self::InvalidExpedite => "invalid_expedite",
            Self::HeadingNotNumber => "heading_not_number",
            Self::HeadingTooLong => "heading_too_long",
            Self::InvalidDirection => "invalid_direction",
            Self::InvalidSquawk => "invalid_squawk",
            Self::TimewarpNotNumber => "timewarp_not_number",
            Self::SpeedNotNumber => "speed_not_number",
            Self::InvalidHoldRadial => "invalid_hold_radial",
            Self::DuplicateHoldArgument(_) => "duplicate_hold_argument",
            Self::SystemCommandInTransmit(_) => "system_in_transmit",
        }
    }
}

/// A [`CommandError`] tied to the invocation that produced it.
///
/// Displays exactly as the underlying operator message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source}")]
pub struct InvocationError {
    /// Position of the invocation within its line (0 for system commands).
    pub index: usize,
    /// The command whose arguments were rejected.
    pub command: CommandKind,
    /// The rejection itself.
    #[source]
    pub source: CommandError,
}

/// Errors returned when a whole line cannot be turned into a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line held no tokens at all.
    #[error("empty command line")]
    EmptyLine,

    /// One invocation failed validation.
    #[error(transparent)]
    Invalid(#[from] InvocationError),

    /// Several invocations failed validation (collect-all policy only).
    #[error("{}", join_messages(.0))]
    Multiple(Vec<InvocationError>),
}

impl ParseError {
    /// Get a static error code string for metrics labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyLine => "empty_line",
            Self::Invalid(err) => err.source.error_code(),
            Self::Multiple(_) => "multiple",
        }
    }

    /// All invocation errors carried by this error, in line order.
    pub fn invocation_errors(&self) -> &[InvocationError] {
        match self {
            Self::EmptyLine => &[],
            Self::Invalid(err) => std::slice::from_ref(err),
            Self::Multiple(errs) => errs,
        }
    }
}

fn join_messages(errors: &[InvocationError]) -> String {
    errors
        .iter()
        .map(|e| e.source.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Startup invariants violated while building a command registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two commands claim the same alias.
    #[error("alias '{alias}' is claimed by both {first} and {second}")]
    DuplicateAlias {
        /// The contested alias.
        alias: String,
        /// Command that registered the alias first.
        first: &'static str,
        /// Command that tried to register it again.
        second: &'static str,
    },

    /// The same command was defined twice.
    #[error("command {0} is defined more than once")]
    DuplicateCommand(&'static str),

    /// An alias is empty, contains whitespace, or is not lowercase.
    #[error("alias '{alias}' for {command} must be a single lowercase token")]
    InvalidAlias {
        /// The offending alias.
        alias: String,
        /// Command it was registered for.
        command: &'static str,
    },
}

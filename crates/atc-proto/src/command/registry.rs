//! Command registry and alias resolution.
//!
//! The registry is built once, checked for alias collisions, and read-only
//! afterwards. Lookups go through a precomputed alias map.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::kind::CommandKind;
use super::value::Args;
use crate::error::{CommandError, RegistryError};

/// A root command together with the tokens that name it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandDefinition {
    /// The command being defined.
    pub kind: CommandKind,
    /// Extra aliases. The lowercased canonical name is always an alias too.
    pub aliases: &'static [&'static str],
}

impl CommandDefinition {
    /// Define a command with the given aliases.
    pub const fn new(kind: CommandKind, aliases: &'static [&'static str]) -> Self {
        Self { kind, aliases }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether this is a system command.
    pub fn is_system(&self) -> bool {
        self.kind.is_system()
    }

    /// Run this command's validator.
    pub fn validate<S: AsRef<str>>(&self, args: &[S]) -> Result<(), CommandError> {
        self.kind.validate(args)
    }

    /// Run this command's parser. Only meaningful after [`Self::validate`] passed.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Args, CommandError> {
        self.kind.parse(args)
    }

    /// All tokens resolving to this command: the lowercased name first, then
    /// the declared aliases.
    pub fn all_aliases(&self) -> Vec<String> {
        let canonical = self.kind.name().to_ascii_lowercase();
        let mut aliases = vec![canonical.clone()];
        aliases.extend(
            self.aliases
                .iter()
                .filter(|a| **a != canonical)
                .map(|a| (*a).to_owned()),
        );
        aliases
    }
}

/// The built-in command vocabulary.
pub const BUILTIN_DEFINITIONS: &[CommandDefinition] = &[
    // System
    CommandDefinition::new(CommandKind::Airport, &["airport"]),
    CommandDefinition::new(CommandKind::Clear, &["clear"]),
    CommandDefinition::new(CommandKind::Pause, &["pause"]),
    CommandDefinition::new(CommandKind::Timewarp, &["timewarp", "tw"]),
    CommandDefinition::new(CommandKind::Tutorial, &["tutorial"]),
    CommandDefinition::new(CommandKind::Transmit, &["transmit"]),
    // Transmit
    CommandDefinition::new(CommandKind::Abort, &["abort"]),
    CommandDefinition::new(
        CommandKind::Altitude,
        &["a", "altitude", "c", "climb", "d", "descend"],
    ),
    CommandDefinition::new(CommandKind::ClearedAsFiled, &["caf"]),
    CommandDefinition::new(CommandKind::ClimbViaSid, &["cvs"]),
    CommandDefinition::new(CommandKind::Cross, &["cross", "cr"]),
    CommandDefinition::new(CommandKind::Delete, &["del", "delete", "kill"]),
    CommandDefinition::new(CommandKind::DescendViaStar, &["dvs"]),
    CommandDefinition::new(CommandKind::Direct, &["dct", "direct", "pd"]),
    CommandDefinition::new(CommandKind::Fix, &["f", "fix", "track"]),
    CommandDefinition::new(CommandKind::FlyPresentHeading, &["fph"]),
    CommandDefinition::new(CommandKind::Heading, &["fh", "h", "heading", "t", "turn"]),
    CommandDefinition::new(CommandKind::Hold, &["hold"]),
    CommandDefinition::new(CommandKind::Land, &["i", "ils", "land"]),
    CommandDefinition::new(CommandKind::MoveDataBlock, &["`"]),
    CommandDefinition::new(CommandKind::Reroute, &["reroute", "rr"]),
    CommandDefinition::new(CommandKind::Route, &["route"]),
    CommandDefinition::new(CommandKind::SayAltitude, &["sa"]),
    CommandDefinition::new(CommandKind::SayAssignedAltitude, &["saa"]),
    CommandDefinition::new(CommandKind::SayHeading, &["sh"]),
    CommandDefinition::new(CommandKind::SayAssignedHeading, &["sah"]),
    CommandDefinition::new(CommandKind::SayIndicatedAirspeed, &["si"]),
    CommandDefinition::new(CommandKind::SayAssignedSpeed, &["sas"]),
    CommandDefinition::new(CommandKind::SayRoute, &["sr"]),
    CommandDefinition::new(CommandKind::Sid, &["sid"]),
    CommandDefinition::new(CommandKind::Speed, &["sp", "speed", "slow", "slowdown"]),
    CommandDefinition::new(CommandKind::Squawk, &["sq", "squawk"]),
    CommandDefinition::new(CommandKind::Star, &["star"]),
    CommandDefinition::new(CommandKind::Takeoff, &["/", "cto", "to", "takeoff"]),
    CommandDefinition::new(CommandKind::Taxi, &["taxi", "wait", "w"]),
];

static BUILTIN: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();

/// Immutable table of command definitions keyed by alias.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<CommandDefinition>,
    aliases: HashMap<String, CommandKind>,
}

impl Registry {
    /// Build a registry, rejecting duplicate commands and shared aliases.
    pub fn new<I>(definitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CommandDefinition>,
    {
        let mut registered: Vec<CommandDefinition> = Vec::new();
        let mut aliases: HashMap<String, CommandKind> = HashMap::new();

        for definition in definitions {
            if registered.iter().any(|d| d.kind == definition.kind) {
                return Err(RegistryError::DuplicateCommand(definition.name()));
            }

            for alias in definition.all_aliases() {
                if alias.is_empty()
                    || alias.chars().any(char::is_whitespace)
                    || alias.to_lowercase() != alias
                {
                    return Err(RegistryError::InvalidAlias {
                        alias,
                        command: definition.name(),
                    });
                }

                if let Some(first) = aliases.get(&alias) {
                    return Err(RegistryError::DuplicateAlias {
                        alias,
                        first: first.name(),
                        second: definition.name(),
                    });
                }
                aliases.insert(alias, definition.kind);
            }

            registered.push(definition);
        }

        tracing::debug!(
            commands = registered.len(),
            aliases = aliases.len(),
            "command registry built"
        );

        Ok(Self {
            definitions: registered,
            aliases,
        })
    }

    /// The process-wide registry of [`BUILTIN_DEFINITIONS`], built on first use.
    pub fn builtin() -> Result<&'static Registry, RegistryError> {
        BUILTIN
            .get_or_init(|| Registry::new(BUILTIN_DEFINITIONS.iter().copied()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Resolve a lowercase token to the command it names.
    #[inline]
    pub fn resolve(&self, token: &str) -> Option<CommandKind> {
        self.aliases.get(token).copied()
    }

    /// Look up the definition of a command.
    pub fn definition(&self, kind: CommandKind) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    /// Iterate definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    /// Every alias with the command it resolves to, sorted by alias.
    pub fn aliases(&self) -> Vec<(&str, CommandKind)> {
        let mut aliases: Vec<_> = self
            .aliases
            .iter()
            .map(|(alias, kind)| (alias.as_str(), *kind))
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

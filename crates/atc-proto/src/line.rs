//! Tokenizing and classifying a raw input line.
//!
//! A line is classified exactly once, from its first token, before any
//! invocation is built.

use crate::command::{CommandKind, Registry};

/// Shape of a line, decided from its first token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified<'a> {
    /// An instruction to the application itself.
    System {
        /// The system command.
        command: CommandKind,
        /// Everything after the command token, as one raw argument.
        argument: Option<String>,
    },
    /// Instructions addressed to one aircraft.
    Transmit {
        /// The first token, exactly as typed.
        callsign: &'a str,
        /// Remaining tokens, lowercased.
        tokens: Vec<String>,
    },
}

/// Lowercase a line and split it on runs of whitespace.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// Classify a line, or `None` if it holds no tokens.
///
/// The reserved `transmit` token is a system command name but always starts
/// a transmit line.
pub fn classify<'a>(registry: &Registry, input: &'a str) -> Option<Classified<'a>> {
    let callsign = input.split_whitespace().next()?;
    let mut tokens = tokenize(input).into_iter();
    let first = tokens.next()?;
    let tokens: Vec<String> = tokens.collect();

    match registry.resolve(&first) {
        Some(command) if command.is_system() && command != CommandKind::Transmit => {
            let argument = if tokens.is_empty() {
                None
            } else {
                Some(tokens.join(" "))
            };
            Some(Classified::System { command, argument })
        }
        _ => Some(Classified::Transmit { callsign, tokens }),
    }
}

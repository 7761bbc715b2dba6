//! Grouping transmit tokens into command invocations.

use crate::command::{CommandInvocation, Registry};

/// Group tokens into invocations, left to right.
///
/// A token naming a command always starts a new invocation, even where an
/// argument was intended: a fix spelled like a command alias cannot be
/// expressed. Tokens before the first command are dropped.
pub fn build_command_list<I, S>(registry: &Registry, tokens: I) -> Vec<CommandInvocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = Vec::new();
    let mut current: Option<CommandInvocation> = None;

    for token in tokens {
        let token = token.as_ref();
        match registry.resolve(token) {
            Some(kind) => {
                if let Some(done) = current.replace(CommandInvocation::new(kind)) {
                    commands.push(done);
                }
            }
            None => match current.as_mut() {
                Some(invocation) => invocation.push_arg(token),
                None => tracing::debug!(token, "discarding token before first command"),
            },
        }
    }

    commands.extend(current);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandKind;

    fn build(tokens: &[&str]) -> Vec<(CommandKind, Vec<String>)> {
        build_command_list(Registry::builtin().unwrap(), tokens)
            .into_iter()
            .map(|c| (c.kind(), c.raw_args().to_vec()))
            .collect()
    }

    #[test]
    fn test_groups_arguments() {
        assert_eq!(
            build(&["fh", "180", "i", "28r"]),
            vec![
                (CommandKind::Heading, vec!["180".to_string()]),
                (CommandKind::Land, vec!["28r".to_string()]),
            ]
        );
    }

    #[test]
    fn test_chained_zero_argument_commands() {
        let kinds: Vec<_> = build(&["caf", "cvs", "to"]).into_iter().map(|c| c.0).collect();
        assert_eq!(
            kinds,
            [
                CommandKind::ClearedAsFiled,
                CommandKind::ClimbViaSid,
                CommandKind::Takeoff
            ]
        );
    }

    #[test]
    fn test_leading_arguments_are_discarded() {
        assert_eq!(
            build(&["please", "fh", "180"]),
            vec![(CommandKind::Heading, vec!["180".to_string()])]
        );
        assert!(build(&["hello", "world"]).is_empty());
    }

    #[test]
    fn test_alias_collision_starts_new_command() {
        // A fix named "to" is read as takeoff.
        assert_eq!(
            build(&["direct", "to"]),
            vec![
                (CommandKind::Direct, vec![]),
                (CommandKind::Takeoff, vec![]),
            ]
        );
    }

    #[test]
    fn test_repeated_command() {
        assert_eq!(build(&["fh", "090", "fh", "180"]).len(), 2);
    }
}

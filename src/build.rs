//! Command sequence construction
//!
//! A template is a pure mapping from a position in the sequence to the
//! command at that position. [`build`] drives a template over `0..count` and
//! collects the results in order. Templates hold no mutable state, so
//! building is restartable: the same count and template always produce the
//! same sequence.

use crate::command::{Command, ExecCommand};
use crate::sequence::CommandSequence;
use log::debug;

/// A pure index-to-command mapping.
///
/// Implementations must be side-effect free: `command(i)` may depend only on
/// `i` and the template's own immutable configuration.
pub trait CommandTemplate {
    fn command(&self, index: usize) -> Command;
}

/// A template that yields the same literal command at every index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTemplate(Command);

impl FixedTemplate {
    pub fn new(command: impl Into<Command>) -> Self {
        FixedTemplate(command.into())
    }
}

impl CommandTemplate for FixedTemplate {
    fn command(&self, _index: usize) -> Command {
        self.0.clone()
    }
}

/// Exec-form commands ignore the index as well; every position renders the
/// same `exec (...)` string.
impl CommandTemplate for ExecCommand {
    fn command(&self, _index: usize) -> Command {
        self.render()
    }
}

impl<F> CommandTemplate for F
where
    F: Fn(usize) -> Command,
{
    fn command(&self, index: usize) -> Command {
        self(index)
    }
}

/// Builds an ordered sequence of `count` commands, where the `i`-th element
/// is `template.command(i)`.
///
/// A count of zero yields an empty sequence. Counts are unsigned, so a
/// negative count is unrepresentable here; user-supplied counts from batch
/// definition files are validated before they reach this function.
///
/// # Examples
///
/// ```
/// use cmdbatch::build::{build, FixedTemplate};
///
/// let commands = build(10, &FixedTemplate::new("exec (Dummy -w dummyparam)"));
/// assert_eq!(commands.len(), 10);
/// assert_eq!(commands[9].as_str(), "exec (Dummy -w dummyparam)");
/// ```
pub fn build<T: CommandTemplate + ?Sized>(count: usize, template: &T) -> CommandSequence {
    debug!("building command sequence of {} commands", count);
    let mut sequence = CommandSequence::with_capacity(count);
    for index in 0..count {
        sequence.push(template.command(index));
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_length_matches_count() {
        for count in [0usize, 1, 7, 10, 100] {
            let sequence = build(count, &FixedTemplate::new("noop"));
            assert_eq!(sequence.len(), count);
        }
    }

    #[test]
    fn test_build_zero_is_empty() {
        let sequence = build(0, &FixedTemplate::new("exec (Dummy -w dummyparam)"));
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_build_ten_dummy_commands() {
        let sequence = build(10, &FixedTemplate::new("exec (Dummy -w dummyparam)"));
        assert_eq!(sequence.len(), 10);
        for command in &sequence {
            assert_eq!(command.as_str(), "exec (Dummy -w dummyparam)");
        }
    }

    #[test]
    fn test_build_indexed_closure() {
        let sequence = build(4, &|i: usize| Command::new(format!("step {}", i)));
        assert_eq!(sequence[0].as_str(), "step 0");
        assert_eq!(sequence[3].as_str(), "step 3");
    }

    #[test]
    fn test_build_is_restartable() {
        let template = ExecCommand::new("Dummy").arg("w", "dummyparam");
        let first = build(10, &template);
        let second = build(10, &template);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_preserves_iteration_order() {
        let sequence = build(5, &|i: usize| Command::new(i.to_string()));
        let texts: Vec<&str> = sequence.iter().map(|c| c.as_str()).collect();
        assert_eq!(texts, ["0", "1", "2", "3", "4"]);
    }
}

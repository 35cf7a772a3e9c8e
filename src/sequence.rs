use crate::command::Command;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, insertion-order-significant collection of commands.
///
/// The sequence is exclusively owned by whoever builds it until it is moved
/// to the host side, either as a value or as the plain `Vec` behind
/// [`CommandSequence::into_inner`]. Ordering is exactly append order; nothing
/// is reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandSequence(Vec<Command>);

impl CommandSequence {
    pub fn new() -> Self {
        CommandSequence(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CommandSequence(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, command: Command) {
        self.0.push(command);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.0.iter()
    }

    /// Hands the commands off to the caller, which becomes the sole owner.
    pub fn into_inner(self) -> Vec<Command> {
        self.0
    }
}

impl Index<usize> for CommandSequence {
    type Output = Command;

    fn index(&self, index: usize) -> &Command {
        &self.0[index]
    }
}

impl IntoIterator for CommandSequence {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Command> for CommandSequence {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        CommandSequence(iter.into_iter().collect())
    }
}

impl Extend<Command> for CommandSequence {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_append_order() {
        let mut sequence = CommandSequence::new();
        sequence.push(Command::new("first"));
        sequence.push(Command::new("second"));
        sequence.push(Command::new("first"));

        let commands = sequence.into_inner();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].as_str(), "first");
        assert_eq!(commands[1].as_str(), "second");
        assert_eq!(commands[2].as_str(), "first");
    }

    #[test]
    fn test_empty_sequence() {
        let sequence = CommandSequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert!(sequence.get(0).is_none());
    }

    #[test]
    fn test_collect_from_iterator() {
        let sequence: CommandSequence =
            (0..3).map(|i| Command::new(format!("step {}", i))).collect();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence[1].as_str(), "step 1");
    }
}

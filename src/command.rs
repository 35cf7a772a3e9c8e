//! Command strings destined for an external console host
//!
//! A command is an opaque textual instruction. Its grammar belongs entirely
//! to the host that eventually executes it; this crate only produces such
//! strings and never interprets them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single textual instruction for an external console host.
///
/// The text is uninterpreted. Two commands are equal when their text is
/// equal; a command carries no identity beyond its position in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Command(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Command(text)
    }
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Command(text.to_string())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A flag/value pair passed to an exec-form command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecArg {
    pub flag: String,
    pub value: String,
}

/// Renders the console's `exec (<name> -<flag> <value> ...)` textual form.
///
/// Only the producing side is modeled here. What the host does with the
/// named command or its flags is out of scope; the rendered result is an
/// opaque [`Command`] like any other.
///
/// # Examples
///
/// ```
/// use cmdbatch::command::ExecCommand;
///
/// let cmd = ExecCommand::new("Dummy").arg("w", "dummyparam").render();
/// assert_eq!(cmd.as_str(), "exec (Dummy -w dummyparam)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecCommand {
    pub name: String,
    pub args: Vec<ExecArg>,
}

impl ExecCommand {
    pub fn new(name: impl Into<String>) -> Self {
        ExecCommand {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, flag: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(ExecArg {
            flag: flag.into(),
            value: value.into(),
        });
        self
    }

    pub fn render(&self) -> Command {
        let mut text = String::from("exec (");
        text.push_str(&self.name);
        for arg in &self.args {
            text.push_str(" -");
            text.push_str(&arg.flag);
            text.push(' ');
            text.push_str(&arg.value);
        }
        text.push(')');
        Command(text)
    }
}

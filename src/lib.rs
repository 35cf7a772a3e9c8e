//! cmdbatch builds ordered sequences of command strings for an external
//! console-batch host.
//!
//! The host owns the grammar and execution of each command; this crate only
//! produces the strings, in order, and hands the finished sequence over by
//! value. Sequences come from two places: programmatic construction through
//! [`build::build`] with a [`build::CommandTemplate`], or a YAML batch
//! definition file loaded through [`batch_file::BatchFile`].
//!
//! ```
//! use cmdbatch::{build, FixedTemplate};
//!
//! let commands = build(10, &FixedTemplate::new("exec (Dummy -w dummyparam)"));
//! assert_eq!(commands.len(), 10);
//! ```

pub mod batch_file;
pub mod build;
pub mod command;
pub mod sequence;

pub use batch_file::{BatchError, BatchFile};
pub use build::{build, CommandTemplate, FixedTemplate};
pub use command::{Command, ExecCommand};
pub use sequence::CommandSequence;

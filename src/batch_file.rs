//! Batch definition files
//!
//! A batch definition is a small YAML document declaring a list of entries,
//! each repeating one command a fixed number of times. Loading a definition
//! and expanding it yields a single [`CommandSequence`] with entries in file
//! order, ready to hand to a console host.
//!
//! ```yaml
//! cmdbatch_version: "1"
//! entries:
//!   - name: warmup
//!     count: 10
//!     command: "exec (Dummy -w dummyparam)"
//!   - count: 2
//!     exec:
//!       name: Load
//!       args:
//!         - flag: f
//!           value: graph.txt
//! ```

use crate::build::{build, FixedTemplate};
use crate::command::{ExecArg, ExecCommand};
use crate::sequence::CommandSequence;
use log::trace;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("unable to read batch definition")]
    Io(#[from] std::io::Error),
    #[error("unable to parse batch definition")]
    Yaml(#[from] serde_yaml::Error),
    #[error("entry `{entry}` has a negative count: {count}")]
    InvalidCount { entry: String, count: i64 },
    #[error("entry `{entry}` declares no command")]
    MissingCommand { entry: String },
    #[error("entry `{entry}` declares both a literal command and an exec form")]
    AmbiguousCommand { entry: String },
    #[error("no batch definition file found")]
    NotFound,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigExec {
    pub name: String,
    pub args: Option<Vec<ExecArg>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigEntry {
    pub name: Option<String>,
    pub count: Option<i64>,
    pub command: Option<String>,
    pub exec: Option<ConfigExec>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchFile {
    cmdbatch_version: String,
    pub name: Option<String>,
    pub entries: Vec<ConfigEntry>,
}

const FILENAMES: [&str; 3] = [".cmdbatch.yaml", ".cmdbatch.yml", "cmdbatch.yaml"];

impl BatchFile {
    pub fn from_file(file: &Path) -> Result<BatchFile, BatchError> {
        let file = std::fs::read_to_string(file).map_err(BatchError::Io)?;
        let batch: BatchFile = serde_yaml::from_str(&file).map_err(BatchError::Yaml)?;
        Ok(batch)
    }

    /// Walks up from the current directory looking for a batch definition.
    pub fn find_batch_file() -> Result<PathBuf, BatchError> {
        let cwd = std::env::current_dir().map_err(BatchError::Io)?;
        Self::find_batch_file_in(&cwd)
    }

    pub fn find_batch_file_in(start: &Path) -> Result<PathBuf, BatchError> {
        let mut path = start.to_path_buf();
        loop {
            trace!("{:?}", path);
            for filename in FILENAMES.iter() {
                let file = path.join(filename);
                if file.exists() {
                    return Ok(file.canonicalize().map_err(BatchError::Io)?);
                }
            }
            if !path.pop() {
                break;
            }
        }
        Err(BatchError::NotFound)
    }

    pub fn as_yaml(&self) -> Result<String, BatchError> {
        serde_yaml::to_string(self).map_err(BatchError::Yaml)
    }

    /// Expands every entry, in file order, into one command sequence.
    ///
    /// Each entry contributes `count` copies of its command (default 1).
    /// A negative count fails the whole expansion; a count of zero
    /// contributes nothing.
    pub fn expand(&self) -> Result<CommandSequence, BatchError> {
        let mut sequence = CommandSequence::new();
        for (position, entry) in self.entries.iter().enumerate() {
            let label = entry
                .name
                .clone()
                .unwrap_or_else(|| format!("#{}", position));
            let count = entry.count.unwrap_or(1);
            if count < 0 {
                return Err(BatchError::InvalidCount {
                    entry: label,
                    count,
                });
            }
            let expanded = match (&entry.command, &entry.exec) {
                (Some(command), None) => {
                    build(count as usize, &FixedTemplate::new(command.as_str()))
                }
                (None, Some(exec)) => {
                    let template = ExecCommand {
                        name: exec.name.clone(),
                        args: exec.args.clone().unwrap_or_default(),
                    };
                    build(count as usize, &template)
                }
                (None, None) => return Err(BatchError::MissingCommand { entry: label }),
                (Some(_), Some(_)) => return Err(BatchError::AmbiguousCommand { entry: label }),
            };
            sequence.extend(expanded);
        }
        Ok(sequence)
    }
}

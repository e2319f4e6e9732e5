use std::{
    ffi::OsString,
    io,
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

use log::trace;
use thiserror::Error;

/// Why a single conversion failed. Neither variant aborts the batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// the tool could not be started at all, usually because it is not
    /// installed or not executable
    #[error("failed to run {tool}: {source}")]
    Spawn { tool: String, source: io::Error },

    /// the tool ran but reported failure through its exit status
    #[error("{tool} exited unsuccessfully ({status})")]
    Status { tool: String, status: ExitStatus },
}

/// One invocation of the conversion tool: `tool -:<smiles> -O <output>`
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertCommand {
    pub tool: String,
    pub structure: String,
    pub output: PathBuf,
}

impl ConvertCommand {
    pub fn new(
        tool: impl Into<String>,
        structure: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tool: tool.into(),
            structure: structure.into(),
            output: output.into(),
        }
    }

    /// the arguments passed to the tool, without the tool itself
    fn tool_args(&self) -> [OsString; 3] {
        [
            format!("-:{}", self.structure).into(),
            "-O".into(),
            self.output.clone().into_os_string(),
        ]
    }

    /// the full argument list, tool first
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.tool.clone()];
        args.extend(
            self.tool_args()
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        args
    }

    /// run the tool and wait for it to exit. the structure is passed in the
    /// `-:` argument, so the child's stdin is closed rather than inherited
    pub fn run(&self) -> Result<(), ConvertError> {
        trace!("spawning {:?}", self.args());
        let status = Command::new(&self.tool)
            .args(self.tool_args())
            .stdin(Stdio::null())
            .status()
            .map_err(|source| ConvertError::Spawn {
                tool: self.tool.clone(),
                source,
            })?;
        if !status.success() {
            return Err(ConvertError::Status {
                tool: self.tool.clone(),
                status,
            });
        }
        Ok(())
    }
}

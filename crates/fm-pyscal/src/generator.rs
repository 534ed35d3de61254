//! Relperm include file generation.
//!
//! Curve generation is done by pyscal. The [`CurveGenerator`] trait is the
//! seam between the forward model and pyscal so tests can run without a
//! Python installation.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::interpolation::InterpolationValues;
use crate::options::{GasOilKeyword, KeywordFamily};

/// Errors reported by a curve generator.
#[derive(Debug, Error)]
pub enum CurveGeneratorError {
    /// The generator could not be started.
    #[error("failed to launch {}: {source}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generator ran but rejected its input.
    #[error("{message}")]
    Rejected { code: Option<i32>, message: String },
}

/// Everything pyscal needs to write one include file.
#[derive(Debug, Clone, PartialEq)]
pub struct PyscalRequest {
    /// CSV or XLSX file with relperm parameters.
    pub parameter_table: PathBuf,
    /// Include file to write.
    pub output: PathBuf,
    /// Sheet to read; `None` means the first sheet.
    pub sheet_name: Option<String>,
    /// Interpolation values, if a SCAL recommendation is to be interpolated.
    pub interpolation: Option<InterpolationValues>,
    pub gasoil_keyword: GasOilKeyword,
    pub family: KeywordFamily,
    pub verbose: bool,
}

impl PyscalRequest {
    /// Arguments for the `pyscal` command line client.
    pub fn command_line(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![self.parameter_table.clone().into()];
        if self.verbose {
            args.push("--verbose".into());
        }
        args.push("--output".into());
        args.push(self.output.clone().into());
        if let Some(sheet_name) = &self.sheet_name {
            args.push("--sheet_name".into());
            args.push(sheet_name.into());
        }
        if let Some(values) = &self.interpolation {
            args.push("--int_param_wo".into());
            args.push(values.wateroil.to_string().into());
            args.push("--int_param_go".into());
            args.push(values.gasoil.to_string().into());
        }
        if self.gasoil_keyword.is_slgof() {
            args.push("--slgof".into());
        }
        if self.family.is_family2() {
            args.push("--family2".into());
        }
        args
    }
}

/// Something that turns a [`PyscalRequest`] into an include file.
pub trait CurveGenerator {
    fn generate(&self, request: &PyscalRequest) -> Result<(), CurveGeneratorError>;
}

/// Runs the `pyscal` command line client as a child process.
pub struct PyscalCli {
    program: PathBuf,
}

impl PyscalCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CurveGenerator for PyscalCli {
    fn generate(&self, request: &PyscalRequest) -> Result<(), CurveGeneratorError> {
        let args = request.command_line();
        debug!("Running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| {
                error!("Failed to launch {}: {}", self.program.display(), source);
                CurveGeneratorError::Launch {
                    program: self.program.clone(),
                    source,
                }
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
                info!("pyscal: {}", line);
            }
            return Ok(());
        }

        // pyscal reports the failing check on its last stderr line
        let message = match stderr.lines().rev().find(|line| !line.trim().is_empty()) {
            Some(line) => line.trim().to_string(),
            None => format!("{} exited with {}", self.program.display(), output.status),
        };
        Err(CurveGeneratorError::Rejected {
            code: output.status.code(),
            message,
        })
    }
}

pub mod mock {
    //! Recording curve generator for tests.

    use super::*;
    use std::sync::{Arc, Mutex};

    /// Outcome of a mocked generation.
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        Success,
        /// Fails as if pyscal rejected the input with `message`.
        Rejects { message: String },
        /// Fails as if the program could not be found.
        LaunchFails,
    }

    /// Records every request instead of running pyscal.
    pub struct MockCurveGenerator {
        behavior: MockBehavior,
        requests: Arc<Mutex<Vec<PyscalRequest>>>,
    }

    impl MockCurveGenerator {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Requests received so far.
        pub fn requests(&self) -> Vec<PyscalRequest> {
            self.requests
                .lock()
                .expect("MockCurveGenerator requests mutex poisoned")
                .clone()
        }
    }

    impl CurveGenerator for MockCurveGenerator {
        fn generate(&self, request: &PyscalRequest) -> Result<(), CurveGeneratorError> {
            self.requests
                .lock()
                .expect("MockCurveGenerator requests mutex poisoned")
                .push(request.clone());

            match &self.behavior {
                MockBehavior::Success => Ok(()),
                MockBehavior::Rejects { message } => Err(CurveGeneratorError::Rejected {
                    code: Some(1),
                    message: message.clone(),
                }),
                MockBehavior::LaunchFails => Err(CurveGeneratorError::Launch {
                    program: PathBuf::from("pyscal"),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                }),
            }
        }
    }
}

//! fm-pyscal
//!
//! ERT forward model wrapping the pyscal command line client. In the forward
//! model context this gives access to interpolation parameters in
//! `parameters.txt`, which the pyscal client is not aware of.

pub mod config;
pub mod error;
pub mod generator;
pub mod genkw;
pub mod interpolation;
pub mod options;
pub mod parameters;
pub mod run;

pub use config::ForwardModelConfig;
pub use error::{Error, Result};
pub use generator::{CurveGenerator, PyscalCli, PyscalRequest};
pub use run::{ForwardModelArgs, run};

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fm_pyscal=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

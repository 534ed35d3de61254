//! The forward model invocation.
//!
//! Mirrors the pyscal command line client, except that every argument is
//! required (defaultable through the sentinel) and interpolation values are
//! given by name and collected from the parameter file.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::ForwardModelConfig;
use crate::error::{Error, Result};
use crate::generator::{CurveGenerator, CurveGeneratorError, PyscalRequest};
use crate::interpolation::{InterpolationScenario, resolve_interpolation_values};
use crate::options::{GasOilKeyword, KeywordFamily, sheet_selection};

/// Arguments of one invocation, as given on the command line.
#[derive(Debug, Clone)]
pub struct ForwardModelArgs {
    pub relperm_parameters_file: PathBuf,
    pub output_filename: PathBuf,
    pub sheet_name: String,
    pub int_param_wo_name: String,
    pub int_param_go_name: String,
    pub slgof: String,
    /// Integer text; validated together with the other arguments.
    pub family: String,
}

/// Validates `args`, resolves interpolation values and hands the request to
/// `generator`.
///
/// All argument checks run before the parameter file is read. Returns the
/// request that was passed to the generator.
pub fn run(
    args: &ForwardModelArgs,
    config: &ForwardModelConfig,
    generator: &dyn CurveGenerator,
) -> Result<PyscalRequest> {
    let request = prepare(args, config)?;

    match generator.generate(&request) {
        Ok(()) => {
            info!("Wrote {}", request.output.display());
            Ok(request)
        }
        Err(err @ CurveGeneratorError::Rejected { .. }) => {
            error!("{}", err);
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Builds the generator request without running it.
pub fn prepare(args: &ForwardModelArgs, config: &ForwardModelConfig) -> Result<PyscalRequest> {
    let relperm_file = &args.relperm_parameters_file;
    if !relperm_file.exists() {
        error!("{} does not exist", relperm_file.display());
        return Err(Error::MissingRelpermFile(relperm_file.clone()));
    }

    let gasoil_keyword: GasOilKeyword = args.slgof.parse().map_err(|keyword| {
        error!("Only supports sgof or slgof");
        Error::InvalidGasOilKeyword(keyword)
    })?;

    let family: KeywordFamily = args.family.parse().map_err(|family| {
        error!("Family must be either 1 or 2");
        Error::InvalidFamily(family)
    })?;

    let scenario =
        InterpolationScenario::select(&args.int_param_wo_name, &args.int_param_go_name, config)?;
    let interpolation = resolve_interpolation_values(&scenario, config)?;

    Ok(PyscalRequest {
        parameter_table: args.relperm_parameters_file.clone(),
        output: args.output_filename.clone(),
        sheet_name: sheet_selection(&args.sheet_name, config),
        interpolation,
        gasoil_keyword,
        family,
        verbose: true,
    })
}

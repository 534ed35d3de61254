//! Interpolation parameter resolution.
//!
//! A SCAL recommendation is interpolated between its low, base and high
//! curves with one parameter in `[-1, 1]` for WaterOil and one for GasOil.
//! The forward model is given parameter *names*; the values are looked up
//! in the realization's parameter file.

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::config::{ForwardModelConfig, ScenarioConstants};
use crate::genkw::{strip_namespace, strip_namespace_keys};
use crate::parameters::{ParameterFileError, ParameterTable, load_parameters_file};

/// Errors raised while selecting or resolving interpolation parameters.
#[derive(Debug, Error)]
pub enum InterpolationError {
    /// A GasOil parameter was given without a WaterOil parameter.
    #[error("WaterOil interpolation parameter missing")]
    MissingWaterOilParameter,

    /// The parameter file could not be loaded.
    #[error(transparent)]
    ParameterFile(#[from] ParameterFileError),

    /// The requested name is neither in the parameter file nor a scenario
    /// constant.
    #[error("Requested parameter name {name} not found in {}", file.display())]
    ParameterNotFound { name: String, file: PathBuf },

    /// The stored value is not a number.
    #[error("Value {value:?} of parameter {name} is not a number: {source}")]
    NotANumber {
        name: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Which interpolation the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpolationScenario {
    /// No SCAL recommendation interpolation.
    None,
    /// One parameter drives both WaterOil and GasOil.
    Shared { name: String },
    /// Separate parameters for WaterOil and GasOil.
    Separate { wateroil: String, gasoil: String },
}

impl InterpolationScenario {
    /// Decides the scenario from the two requested names.
    ///
    /// Namespace prefixes are stripped first. A GasOil name without a
    /// WaterOil name is rejected: a single explicit parameter always starts
    /// from WaterOil.
    pub fn select(
        wateroil: &str,
        gasoil: &str,
        config: &ForwardModelConfig,
    ) -> Result<Self, InterpolationError> {
        let wateroil = strip_namespace(wateroil);
        let gasoil = strip_namespace(gasoil);

        match (config.is_unset(wateroil), config.is_unset(gasoil)) {
            (true, true) => Ok(Self::None),
            (false, true) => Ok(Self::Shared {
                name: wateroil.to_string(),
            }),
            (false, false) => Ok(Self::Separate {
                wateroil: wateroil.to_string(),
                gasoil: gasoil.to_string(),
            }),
            (true, false) => {
                error!("WaterOil interpolation parameter missing");
                Err(InterpolationError::MissingWaterOilParameter)
            }
        }
    }

    /// Parameter names to look up, WaterOil first.
    pub fn parameter_names(&self) -> Option<(&str, &str)> {
        match self {
            Self::None => None,
            Self::Shared { name } => Some((name.as_str(), name.as_str())),
            Self::Separate { wateroil, gasoil } => Some((wateroil.as_str(), gasoil.as_str())),
        }
    }
}

/// Resolved interpolation values passed on to pyscal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationValues {
    pub wateroil: f64,
    pub gasoil: f64,
}

/// Adds scenario constants for names not already present in `table`.
///
/// Entries loaded from the parameter file always take precedence.
pub fn augment_with_constants(table: &mut ParameterTable, constants: &ScenarioConstants) {
    for (name, value) in constants.iter() {
        if !table.contains_key(name) {
            table.insert(name.to_string(), value.to_string());
        }
    }
}

/// Loads the parameter file and resolves the values for `scenario`.
///
/// Returns `None` without touching the file system when no interpolation
/// is requested.
pub fn resolve_interpolation_values(
    scenario: &InterpolationScenario,
    config: &ForwardModelConfig,
) -> Result<Option<InterpolationValues>, InterpolationError> {
    let Some((wateroil_name, gasoil_name)) = scenario.parameter_names() else {
        return Ok(None);
    };

    let mut table = match load_parameters_file(&config.parameters_file) {
        Ok(table) => strip_namespace_keys(table),
        Err(err) => {
            error!("{}", err);
            return Err(err.into());
        }
    };
    augment_with_constants(&mut table, &config.scenario_constants);

    let file = config.parameters_file.as_path();
    let wateroil = lookup_value(&table, wateroil_name, file)?;
    info!(
        "Collected {} from {} with value {}",
        wateroil_name,
        file.display(),
        wateroil
    );

    let gasoil = lookup_value(&table, gasoil_name, file)?;
    if gasoil_name != wateroil_name {
        info!(
            "Collected {} from {} with value {}",
            gasoil_name,
            file.display(),
            gasoil
        );
    }

    Ok(Some(InterpolationValues { wateroil, gasoil }))
}

/// Looks up `name` in an already normalized and augmented table.
pub fn lookup_value(
    table: &ParameterTable,
    name: &str,
    file: &Path,
) -> Result<f64, InterpolationError> {
    let name = strip_namespace(name);
    let Some(raw) = table.get(name) else {
        error!(
            "Requested parameter name {} not found in {}",
            name,
            file.display()
        );
        return Err(InterpolationError::ParameterNotFound {
            name: name.to_string(),
            file: file.to_path_buf(),
        });
    };

    raw.trim().parse::<f64>().map_err(|source| {
        error!("Parameter {} has non-numeric value {:?}", name, raw);
        InterpolationError::NotANumber {
            name: name.to_string(),
            value: raw.clone(),
            source,
        }
    })
}

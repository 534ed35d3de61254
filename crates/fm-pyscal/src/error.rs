//! Forward model errors

use std::path::PathBuf;

use thiserror::Error;

use crate::generator::CurveGeneratorError;
use crate::interpolation::InterpolationError;

/// Forward model result type
pub type Result<T> = std::result::Result<T, Error>;

/// Forward model errors
///
/// Every variant ends the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{} does not exist", .0.display())]
    MissingRelpermFile(PathBuf),

    #[error("Only supports sgof or slgof, got {0:?}")]
    InvalidGasOilKeyword(String),

    #[error("Family must be either 1 or 2, got {0}")]
    InvalidFamily(String),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Generator(#[from] CurveGeneratorError),
}

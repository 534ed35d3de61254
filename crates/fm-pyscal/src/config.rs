//! Forward model configuration.
//!
//! The sentinel marking an unset argument and the table of named scenario
//! constants are plain data here so callers and tests can inject their own.

use std::path::{Path, PathBuf};

/// Argument value meaning "not specified".
///
/// Must match the DEFAULT of the PYSCAL forward model job configuration in
/// ERT. Contains no colon, so namespace stripping leaves it untouched.
pub const MAGIC_NONE: &str = "__NONE__";

/// Parameter file written by ERT into each realization's runpath.
pub const DEFAULT_PARAMETERS_FILE: &str = "parameters.txt";

/// Named interpolation values available next to the entries of the
/// parameter file.
///
/// These let an ERT config request a canonical low/base/high case without
/// sampling an interpolation parameter.
pub const MAGIC_CASES: &[(&str, f64)] = &[
    ("__BASE__", 0.0),
    ("__LOW__", -1.0),
    ("__PESS__", -1.0),
    ("__PESSIMISTIC__", -1.0),
    ("__HIGH__", 1.0),
    ("__OPT__", 1.0),
    ("__OPTIMISTIC__", 1.0),
];

/// Named scenario points merged into the parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConstants {
    entries: Vec<(String, f64)>,
}

impl ScenarioConstants {
    /// Creates a constant table from name/value pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// A table without any constants.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScenarioConstants {
    fn default() -> Self {
        Self::new(MAGIC_CASES.iter().copied())
    }
}

/// Settings shared by one forward model invocation.
#[derive(Debug, Clone)]
pub struct ForwardModelConfig {
    /// Parameter file holding sampled interpolation parameters.
    pub parameters_file: PathBuf,
    /// Argument value meaning "not specified".
    pub sentinel: String,
    /// Named interpolation values added to the parameter table.
    pub scenario_constants: ScenarioConstants,
}

impl ForwardModelConfig {
    pub fn with_parameters_file(mut self, path: impl AsRef<Path>) -> Self {
        self.parameters_file = path.as_ref().to_path_buf();
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_scenario_constants(mut self, constants: ScenarioConstants) -> Self {
        self.scenario_constants = constants;
        self
    }

    /// Returns true if `value` is the "not specified" marker.
    pub fn is_unset(&self, value: &str) -> bool {
        value == self.sentinel
    }
}

impl Default for ForwardModelConfig {
    fn default() -> Self {
        Self {
            parameters_file: PathBuf::from(DEFAULT_PARAMETERS_FILE),
            sentinel: MAGIC_NONE.to_string(),
            scenario_constants: ScenarioConstants::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_has_no_namespace_separator() {
        assert!(!MAGIC_NONE.contains(':'));
    }

    #[test]
    fn test_default_constants() {
        let constants = ScenarioConstants::default();
        assert_eq!(constants.len(), 7);
        assert_eq!(constants.get("__BASE__"), Some(0.0));
        assert_eq!(constants.get("__PESSIMISTIC__"), Some(-1.0));
        assert_eq!(constants.get("__OPT__"), Some(1.0));
        assert_eq!(constants.get("BASE"), None);
    }

    #[test]
    fn test_config_builders() {
        let config = ForwardModelConfig::default()
            .with_parameters_file("/tmp/params.txt")
            .with_sentinel("-")
            .with_scenario_constants(ScenarioConstants::empty());

        assert_eq!(config.parameters_file, PathBuf::from("/tmp/params.txt"));
        assert!(config.is_unset("-"));
        assert!(!config.is_unset(MAGIC_NONE));
        assert!(config.scenario_constants.is_empty());
    }
}

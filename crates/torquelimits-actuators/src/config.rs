//! Declarative actuator sets (YAML or JSON).
//!
//! ```yaml
//! close: true
//! actuators:
//!   - joint: elbow
//!     dof: 0
//!     direction: concentric     # or 1 / -1
//!     kind: Gauss3p             # case-insensitive, `_`/`-` ignored
//!     parameters: { t0: 50, wmax: 800, wc: 200, amin: 0.9, wr: 40, w1: -90, r: 60, qopt: 100 }
//! ```
//!
//! Parameters are checked for finiteness here, once, at load time. Curve
//! evaluation never validates.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use torquelimits_curves::{CurveKind, CurveModel};
use torquelimits_errors::{ResultExt, TorqueLimitsError, error_context};
use torquelimits_kinematics::KinematicModel;
use tracing::debug;

use crate::{Actuator, ActuatorRegistry, BiomechanicalModel, Direction};

/// One actuator entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorConfig {
    /// Joint name, informational.
    pub joint: String,
    /// Target DoF index.
    pub dof: usize,
    /// Contraction direction.
    pub direction: Direction,
    /// Curve family name.
    pub kind: String,
    /// Curve parameters by name.
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl ActuatorConfig {
    /// Builds and validates the described actuator.
    ///
    /// # Errors
    ///
    /// - `UnknownCurveKind` for an unrecognized `kind`
    /// - `MissingParameter` for an absent curve parameter
    /// - a curve error for a non-finite parameter or zero Gaussian width
    pub fn build(&self) -> Result<Actuator, TorqueLimitsError> {
        let kind: CurveKind = self.kind.parse()?;
        let model = CurveModel::from_parameters(kind, &self.parameters)?;
        model.validate()?;
        Ok(Actuator::new(
            self.joint.clone(),
            self.dof,
            self.direction,
            model,
        ))
    }
}

impl From<&Actuator> for ActuatorConfig {
    fn from(actuator: &Actuator) -> Self {
        Self {
            joint: actuator.joint_name().to_string(),
            dof: actuator.dof_index(),
            direction: actuator.direction(),
            kind: actuator.kind().to_string(),
            parameters: actuator.model().parameter_map(),
        }
    }
}

/// A whole actuator set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuatorSetConfig {
    /// Entries, added in order.
    #[serde(default)]
    pub actuators: Vec<ActuatorConfig>,
    /// Close the registry after adding every entry.
    #[serde(default)]
    pub close: bool,
}

impl ActuatorSetConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// `TorqueLimitsError::Config` with the parser message.
    pub fn from_yaml_str(source: &str) -> Result<Self, TorqueLimitsError> {
        serde_yaml::from_str(source)
            .map_err(|e| TorqueLimitsError::config(format!("invalid YAML actuator set: {e}")))
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// `TorqueLimitsError::Config` with the parser message.
    pub fn from_json_str(source: &str) -> Result<Self, TorqueLimitsError> {
        serde_json::from_str(source)
            .map_err(|e| TorqueLimitsError::config(format!("invalid JSON actuator set: {e}")))
    }

    /// Reads a file, choosing JSON for a `.json` extension and YAML otherwise.
    ///
    /// # Errors
    ///
    /// `TorqueLimitsError::Config` naming the path for I/O or parse failures.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TorqueLimitsError> {
        let path = path.as_ref();
        let ctx = || error_context!("read_actuator_set", "path" => path.display());
        let source = std::fs::read_to_string(path)
            .map_err(|e| TorqueLimitsError::config(e.to_string()))
            .context(ctx())?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = match is_json {
            true => Self::from_json_str(&source),
            false => Self::from_yaml_str(&source),
        };
        parsed.context(ctx())
    }

    /// Serializes as YAML.
    ///
    /// # Errors
    ///
    /// `TorqueLimitsError::Config` if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, TorqueLimitsError> {
        serde_yaml::to_string(self).map_err(|e| TorqueLimitsError::config(e.to_string()))
    }

    /// Serializes as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// `TorqueLimitsError::Config` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, TorqueLimitsError> {
        serde_json::to_string_pretty(self).map_err(|e| TorqueLimitsError::config(e.to_string()))
    }

    /// Builds every entry, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// As [`ActuatorConfig::build`].
    pub fn build_all(&self) -> Result<Vec<Actuator>, TorqueLimitsError> {
        self.actuators.iter().map(ActuatorConfig::build).collect()
    }
}

impl ActuatorRegistry {
    /// Describes every stored actuator. `close` mirrors the registry state.
    pub fn to_config(&self) -> ActuatorSetConfig {
        ActuatorSetConfig {
            actuators: self.iter().map(ActuatorConfig::from).collect(),
            close: self.is_closed(),
        }
    }
}

impl<K: KinematicModel> BiomechanicalModel<K> {
    /// Adds every actuator of `config`, then closes the registry if asked.
    ///
    /// The entries are staged on a copy of the registry, which replaces the
    /// live one only when every add (and the close, if requested) succeeds.
    /// A failed load leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Build errors from [`ActuatorSetConfig::build_all`], then registry
    /// errors from `add_actuator` and `close_actuators`.
    pub fn load_actuators(&mut self, config: &ActuatorSetConfig) -> Result<(), TorqueLimitsError> {
        let actuators = config.build_all()?;
        debug!(entries = actuators.len(), close = config.close, "loading actuator set");
        let mut staged = self.actuators().clone();
        for actuator in actuators {
            staged.add_actuator(self.kinematics(), actuator)?;
        }
        if config.close {
            staged.close(self.kinematics())?;
        }
        self.replace_actuators(staged);
        Ok(())
    }
}

//! The closed sum of curve families.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use torquelimits_errors::ActuatorError;

use crate::{
    Constant, CurveError, CurveKind, Gauss3p, Gauss6p, Linear, SigmoidGauss3p, TorqueScalar,
};

/// One torque curve of any supported family.
///
/// Serialized with an internal `kind` tag next to the family's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CurveModel {
    /// State-independent limit
    Constant(Constant),
    /// Affine in the joint position
    Linear(Linear),
    /// Single Gaussian lobe, Hill velocity term
    Gauss3p(Gauss3p),
    /// Two Gaussian lobes, Hill velocity term
    Gauss6p(Gauss6p),
    /// Single Gaussian lobe, sigmoid velocity term
    SigmoidGauss3p(SigmoidGauss3p),
}

impl CurveModel {
    /// Family tag of this curve.
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveModel::Constant(_) => CurveKind::Constant,
            CurveModel::Linear(_) => CurveKind::Linear,
            CurveModel::Gauss3p(_) => CurveKind::Gauss3p,
            CurveModel::Gauss6p(_) => CurveKind::Gauss6p,
            CurveModel::SigmoidGauss3p(_) => CurveKind::SigmoidGauss3p,
        }
    }

    /// Maximum torque at one joint's `position` (rad) and `velocity` (rad/s).
    ///
    /// Families that ignore an input simply drop it.
    pub fn max_torque<S: TorqueScalar>(&self, position: S, velocity: S) -> S {
        match self {
            CurveModel::Constant(curve) => curve.max_torque(),
            CurveModel::Linear(curve) => curve.max_torque(position),
            CurveModel::Gauss3p(curve) => curve.max_torque(position, velocity),
            CurveModel::Gauss6p(curve) => curve.max_torque(position, velocity),
            CurveModel::SigmoidGauss3p(curve) => curve.max_torque(position, velocity),
        }
    }

    /// Validates the parameters of the wrapped curve.
    ///
    /// # Errors
    ///
    /// Returns the first non-finite parameter or zero Gaussian width.
    pub fn validate(&self) -> Result<(), CurveError> {
        match self {
            CurveModel::Constant(curve) => curve.validate(),
            CurveModel::Linear(curve) => curve.validate(),
            CurveModel::Gauss3p(curve) => curve.validate(),
            CurveModel::Gauss6p(curve) => curve.validate(),
            CurveModel::SigmoidGauss3p(curve) => curve.validate(),
        }
    }

    /// Named parameter values in the family's declaration order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match self {
            CurveModel::Constant(curve) => curve.parameters(),
            CurveModel::Linear(curve) => curve.parameters(),
            CurveModel::Gauss3p(curve) => curve.parameters(),
            CurveModel::Gauss6p(curve) => curve.parameters(),
            CurveModel::SigmoidGauss3p(curve) => curve.parameters(),
        }
    }

    /// Parameters keyed by name.
    pub fn parameter_map(&self) -> BTreeMap<String, f64> {
        self.parameters()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Builds a curve of `kind` from named parameters.
    ///
    /// Names not used by `kind` are ignored. No domain validation happens
    /// here; see [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::MissingParameter`] naming the first absent
    /// parameter.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use torquelimits_curves::{CurveKind, CurveModel};
    ///
    /// let mut parameters = BTreeMap::new();
    /// parameters.insert("slope".to_string(), 0.5);
    /// parameters.insert("zero".to_string(), 20.0);
    ///
    /// let curve = CurveModel::from_parameters(CurveKind::Linear, &parameters)?;
    /// assert_eq!(curve.kind(), CurveKind::Linear);
    /// # Ok::<(), torquelimits_errors::ActuatorError>(())
    /// ```
    pub fn from_parameters(
        kind: CurveKind,
        parameters: &BTreeMap<String, f64>,
    ) -> Result<Self, ActuatorError> {
        let get = |name: &str| {
            parameters
                .get(name)
                .copied()
                .ok_or_else(|| ActuatorError::missing_parameter(kind.name(), name))
        };

        let curve = match kind {
            CurveKind::Constant => CurveModel::Constant(Constant { tmax: get("tmax")? }),
            CurveKind::Linear => CurveModel::Linear(Linear {
                slope: get("slope")?,
                zero: get("zero")?,
            }),
            CurveKind::Gauss3p => CurveModel::Gauss3p(gauss3p_from(&get)?),
            CurveKind::Gauss6p => CurveModel::Gauss6p(Gauss6p {
                base: gauss3p_from(&get)?,
                r2: get("r2")?,
                qopt2: get("qopt2")?,
            }),
            CurveKind::SigmoidGauss3p => CurveModel::SigmoidGauss3p(SigmoidGauss3p {
                theta: get("theta")?,
                lambda: get("lambda")?,
                offset: get("offset")?,
                r: get("r")?,
                qopt: get("qopt")?,
            }),
        };
        Ok(curve)
    }
}

fn gauss3p_from<F>(get: &F) -> Result<Gauss3p, ActuatorError>
where
    F: Fn(&str) -> Result<f64, ActuatorError>,
{
    Ok(Gauss3p {
        t0: get("t0")?,
        wmax: get("wmax")?,
        wc: get("wc")?,
        amin: get("amin")?,
        wr: get("wr")?,
        w1: get("w1")?,
        r: get("r")?,
        qopt: get("qopt")?,
    })
}

impl From<Constant> for CurveModel {
    fn from(curve: Constant) -> Self {
        CurveModel::Constant(curve)
    }
}

impl From<Linear> for CurveModel {
    fn from(curve: Linear) -> Self {
        CurveModel::Linear(curve)
    }
}

impl From<Gauss3p> for CurveModel {
    fn from(curve: Gauss3p) -> Self {
        CurveModel::Gauss3p(curve)
    }
}

impl From<Gauss6p> for CurveModel {
    fn from(curve: Gauss6p) -> Self {
        CurveModel::Gauss6p(curve)
    }
}

impl From<SigmoidGauss3p> for CurveModel {
    fn from(curve: SigmoidGauss3p) -> Self {
        CurveModel::SigmoidGauss3p(curve)
    }
}

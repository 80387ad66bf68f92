//! Curve family tags.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use torquelimits_errors::ActuatorError;

use crate::{Constant, Gauss3p, Gauss6p, Linear, SigmoidGauss3p};

/// Identifies one of the five curve families.
///
/// Parsing is case-insensitive and ignores `_` and `-`, so `Gauss3p`,
/// `gauss3p` and `sigmoid_gauss3p` are all accepted.
///
/// ```
/// use torquelimits_curves::CurveKind;
///
/// let kind: CurveKind = "sigmoid-gauss3p".parse()?;
/// assert_eq!(kind, CurveKind::SigmoidGauss3p);
/// assert!("quadratic".parse::<CurveKind>().is_err());
/// # Ok::<(), torquelimits_errors::ActuatorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurveKind {
    /// State-independent limit
    Constant,
    /// Affine in the joint position
    Linear,
    /// Single Gaussian lobe, Hill velocity term
    Gauss3p,
    /// Two Gaussian lobes, Hill velocity term
    Gauss6p,
    /// Single Gaussian lobe, sigmoid velocity term
    SigmoidGauss3p,
}

impl CurveKind {
    /// Every kind, in declaration order.
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Constant,
        CurveKind::Linear,
        CurveKind::Gauss3p,
        CurveKind::Gauss6p,
        CurveKind::SigmoidGauss3p,
    ];

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Constant => "Constant",
            CurveKind::Linear => "Linear",
            CurveKind::Gauss3p => "Gauss3p",
            CurveKind::Gauss6p => "Gauss6p",
            CurveKind::SigmoidGauss3p => "SigmoidGauss3p",
        }
    }

    /// Parameter names this kind is built from.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            CurveKind::Constant => Constant::PARAMETERS,
            CurveKind::Linear => Linear::PARAMETERS,
            CurveKind::Gauss3p => Gauss3p::PARAMETERS,
            CurveKind::Gauss6p => Gauss6p::PARAMETERS,
            CurveKind::SigmoidGauss3p => SigmoidGauss3p::PARAMETERS,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = ActuatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "constant" => Ok(CurveKind::Constant),
            "linear" => Ok(CurveKind::Linear),
            "gauss3p" => Ok(CurveKind::Gauss3p),
            "gauss6p" => Ok(CurveKind::Gauss6p),
            "sigmoidgauss3p" => Ok(CurveKind::SigmoidGauss3p),
            _ => Err(ActuatorError::UnknownCurveKind(s.to_string())),
        }
    }
}

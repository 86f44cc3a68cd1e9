use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalibrationError {
    #[error("zero-width calibration range: min {min} == max {max}")]
    ZeroWidth { min: f64, max: f64 },
}

/// Input channel an [`AxisCalibration`] was decoded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRole {
    X,
    Y,
    Rotation,
    Throttle,
}

impl AxisRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisRole::X => "x",
            AxisRole::Y => "y",
            AxisRole::Rotation => "rz",
            AxisRole::Throttle => "throttle",
        }
    }
}

/// A raw axis reading together with the range the device reports it in.
///
/// The range is never zero-width; `min > max` is allowed and flips the
/// direction of the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCalibration {
    value: f64,
    min: f64,
    max: f64,
}

impl AxisCalibration {
    pub fn new(value: f64, min: f64, max: f64) -> Result<Self, CalibrationError> {
        if max == min {
            return Err(CalibrationError::ZeroWidth { min, max });
        }
        Ok(Self { value, min, max })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Rescales into `[-1, 1]` with the midpoint of the range at zero.
    pub fn signed(&self) -> f64 {
        (2.0 * self.ratio() - 1.0).clamp(-1.0, 1.0)
    }

    /// Rescales into `[0, 1]` with `min` at zero.
    pub fn unsigned(&self) -> f64 {
        self.ratio().clamp(0.0, 1.0)
    }

    /// Position of `value` along the range, unclamped. Ranges wider than
    /// `f64::MAX` are measured on halved operands so the width stays finite.
    fn ratio(&self) -> f64 {
        let width = self.max - self.min;
        if width.is_finite() {
            (self.value - self.min) / width
        } else {
            (self.value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/axis.rs"]
mod tests;

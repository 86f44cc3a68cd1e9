use crate::model::axis::AxisCalibration;
use crate::model::command::Command;
use crate::model::flags::DriveFlags;
use crate::model::record::CommandRecord;
use crate::model::variant::Variant;

pub const MAX_SPEED: u8 = 255;

/// Converts decoded stick samples into actuator commands.
///
/// Holds only configuration fixed at startup; `transform` is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformer {
    variant: Variant,
    angle_offset: i32,
}

impl Transformer {
    pub fn new(variant: Variant) -> Self {
        Self::with_angle_offset(variant, variant.default_angle_offset())
    }

    pub fn with_angle_offset(variant: Variant, angle_offset: i32) -> Self {
        Self {
            variant,
            angle_offset: angle_offset.rem_euclid(360),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn angle_offset(&self) -> i32 {
        self.angle_offset
    }

    pub fn transform(&self, record: &CommandRecord) -> Command {
        let polar = match record {
            CommandRecord::Basic { x, y, .. } | CommandRecord::BasicUnsigned { x, y } => {
                Polar::from_stick(x, y)
            }
            CommandRecord::Extended {
                x,
                y,
                rotation,
                rotation_degrees,
                throttle,
                ..
            } => {
                let mut polar = Polar::from_stick(x, y);
                polar.angle += rotation.signed() * rotation_degrees.to_radians();
                polar.length *= throttle.unsigned();
                polar
            }
        };

        Command {
            angle_degrees: self.quantize_angle(polar.angle),
            speed: quantize_speed(polar.length, record.flags()),
        }
    }

    fn quantize_angle(&self, radians: f64) -> i32 {
        // Saturating cast; wrapping first keeps the offset add from overflowing.
        let degrees = (radians.to_degrees().round() as i64).rem_euclid(360) as i32;
        (degrees + self.angle_offset).rem_euclid(360)
    }
}

#[derive(Debug, Clone, Copy)]
struct Polar {
    angle: f64,
    length: f64,
}

impl Polar {
    fn from_stick(x: &AxisCalibration, y: &AxisCalibration) -> Self {
        let x_rel = x.signed();
        let y_rel = y.signed();
        Self {
            angle: y_rel.atan2(x_rel),
            length: x_rel.hypot(y_rel),
        }
    }
}

fn quantize_speed(length: f64, flags: DriveFlags) -> u8 {
    if flags.adjust() {
        return 0;
    }
    if flags.turbo() {
        return MAX_SPEED;
    }
    (f64::from(MAX_SPEED) * length)
        .round()
        .clamp(0.0, f64::from(MAX_SPEED)) as u8
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/transform.rs"]
mod tests;

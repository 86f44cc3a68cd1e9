use std::fmt;

use serde::Serialize;

/// Quantized actuator command: heading in whole degrees and an 8-bit speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Always in `[0, 360)`.
    pub angle_degrees: i32,
    pub speed: u8,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.angle_degrees, self.speed)
    }
}

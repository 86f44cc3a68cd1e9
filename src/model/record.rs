use crate::model::axis::AxisCalibration;
use crate::model::flags::DriveFlags;
use crate::model::variant::Variant;

/// One decoded input sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandRecord {
    Basic {
        x: AxisCalibration,
        y: AxisCalibration,
        rotation: AxisCalibration,
        flags: DriveFlags,
    },
    BasicUnsigned {
        x: AxisCalibration,
        y: AxisCalibration,
    },
    Extended {
        x: AxisCalibration,
        y: AxisCalibration,
        rotation: AxisCalibration,
        /// Heading change at full rotation deflection.
        rotation_degrees: f64,
        throttle: AxisCalibration,
        flags: DriveFlags,
    },
}

impl CommandRecord {
    pub fn variant(&self) -> Variant {
        match self {
            CommandRecord::Basic { .. } => Variant::Basic,
            CommandRecord::BasicUnsigned { .. } => Variant::BasicUnsigned,
            CommandRecord::Extended { .. } => Variant::Extended,
        }
    }

    pub fn flags(&self) -> DriveFlags {
        match self {
            CommandRecord::Basic { flags, .. } | CommandRecord::Extended { flags, .. } => *flags,
            CommandRecord::BasicUnsigned { .. } => DriveFlags::empty(),
        }
    }
}

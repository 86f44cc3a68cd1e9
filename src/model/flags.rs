use serde::{Deserialize, Serialize};

/// Speed override switches carried alongside a stick sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveFlags {
    bits: u8,
}

impl DriveFlags {
    pub const TURBO: u8 = 0b0001;
    pub const ADJUST: u8 = 0b0010;

    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Builds flags from the float switches of a record; any nonzero value is set.
    pub fn from_switches(turbo: f64, adjust: f64) -> Self {
        let mut flags = Self::empty();
        if turbo != 0.0 {
            flags.set(Self::TURBO);
        }
        if adjust != 0.0 {
            flags.set(Self::ADJUST);
        }
        flags
    }

    pub fn set(&mut self, bit: u8) {
        self.bits |= bit;
    }

    pub fn contains(&self, bit: u8) -> bool {
        self.bits & bit != 0
    }

    pub fn turbo(&self) -> bool {
        self.contains(Self::TURBO)
    }

    pub fn adjust(&self) -> bool {
        self.contains(Self::ADJUST)
    }

    pub fn to_csv(&self) -> String {
        if self.bits == 0 {
            return ".".to_string();
        }
        let mut parts = Vec::new();
        if self.turbo() {
            parts.push("TURBO");
        }
        if self.adjust() {
            parts.push("ADJUST");
        }
        parts.join(",")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/flags.rs"]
mod tests;

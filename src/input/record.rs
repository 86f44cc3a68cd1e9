use crate::input::RecordError;
use crate::model::axis::{AxisCalibration, AxisRole, CalibrationError};
use crate::model::flags::DriveFlags;
use crate::model::record::CommandRecord;
use crate::model::variant::Variant;

/// Decodes one whitespace-separated line into a record of the given variant.
///
/// Field count is checked before any token is parsed, so a short line is
/// always reported as malformed rather than as a bad number. A trailing
/// `\r` or `\n` is ignored.
pub fn decode_line(variant: Variant, line: &str) -> Result<CommandRecord, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let expected = variant.field_count();
    if tokens.len() != expected {
        return Err(RecordError::Malformed {
            expected,
            found: tokens.len(),
        });
    }

    let names = variant.fields();
    let mut values = Vec::with_capacity(expected);
    for (idx, token) in tokens.iter().enumerate() {
        values.push(parse_number(idx, names[idx], token)?);
    }

    let record = match variant {
        Variant::Basic => CommandRecord::Basic {
            x: axis(AxisRole::X, &values[0..3])?,
            y: axis(AxisRole::Y, &values[3..6])?,
            rotation: axis(AxisRole::Rotation, &values[6..9])?,
            flags: DriveFlags::from_switches(values[9], values[10]),
        },
        Variant::BasicUnsigned => CommandRecord::BasicUnsigned {
            x: axis(AxisRole::X, &values[0..3])?,
            y: axis(AxisRole::Y, &values[3..6])?,
        },
        Variant::Extended => CommandRecord::Extended {
            x: axis(AxisRole::X, &values[0..3])?,
            y: axis(AxisRole::Y, &values[3..6])?,
            rotation: axis(AxisRole::Rotation, &values[6..9])?,
            rotation_degrees: values[9],
            throttle: axis(AxisRole::Throttle, &values[10..13])?,
            flags: DriveFlags::from_switches(values[13], values[14]),
        },
    };
    Ok(record)
}

fn parse_number(idx: usize, name: &'static str, token: &str) -> Result<f64, RecordError> {
    let invalid = || RecordError::InvalidNumber {
        field: idx + 1,
        name,
        token: token.to_string(),
    };
    let value: f64 = token.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

fn axis(role: AxisRole, triple: &[f64]) -> Result<AxisCalibration, RecordError> {
    AxisCalibration::new(triple[0], triple[1], triple[2]).map_err(|e| match e {
        CalibrationError::ZeroWidth { min, max } => RecordError::InvalidCalibration {
            axis: role,
            min,
            max,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/record.rs"]
mod tests;

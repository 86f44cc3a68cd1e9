use std::io::{self, BufRead, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::input::RecordError;
use crate::input::record::decode_line;
use crate::model::command::Command;
use crate::model::record::CommandRecord;
use crate::pipeline::transform::Transformer;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("line {line}: {reason}")]
    Record { line: usize, reason: RecordError },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Running totals over the records of one stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    pub records: usize,
    pub angle_min: Option<i32>,
    pub angle_max: Option<i32>,
    pub speed_min: Option<u8>,
    pub speed_max: Option<u8>,
    pub turbo_records: usize,
    pub adjust_records: usize,
}

impl StreamSummary {
    fn observe(&mut self, record: &CommandRecord, cmd: &Command) {
        self.records += 1;
        let (angle, speed) = (cmd.angle_degrees, cmd.speed);
        self.angle_min = Some(self.angle_min.map_or(angle, |v| v.min(angle)));
        self.angle_max = Some(self.angle_max.map_or(angle, |v| v.max(angle)));
        self.speed_min = Some(self.speed_min.map_or(speed, |v| v.min(speed)));
        self.speed_max = Some(self.speed_max.map_or(speed, |v| v.max(speed)));
        let flags = record.flags();
        if flags.turbo() {
            self.turbo_records += 1;
        }
        if flags.adjust() {
            self.adjust_records += 1;
        }
    }
}

/// Transforms every line of `reader`, writing one flushed command line per
/// record. Stops at end of input or at the first bad record; nothing is
/// written for the bad record.
pub fn run_stream<R, W>(
    transformer: &Transformer,
    reader: R,
    mut writer: W,
) -> Result<StreamSummary, StreamError>
where
    R: BufRead,
    W: Write,
{
    for_each_command(transformer, reader, |cmd| {
        writeln!(writer, "{cmd}")?;
        writer.flush()
    })
}

/// Decodes and transforms every line of `reader` without emitting commands.
pub fn validate_stream<R: BufRead>(
    transformer: &Transformer,
    reader: R,
) -> Result<StreamSummary, StreamError> {
    for_each_command(transformer, reader, |_| Ok(()))
}

fn for_each_command<R, F>(
    transformer: &Transformer,
    mut reader: R,
    mut sink: F,
) -> Result<StreamSummary, StreamError>
where
    R: BufRead,
    F: FnMut(&Command) -> io::Result<()>,
{
    let variant = transformer.variant();
    let mut summary = StreamSummary::default();
    let mut line = String::new();
    let mut line_no = 0usize;
    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let record = decode_line(variant, &line).map_err(|reason| StreamError::Record {
            line: line_no,
            reason,
        })?;
        let cmd = transformer.transform(&record);
        debug!(
            line = line_no,
            angle = cmd.angle_degrees,
            speed = cmd.speed,
            flags = %record.flags().to_csv(),
            "record"
        );
        sink(&cmd)?;
        summary.observe(&record, &cmd);
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stream.rs"]
mod tests;

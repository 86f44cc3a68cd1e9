use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::DriveArgs;
use crate::input::open_reader;
use crate::pipeline::stream::run_stream;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub(crate) drive: DriveArgs,

    /// Read records from this file instead of stdin
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let transformer = args.drive.resolve()?;
    info!(
        variant = transformer.variant().as_str(),
        angle_offset = transformer.angle_offset(),
        fields = transformer.variant().field_count(),
        "starting stream"
    );

    let start = Instant::now();
    let reader = open_reader(args.input.as_deref())?;
    let summary = run_stream(&transformer, reader, io::stdout().lock())?;
    info!(
        records = summary.records,
        turbo_records = summary.turbo_records,
        adjust_records = summary.adjust_records,
        elapsed_ms = start.elapsed().as_millis(),
        "finished stream"
    );
    Ok(())
}

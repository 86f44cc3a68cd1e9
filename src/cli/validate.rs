use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::DriveArgs;
use crate::input::open_reader;
use crate::pipeline::stream::validate_stream;
use crate::report::text::render_validation;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub(crate) drive: DriveArgs,

    /// Recorded capture, one record per line
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let transformer = args.drive.resolve()?;

    let start = Instant::now();
    info!(input = %args.input.display(), "validating capture");
    let reader = open_reader(Some(args.input.as_path()))?;
    let summary = validate_stream(&transformer, reader)?;
    info!(
        records = summary.records,
        elapsed_ms = start.elapsed().as_millis(),
        "capture valid"
    );

    print!("{}", render_validation(&transformer, &summary));
    Ok(())
}

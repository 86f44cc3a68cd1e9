use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::variant::Variant;
use crate::pipeline::transform::Transformer;
use crate::profile::loader::load_optional_profile;

mod run;
mod validate;
mod variants;

#[derive(Parser, Debug)]
#[command(name = "stick-drive", version, about = "Joystick sample to heading/speed transformer")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream records from stdin (or --input) to "angle speed" lines on stdout
    Run(run::RunArgs),
    /// Check a recorded capture and print a summary
    Validate(validate::ValidateArgs),
    /// Describe the supported record layouts
    Variants(variants::VariantsArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Run(args) => run::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Variants(args) => variants::handle(args),
        }
    }
}

/// Options that fix the transformer for the lifetime of the process.
#[derive(Args, Debug)]
pub(crate) struct DriveArgs {
    /// Input record layout [default: profile value, else basic]
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Degrees added to every heading [default: profile value, else per variant]
    #[arg(long, allow_negative_numbers = true)]
    angle_offset: Option<i32>,

    /// Optional TOML drive profile
    #[arg(long)]
    profile: Option<PathBuf>,
}

impl DriveArgs {
    pub(crate) fn resolve(&self) -> anyhow::Result<Transformer> {
        let profile = load_optional_profile(self.profile.as_deref())?;
        Ok(profile.resolve(self.variant.map(Variant::from), self.angle_offset))
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantArg {
    Basic,
    BasicUnsigned,
    Extended,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Basic => Variant::Basic,
            VariantArg::BasicUnsigned => Variant::BasicUnsigned,
            VariantArg::Extended => Variant::Extended,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;

use clap::{Args, Subcommand};

use crate::cli::VariantArg;
use crate::model::variant::Variant;
use crate::report::json::render_layout;
use crate::report::text::render_variants;

#[derive(Args, Debug)]
pub struct VariantsArgs {
    #[command(subcommand)]
    command: VariantsCommand,
}

#[derive(Subcommand, Debug)]
enum VariantsCommand {
    List,
    Dump(VariantsDumpArgs),
}

#[derive(Args, Debug)]
pub struct VariantsDumpArgs {
    /// Layout to describe
    #[arg(value_enum)]
    variant: VariantArg,
}

pub fn handle(args: VariantsArgs) -> anyhow::Result<()> {
    match args.command {
        VariantsCommand::List => {
            print!("{}", render_variants());
            Ok(())
        }
        VariantsCommand::Dump(args) => {
            println!("{}", render_layout(Variant::from(args.variant))?);
            Ok(())
        }
    }
}

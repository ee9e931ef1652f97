//! Converts TGA images to Kerbal Space Program MBM textures.

use clap::Parser;
use ksp_mbm::convert::Conversion;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tga2mbm")]
#[command(about = "Convert TGA images to Kerbal Space Program MBM textures", long_about = None)]
#[command(version)]
struct Cli {
    /// Image to convert; prompts for filenames when omitted
    file: Option<PathBuf>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    kerbal_rs::init_logging(cli.verbose, cli.quiet);
    kerbal_rs::run(Conversion::TgaToMbm, cli.file)
}

//! Shared driver for the MBM texture converter binaries.
//!
//! Each of the four binaries (`mbm2png`, `png2mbm`, `mbm2tga`, `tga2mbm`)
//! is a thin wrapper that picks a [`Conversion`] direction and hands
//! control to [`run`]: one conversion when a filename was given on the
//! command line, otherwise an interactive loop prompting for filenames
//! until an empty line or end of input.

use anyhow::{Context, Result};
use ksp_mbm::convert::Conversion;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Initialize env_logger the same way for every converter binary:
/// `warn` by default, raised by `-v` flags, silenced by `--quiet`.
pub fn init_logging(verbose: u8, quiet: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if verbose > 0 {
        log::set_max_level(match verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if quiet {
        log::set_max_level(log::LevelFilter::Error);
    }
}

/// Destination path for a conversion: the input path with its extension
/// replaced by the target format's.
pub fn output_path(input: &Path, conversion: Conversion) -> PathBuf {
    input.with_extension(conversion.target_extension())
}

/// Convert a single file, writing the result next to the input.
pub fn convert_file(conversion: Conversion, input: &Path) -> Result<()> {
    let data = std::fs::read(input)
        .with_context(|| format!("Failed to read source file: {}", input.display()))?;

    let converted = conversion
        .run(&data)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let output = output_path(input, conversion);
    std::fs::write(&output, converted)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!("✓ Converted {} to {}", input.display(), output.display());
    Ok(())
}

/// Entry point shared by the converter binaries.
///
/// With a filename the process performs exactly one conversion and any
/// failure is fatal (nonzero exit). Without one it prompts for filenames
/// on standard input; per-file failures are reported on standard error
/// and the loop continues until an empty line or end of input, which is
/// a clean exit.
pub fn run(conversion: Conversion, file: Option<PathBuf>) -> Result<()> {
    match file {
        Some(path) => convert_file(conversion, &path),
        None => prompt_loop(conversion),
    }
}

fn prompt_loop(conversion: Conversion) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Filename: ");
        io::stdout()
            .flush()
            .context("Failed to flush standard output")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from standard input")?;
        let name = line.trim();
        if name.is_empty() {
            break;
        }

        if let Err(e) = convert_file(conversion, Path::new(name)) {
            eprintln!("ERROR: {e:#}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_the_extension() {
        assert_eq!(
            output_path(Path::new("textures/model000.mbm"), Conversion::MbmToPng),
            PathBuf::from("textures/model000.png")
        );
        assert_eq!(
            output_path(Path::new("heatshield.tga"), Conversion::TgaToMbm),
            PathBuf::from("heatshield.mbm")
        );
    }

    #[test]
    fn extensionless_input_gains_the_target_extension() {
        assert_eq!(
            output_path(Path::new("texture"), Conversion::MbmToTga),
            PathBuf::from("texture.tga")
        );
    }
}

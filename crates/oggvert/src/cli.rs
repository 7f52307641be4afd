use core::cell::Cell;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::config::Config;
use crate::convert::convert;
use crate::directory::Disk;
use crate::encoder::Ffmpeg;
use crate::out::{Colors, Out};
use crate::outcome::Run;

/// Convert .wav files in a directory to .ogg using ffmpeg.
#[derive(Parser)]
pub struct Oggvert {
    /// If set, prints what would be done without running the encoder or
    /// removing any files. This also implies verbose.
    #[arg(short = 'D', long)]
    dry_run: bool,
    /// If set, enables verbose output.
    #[arg(short = 'v', long)]
    verbose: bool,
    /// Path to ffmpeg binary to use when performing conversions.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,
    /// If set, exits with an error if the conversion could not be started or
    /// if any file failed to convert.
    ///
    /// By default the exit status is always successful and problems are only
    /// reported in the output.
    #[arg(long)]
    strict: bool,
    /// The target directory containing .wav files.
    #[arg(default_value = ".")]
    directory: PathBuf,
}

/// Entry for `oggvert`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Oggvert) -> Result<()> {
    let config = Config {
        directory: opts.directory.clone(),
        dry_run: opts.dry_run,
        verbose: opts.verbose || opts.dry_run,
    };

    let indent = Cell::new(0);
    let cols = Colors::new();

    let o = StandardStream::stdout(ColorChoice::Auto);
    let mut o = o.lock();
    let mut o = Out::new(config.verbose, &indent, &cols, &mut o);

    let run = convert(&mut o, &config, &Ffmpeg::new(&opts.ffmpeg_bin), &Disk)?;

    if opts.strict {
        check(&run)?;
    }

    Ok(())
}

fn check(run: &Run) -> Result<()> {
    match run {
        Run::MissingEncoder => bail!("Encoder not found"),
        Run::UnreadableDirectory(e) => bail!("Could not list directory: {e}"),
        Run::NoCandidates => Ok(()),
        Run::Finished(report) => {
            if !report.is_success() {
                bail!(
                    "{} of {} file(s) failed to convert",
                    report.failed(),
                    report.entries.len()
                );
            }

            Ok(())
        }
    }
}

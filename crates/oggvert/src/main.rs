//! A tool to batch convert `.wav` files to `.ogg`.
//!
//! See [`oggvert`] documentation for more information.

use anyhow::Result;
use clap::Parser;

/// Convert .wav files in a directory to .ogg using ffmpeg.
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80)]
pub struct Opts {
    #[command(flatten)]
    inner: oggvert::cli::Oggvert,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    oggvert::cli::entry(&opts.inner)
}

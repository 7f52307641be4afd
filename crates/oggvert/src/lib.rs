//! A tool to batch convert a directory of `.wav` files to `.ogg`.
//!
//! Every file in the target directory whose name ends with `.wav` (in any
//! case) is converted with [ffmpeg] using the vorbis codec. The converted
//! file is written next to the source with the same base name, so
//! `Track 01.WAV` becomes `Track 01.ogg`.
//!
//! Once ffmpeg reports a successful conversion, the source file is
//! **removed**. Files which fail to convert are left untouched, and a failure
//! never stops the remaining files from being converted.
//!
//! Only the immediate contents of the directory are considered, nested
//! directories are not scanned.
//!
//! <br>
//!
//! ## Usage
//!
//! To see what would be done, run with `--dry-run` or `-D`:
//!
//! ```sh
//! oggvert --dry-run recordings
//! ```
//!
//! Without a directory, the current directory is converted:
//!
//! ```sh
//! oggvert
//! ```
//!
//! The exit status is successful even if some files failed to convert. Pass
//! `--strict` to exit with an error instead.
//!
//! [ffmpeg]: https://ffmpeg.org/

pub mod candidate;
pub mod cli;
pub mod config;
pub mod convert;
pub mod directory;
pub mod encoder;
pub mod out;
pub mod outcome;
mod shell;

pub use self::candidate::{Candidate, is_wav};
pub use self::config::Config;
pub use self::convert::convert;
pub use self::directory::{Directory, Disk};
pub use self::encoder::{Encoded, Encoder, Ffmpeg, Invocation};
pub use self::out::{Colors, Out};
pub use self::outcome::{Outcome, Report, Run, Stage};

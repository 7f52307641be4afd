use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The codec requested from ffmpeg for `.ogg` output.
pub const VORBIS: &str = "libvorbis";

/// A single invocation of the encoder.
///
/// The argument order is significant and must not change:
///
/// ```text
/// <encoder> -i <from> -c:a libvorbis -y -loglevel error <to>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub program: &'a Path,
    pub from: &'a Path,
    pub to: &'a Path,
}

impl Invocation<'_> {
    /// Build the command for this invocation.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args([OsStr::new("-i"), self.from.as_os_str()]);
        cmd.args(["-c:a", VORBIS]);
        cmd.arg("-y");
        cmd.args(["-loglevel", "error"]);
        cmd.arg(self.to);
        cmd
    }
}

/// The observed result of running the encoder to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub success: bool,
    pub stderr: String,
}

/// An external encoder.
pub trait Encoder {
    /// Resolve the encoder executable, or `None` if it cannot be found.
    fn locate(&self) -> Option<PathBuf>;

    /// Run the encoder to completion with captured output.
    ///
    /// An error indicates that the encoder could not be run at all, a failed
    /// conversion is signalled through [`Encoded::success`].
    fn encode(&self, invocation: &Invocation<'_>) -> io::Result<Encoded>;
}

/// The ffmpeg binary, looked up through `PATH`.
pub struct Ffmpeg {
    bin: PathBuf,
}

impl Ffmpeg {
    #[inline]
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Encoder for Ffmpeg {
    #[inline]
    fn locate(&self) -> Option<PathBuf> {
        which::which(&self.bin).ok()
    }

    fn encode(&self, invocation: &Invocation<'_>) -> io::Result<Encoded> {
        let output = invocation.command().output()?;

        Ok(Encoded {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

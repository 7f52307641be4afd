use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const WAV: &[u8] = b".wav";
const OGG: &str = ".ogg";

/// Test if the given file name should be converted.
///
/// The comparison is ASCII case-insensitive and performed on the encoded
/// bytes of the name, so names which are not valid UTF-8 are still matched.
pub fn is_wav(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();

    let Some(suffix) = bytes.len().checked_sub(WAV.len()).map(|n| &bytes[n..]) else {
        return false;
    };

    suffix.eq_ignore_ascii_case(WAV)
}

/// A `.wav` file selected for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The file name as it was listed.
    pub name: OsString,
    /// Path to the file being converted.
    pub from_path: PathBuf,
    /// Path to the `.ogg` file which will be produced.
    pub to_path: PathBuf,
}

impl Candidate {
    /// Construct a candidate for a file name in `dir`, or `None` if it is not
    /// a `.wav` file.
    pub fn new(dir: &Path, name: &OsStr) -> Option<Self> {
        if !is_wav(name) {
            return None;
        }

        let from_path = dir.join(name);

        // A dotfile like `.wav` has no extension, so the stem is the whole
        // name.
        let stem = Path::new(name).file_stem().unwrap_or(name);

        let mut to_name = stem.to_owned();
        to_name.push(OGG);

        Some(Self {
            name: name.to_owned(),
            from_path,
            to_path: dir.join(to_name),
        })
    }

    /// The file name of the produced `.ogg` file.
    pub fn to_name(&self) -> &OsStr {
        self.to_path.file_name().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::Path;

    use super::{Candidate, is_wav};

    #[test]
    fn wav_suffix_in_any_case() {
        for name in ["a.wav", "b.WAV", "c.Wav", "d.wAv", ".wav", "x.y.wav"] {
            assert!(is_wav(OsStr::new(name)), "{name} should match");
        }
    }

    #[test]
    fn other_names_are_rejected() {
        for name in [
            "a.ogg", "a.wave", "a.wav.bak", "wav", "awav", "a.mp3", "", "a.wa",
        ] {
            assert!(!is_wav(OsStr::new(name)), "{name} should not match");
        }
    }

    #[test]
    fn output_keeps_base_name() {
        let dir = Path::new("music");

        let c = Candidate::new(dir, OsStr::new("Track 01.WAV")).unwrap();
        assert_eq!(c.from_path, dir.join("Track 01.WAV"));
        assert_eq!(c.to_path, dir.join("Track 01.ogg"));
        assert_eq!(c.to_name(), "Track 01.ogg");
    }

    #[test]
    fn output_with_many_dots() {
        let dir = Path::new("music");

        let c = Candidate::new(dir, OsStr::new("a.b.c.wav")).unwrap();
        assert_eq!(c.to_path, dir.join("a.b.c.ogg"));

        let c = Candidate::new(dir, OsStr::new("..wav")).unwrap();
        assert_eq!(c.to_path, dir.join("..ogg"));
    }

    #[test]
    fn dotfile_is_kept_whole() {
        let c = Candidate::new(Path::new("."), OsStr::new(".wav")).unwrap();
        assert_eq!(c.to_name(), ".wav.ogg");
    }

    #[test]
    fn non_candidate() {
        assert!(Candidate::new(Path::new("."), OsStr::new("a.flac")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"\xffsong.wav");
        let c = Candidate::new(Path::new("dir"), name).unwrap();
        assert_eq!(c.to_name().as_bytes(), b"\xffsong.ogg");
    }
}

use core::fmt;

use std::io;

use crate::candidate::Candidate;

/// The step of a conversion in which an unexpected error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The encoder could not be run.
    Encode,
    /// The source could not be removed after a successful conversion.
    Remove,
}

impl fmt::Display for Stage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Encode => write!(f, "encode"),
            Stage::Remove => write!(f, "remove"),
        }
    }
}

/// The outcome of converting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Converted and the source was removed.
    Converted,
    /// The encoder exited unsuccessfully.
    Failed { stderr: String },
    /// Something other than the encoder failed.
    Unexpected { stage: Stage, error: String },
    /// Nothing was done since this is a dry run.
    Planned,
}

impl Outcome {
    /// Test if this outcome counts as a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. } | Outcome::Unexpected { .. })
    }
}

/// Ordered outcomes for every converted file.
#[derive(Debug, Default)]
pub struct Report {
    pub entries: Vec<(Candidate, Outcome)>,
}

impl Report {
    /// Number of files which were converted.
    pub fn converted(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Converted))
            .count()
    }

    /// Number of files which failed for any reason.
    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_failure()).count()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// The result of a whole conversion run.
#[derive(Debug)]
pub enum Run {
    /// The encoder could not be found, nothing was done.
    MissingEncoder,
    /// The target directory could not be listed, nothing was done.
    UnreadableDirectory(io::Error),
    /// There was nothing to convert.
    NoCandidates,
    /// Every candidate was attempted.
    Finished(Report),
}

impl Run {
    /// Test if the run completed without any failures.
    pub fn is_success(&self) -> bool {
        match self {
            Run::MissingEncoder | Run::UnreadableDirectory(..) => false,
            Run::NoCandidates => true,
            Run::Finished(report) => report.is_success(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::io;
    use std::path::Path;

    use super::{Outcome, Report, Run, Stage};
    use crate::candidate::Candidate;

    fn candidate(name: &str) -> Candidate {
        Candidate::new(Path::new("."), OsStr::new(name)).unwrap()
    }

    #[test]
    fn report_counts() {
        let report = Report {
            entries: vec![
                (candidate("a.wav"), Outcome::Converted),
                (
                    candidate("b.wav"),
                    Outcome::Failed {
                        stderr: String::from("bad"),
                    },
                ),
                (
                    candidate("c.wav"),
                    Outcome::Unexpected {
                        stage: Stage::Remove,
                        error: String::from("denied"),
                    },
                ),
                (candidate("d.wav"), Outcome::Planned),
            ],
        };

        assert_eq!(report.converted(), 1);
        assert_eq!(report.failed(), 2);
        assert!(!report.is_success());
    }

    #[test]
    fn run_success() {
        assert!(Run::NoCandidates.is_success());
        assert!(Run::Finished(Report::default()).is_success());
        assert!(!Run::MissingEncoder.is_success());
        assert!(!Run::UnreadableDirectory(io::ErrorKind::NotFound.into()).is_success());
    }
}

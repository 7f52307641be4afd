use std::io;

use anyhow::Result;

use crate::candidate::Candidate;
use crate::config::Config;
use crate::directory::Directory;
use crate::encoder::{Encoder, Invocation};
use crate::out::{Out, blank, error, info, warn};
use crate::outcome::{Outcome, Report, Run, Stage};
use crate::shell::FormatCommand;

/// Convert every `.wav` file in the configured directory to `.ogg`.
///
/// Each source file is removed once the encoder has reported a successful
/// conversion. Failures for individual files are reported and recorded in
/// the returned [`Run`], they never stop the remaining files from being
/// processed.
///
/// The only error returned is a failure to write output.
pub fn convert(
    o: &mut Out<'_>,
    config: &Config,
    encoder: &dyn Encoder,
    directory: &dyn Directory,
) -> Result<Run> {
    let Some(program) = encoder.locate() else {
        error!(o, "Error: FFmpeg is not installed or not in your system's PATH.");
        blank!(o, "Please install it from https://ffmpeg.org/ and try again.");
        return Ok(Run::MissingEncoder);
    };

    let dir = &config.directory;

    let names = match directory.list(dir) {
        Ok(names) => names,
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                error!(o, "Error: Directory '{}' not found.", dir.display());
            } else {
                error!(
                    o,
                    "Error: Directory '{}' could not be listed: {e}",
                    dir.display()
                );
            }

            return Ok(Run::UnreadableDirectory(e));
        }
    };

    let candidates = names
        .iter()
        .filter_map(|name| Candidate::new(dir, name))
        .collect::<Vec<_>>();

    if candidates.is_empty() {
        info!(o, "No .wav files found in '{}'.", dir.display());
        return Ok(Run::NoCandidates);
    }

    info!(
        o,
        "Found {} .wav file(s). Starting conversion...",
        candidates.len()
    );

    if config.dry_run {
        warn!(o, "Dry run, no files will be converted or removed.");
    }

    let mut report = Report::default();

    for c in candidates {
        let invocation = Invocation {
            program: &program,
            from: &c.from_path,
            to: &c.to_path,
        };

        blank!(o => v, "{}", FormatCommand::new(&invocation.command()));

        let outcome = if config.dry_run {
            Outcome::Planned
        } else {
            process(encoder, directory, &invocation)
        };

        emit(o, &c, &outcome)?;
        report.entries.push((c, outcome));
    }

    blank!(o => v, "{} converted, {} failed", report.converted(), report.failed());
    o.newline()?;
    info!(o, "Conversion process finished.");
    Ok(Run::Finished(report))
}

fn process(
    encoder: &dyn Encoder,
    directory: &dyn Directory,
    invocation: &Invocation<'_>,
) -> Outcome {
    let encoded = match encoder.encode(invocation) {
        Ok(encoded) => encoded,
        Err(e) => {
            return Outcome::Unexpected {
                stage: Stage::Encode,
                error: e.to_string(),
            };
        }
    };

    if !encoded.success {
        return Outcome::Failed {
            stderr: encoded.stderr.trim().to_owned(),
        };
    }

    match directory.remove(invocation.from) {
        Ok(()) => Outcome::Converted,
        Err(e) => Outcome::Unexpected {
            stage: Stage::Remove,
            error: e.to_string(),
        },
    }
}

/// Write the messages for a single outcome.
fn emit(o: &mut Out<'_>, c: &Candidate, outcome: &Outcome) -> Result<()> {
    let from = c.name.to_string_lossy();
    let to = c.to_name().to_string_lossy();

    match outcome {
        Outcome::Converted => {
            info!(o, "Successfully converted '{from}' to '{to}'.");
            let mut o = o.indent(1);
            blank!(o, "-> Deleted original: '{from}'");
        }
        Outcome::Failed { stderr } => {
            error!(o, "Failed to convert '{from}'.");
            let mut o = o.indent(1);
            blank!(o, "-> FFmpeg error: {stderr}");
        }
        Outcome::Unexpected { stage, error } => {
            if let Stage::Remove = stage {
                info!(o, "Successfully converted '{from}' to '{to}'.");
            }

            error!(o, "An unexpected error occurred with '{from}': {error}");
            let mut o = o.indent(1);
            blank!(o => v, "during: {stage}");
        }
        Outcome::Planned => {
            info!(o, "Would convert '{from}' to '{to}'.");
        }
    }

    Ok(())
}

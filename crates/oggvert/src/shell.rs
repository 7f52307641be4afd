use core::fmt;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::process::Command;

/// Escape a single argument so that it can be pasted into bash.
pub(crate) fn escape(s: &OsStr) -> Cow<'_, str> {
    let Some(s) = s.to_str() else {
        return Cow::Borrowed("<non-utf8>");
    };

    if s.is_empty() {
        return Cow::Borrowed("''");
    }

    let Some(n) = s.find(|c: char| escape_in_bash(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut o = String::with_capacity(s.len() + 8);
    o.push_str(&s[..n]);

    for c in s[n..].chars() {
        match escape_in_bash(c) {
            Some(e) => o.push_str(e),
            None => o.push(c),
        }
    }

    Cow::Owned(o)
}

fn escape_in_bash(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("\\ "),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        '$' => Some("\\$"),
        '`' => Some("\\`"),
        '&' => Some("\\&"),
        '|' => Some("\\|"),
        ';' => Some("\\;"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '!' => Some("\\!"),
        '(' => Some("\\("),
        ')' => Some("\\)"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '*' => Some("\\*"),
        '?' => Some("\\?"),
        _ => None,
    }
}

/// Display a command line with every part shell escaped.
pub(crate) struct FormatCommand<'a> {
    cmd: &'a Command,
}

impl<'a> FormatCommand<'a> {
    #[inline]
    pub(crate) fn new(cmd: &'a Command) -> Self {
        Self { cmd }
    }
}

impl fmt::Display for FormatCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape(self.cmd.get_program()))?;

        for arg in self.cmd.get_args() {
            write!(f, " {}", escape(arg))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::process::Command;

    use super::{FormatCommand, escape};

    #[test]
    fn plain_arguments_are_borrowed() {
        assert_eq!(escape(OsStr::new("song.wav")), "song.wav");
        assert_eq!(escape(OsStr::new("")), "''");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(
            escape(OsStr::new("my song (live).wav")),
            "my\\ song\\ \\(live\\).wav"
        );
        assert_eq!(escape(OsStr::new("$HOME's")), "\\$HOME\\'s");
    }

    #[test]
    fn command_line() {
        let mut cmd = Command::new("ffmpeg");
        cmd.args(["-i", "a b.wav", "-y"]);
        assert_eq!(FormatCommand::new(&cmd).to_string(), "ffmpeg -i a\\ b.wav -y");
    }
}

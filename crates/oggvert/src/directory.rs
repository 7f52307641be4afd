use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Filesystem access needed by a conversion.
pub trait Directory {
    /// List the names of the immediate entries in `dir`, in listing order.
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Remove the file at `path`.
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// The local filesystem.
#[derive(Default, Clone, Copy)]
pub struct Disk;

impl Directory for Disk {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();

        for e in fs::read_dir(dir)? {
            names.push(e?.file_name());
        }

        Ok(names)
    }

    #[inline]
    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use super::{Directory, Disk};

    #[test]
    fn lists_immediate_entries() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.wav"), b"").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("b.wav"), b"").unwrap();

        let mut names = Disk.list(tmp.path()).unwrap();
        names.sort();
        assert_eq!(names, ["a.wav", "nested"]);
    }

    #[test]
    fn missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let e = Disk.list(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn remove_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.wav");
        fs::write(&path, b"").unwrap();

        Disk.remove(&path).unwrap();
        assert!(!path.exists());
        assert!(Disk.remove(&path).is_err());
    }
}

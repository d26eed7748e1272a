//! Filesystem helpers built on `cap-std` and `camino`.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the underlying IO error when the parent directory cannot be
/// opened or the entry cannot be inspected. A missing entry surfaces as
/// [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn detects_regular_files() {
        let (_tmp, root) = workspace();
        let path = root.join("spots.json");
        std::fs::write(&path, b"[]").expect("write file");
        assert!(file_is_file(&path).expect("inspect file"));
    }

    #[rstest]
    fn directories_are_not_files() {
        let (_tmp, root) = workspace();
        let path = root.join("nested");
        std::fs::create_dir(&path).expect("create dir");
        assert!(!file_is_file(&path).expect("inspect dir"));
    }

    #[rstest]
    fn missing_entries_report_not_found() {
        let (_tmp, root) = workspace();
        let err = file_is_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

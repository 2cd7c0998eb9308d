//! Filesystem helpers shared by generation, install and switch.
//!
//! Every error carries the path it failed on.

use crate::error::{ThemerError, ThemerResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::{Path, PathBuf};

pub const DIR_MODE: u32 = 0o755;
pub const FILE_MODE: u32 = 0o644;

/// `mkdir -p` with mode 0755 for every directory created.
pub fn create_dir_all(path: &Path) -> ThemerResult<()> {
    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(path)
        .map_err(|e| ThemerError::io(path, e))
}

/// Create the parent of `path` if it has one.
pub fn create_parent(path: &Path) -> ThemerResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Write `contents` to `path` and set its permission bits to `mode`.
pub fn write_file(path: &Path, contents: &[u8], mode: u32) -> ThemerResult<()> {
    fs::write(path, contents).map_err(|e| ThemerError::io(path, e))?;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| ThemerError::io(path, e))
}

/// Replace `path` with `contents` in one rename.
///
/// The data goes to a temporary file beside `path`, is synced, given `mode`
/// and then renamed over the target. On any failure the temporary file is
/// removed and `path` is left as it was.
pub fn write_atomic(path: &Path, contents: &[u8], mode: u32) -> ThemerResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".the-themer-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ThemerError::io(dir, e))?;

    temp.write_all(contents)
        .map_err(|e| ThemerError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| ThemerError::io(temp.path(), e))?;
    temp.as_file()
        .set_permissions(fs::Permissions::from_mode(mode))
        .map_err(|e| ThemerError::io(temp.path(), e))?;

    temp.persist(path).map_err(|e| ThemerError::io(path, e.error))?;
    Ok(())
}

/// Copy `src` onto `dest`, carrying over the source's permission bits.
pub fn copy_file(src: &Path, dest: &Path) -> ThemerResult<()> {
    fs::copy(src, dest).map_err(|e| ThemerError::io(src, e))?;
    Ok(())
}

pub fn sha256_file(path: &Path) -> ThemerResult<[u8; 32]> {
    let mut file = fs::File::open(path).map_err(|e| ThemerError::io(path, e))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(|e| ThemerError::io(path, e))?;
    Ok(hasher.finalize().into())
}

/// True when both files exist and their SHA-256 digests match.
pub fn files_equal(a: &Path, b: &Path) -> bool {
    matches!((sha256_file(a), sha256_file(b)), (Ok(x), Ok(y)) if x == y)
}

/// Regular files directly inside `dir`, sorted by name. Subdirectories and
/// other entry kinds are ignored.
pub fn regular_files(dir: &Path) -> ThemerResult<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| ThemerError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ThemerError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| ThemerError::io(entry.path(), e))?;
        if file_type.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Name of the first regular file in `dir`, by name order.
pub fn first_file(dir: &Path) -> ThemerResult<Option<String>> {
    Ok(regular_files(dir)?.into_iter().next().map(|(name, _)| name))
}

/// Sorted names of the subdirectories directly inside `dir`.
pub fn subdirectories(dir: &Path) -> ThemerResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ThemerError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ThemerError::io(dir, e))?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Point `link` at `target`, replacing whatever was there.
///
/// The parent directory is created first. Removal of the old entry is
/// best-effort; only the creation of the new link can fail.
pub fn replace_symlink(target: &Path, link: &Path) -> ThemerResult<()> {
    create_parent(link)?;
    let _ = fs::remove_file(link);
    std::os::unix::fs::symlink(target, link).map_err(|e| ThemerError::io(link, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;
    use std::os::unix::fs::MetadataExt;

    #[test]
    fn test_write_file_sets_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");

        assert_ok!(write_file(&path, b"x", 0o600));
        assert_eq!(fs::metadata(&path).unwrap().mode() & 0o777, 0o600);
    }

    #[test]
    fn test_regular_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let names: Vec<String> = regular_files(dir.path())
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(first_file(dir.path()).unwrap().as_deref(), Some("a.txt"));
        assert_eq!(subdirectories(dir.path()).unwrap(), vec!["nested"]);
    }

    #[test]
    fn test_files_equal() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "same").unwrap();
        fs::write(&b, "same").unwrap();
        assert!(files_equal(&a, &b));

        fs::write(&b, "different").unwrap();
        assert!(!files_equal(&a, &b));
        assert!(!files_equal(&a, &dir.path().join("missing")));
    }

    #[test]
    fn test_write_atomic_replaces_content_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "old").unwrap();

        assert_ok!(write_atomic(&path, b"new", 0o600));

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::metadata(&path).unwrap().mode() & 0o777, 0o600);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1, "no temp file left");
    }

    #[test]
    fn test_write_atomic_failure_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing_parent = dir.path().join("absent").join("settings.json");

        assert!(write_atomic(&missing_parent, b"x", 0o644).is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_replace_symlink_swaps_target() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        fs::write(&first, "1").unwrap();
        fs::write(&second, "2").unwrap();
        let link = dir.path().join("links").join("current");

        assert_ok!(replace_symlink(&first, &link));
        assert_ok!(replace_symlink(&second, &link));

        assert_eq!(fs::read_link(&link).unwrap(), second);
        assert_eq!(fs::read_to_string(&link).unwrap(), "2");
    }
}

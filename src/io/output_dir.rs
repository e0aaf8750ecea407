use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Remove `dir` with everything in it and create it again, empty.
///
/// A missing `dir` is not an error. Parent directories are created as needed.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => info!("Removed previous output directory {:?}", dir),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_directory() {
        let root = tempdir().unwrap();
        let dir = root.path().join("nested").join("posts");

        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn wipes_existing_contents() {
        let root = tempdir().unwrap();
        let dir = root.path().join("posts");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("old.md"), "stale").unwrap();
        fs::write(dir.join("sub").join("deep.md"), "stale").unwrap();

        prepare_output_dir(&dir).unwrap();
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }
}

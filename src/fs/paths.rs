//! Destination paths and output directory management.

use std::path::{Path, PathBuf};

use crate::catalog::AssetLink;
use crate::error::{AssetError, Result};
use crate::output::prompt::{Confirm, Confirmation};

/// Local path for an asset: `<output_dir>/<assetId>-<basename>`.
pub fn destination_entry(output_dir: &Path, link: &AssetLink) -> std::result::Result<PathBuf, AssetError> {
    Ok(output_dir.join(link.file_name()?))
}

/// Result of preparing the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirPreparation {
    /// The directory did not exist and was created.
    Created,
    /// The directory existed, was confirmed for removal and recreated empty.
    Recreated,
    /// The directory existed and the user declined; nothing was touched.
    Declined,
}

/// Create the output directory, replacing an existing one only after confirmation.
pub fn prepare_output_dir(path: &Path, confirm: &dyn Confirm) -> Result<DirPreparation> {
    if path.exists() {
        let message = format!(
            "Directory {} already exists, and will be erased. Do you want to continue?",
            path.display()
        );
        match confirm.confirm(&message) {
            Confirmation::Yes => {}
            Confirmation::No | Confirmation::Cancelled => {
                tracing::debug!("Keeping existing directory {}", path.display());
                return Ok(DirPreparation::Declined);
            }
        }

        tracing::debug!("Removing existing directory {}", path.display());
        if path.is_dir() {
            std::fs::remove_dir_all(path)?;
        } else {
            std::fs::remove_file(path)?;
        }
        std::fs::create_dir_all(path)?;
        return Ok(DirPreparation::Recreated);
    }

    std::fs::create_dir_all(path)?;
    Ok(DirPreparation::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::prompt::FixedConfirm;

    #[test]
    fn test_destination_entry() {
        let link = AssetLink::new("https://www.svgrepo.com/show/532994/search.svg");
        let path = destination_entry(Path::new("/downloads/icons"), &link).unwrap();
        assert_eq!(path, PathBuf::from("/downloads/icons/532994-search.svg"));
        assert_eq!(path, destination_entry(Path::new("/downloads/icons"), &link).unwrap());
    }

    #[test]
    fn test_prepare_creates_missing_dir_with_parents() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("a").join("b");

        let result = prepare_output_dir(&target, &FixedConfirm(Confirmation::No)).unwrap();
        assert_eq!(result, DirPreparation::Created);
        assert!(target.is_dir());
    }

    #[test]
    fn test_prepare_declined_leaves_dir_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let existing = temp.path().join("keep.svg");
        std::fs::write(&existing, "<svg/>").unwrap();

        for answer in [Confirmation::No, Confirmation::Cancelled] {
            let result = prepare_output_dir(temp.path(), &FixedConfirm(answer)).unwrap();
            assert_eq!(result, DirPreparation::Declined);
            assert!(existing.exists());
        }
    }

    #[test]
    fn test_prepare_confirmed_recreates_empty_dir() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("out");
        std::fs::create_dir_all(target.join("nested")).unwrap();
        std::fs::write(target.join("old.svg"), "<svg/>").unwrap();

        let result = prepare_output_dir(&target, &FixedConfirm(Confirmation::Yes)).unwrap();
        assert_eq!(result, DirPreparation::Recreated);
        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }
}

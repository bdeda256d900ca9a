use chapter_types::Resource;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::Result;

/// What a local content directory holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentInventory {
    pub present: Vec<Resource>,
    pub missing: Vec<Resource>,
    /// `.json` files that no resource maps to
    pub unknown: Vec<PathBuf>,
}

impl ContentInventory {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// List the JSON documents directly under `root`.
///
/// Nested directories are ignored; content lives flat under the root. A root
/// that exists but cannot be listed is an error; unreadable entries inside it
/// are logged and skipped.
pub fn scan_content_dir(root: &Path) -> Result<ContentInventory> {
    if !root.exists() {
        return Ok(ContentInventory {
            missing: Resource::ALL.to_vec(),
            ..ContentInventory::default()
        });
    }

    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", root.display()),
        )
        .into());
    }

    let mut present = Vec::new();
    let mut unknown = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(io::Error::from(err).into()),
            Err(err) => {
                warn!(error = %err, "skipping unreadable content entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match file_name.parse::<Resource>() {
            Ok(resource) => present.push(resource),
            Err(_) => unknown.push(path.to_path_buf()),
        }
    }

    let missing = Resource::ALL
        .iter()
        .copied()
        .filter(|r| !present.contains(r))
        .collect();

    Ok(ContentInventory {
        present,
        missing,
        unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_reports_everything_missing() {
        let dir = TempDir::new().unwrap();
        let inventory = scan_content_dir(&dir.path().join("nope")).unwrap();
        assert!(inventory.present.is_empty());
        assert_eq!(inventory.missing.len(), Resource::ALL.len());
    }

    #[test]
    fn test_file_as_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("events.json");
        std::fs::write(&file, "[]").unwrap();

        let err = scan_content_dir(&file).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_classifies_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("events.json"), "[]").unwrap();
        std::fs::write(dir.path().join("faq.json"), "[]").unwrap();
        std::fs::write(dir.path().join("sponsors.json"), "[]").unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();
        std::fs::write(dir.path().join("drafts").join("team.json"), "[]").unwrap();

        let inventory = scan_content_dir(dir.path()).unwrap();

        assert_eq!(inventory.present, vec![Resource::Events, Resource::Faq]);
        assert_eq!(
            inventory.unknown,
            vec![dir.path().join("sponsors.json")]
        );
        assert!(inventory.missing.contains(&Resource::Team));
        assert!(!inventory.is_complete());
    }
}

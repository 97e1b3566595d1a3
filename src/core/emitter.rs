use std::fs;
use std::path::{Path, PathBuf};

use crate::core::hash::compute_content_hash;
use crate::core::manifest::FileSpec;
use crate::error::{ErrorContext, Result};

/// Outcome of a single file write, for operator reporting only.
///
/// The write itself is identical in every case: create-or-truncate, full
/// content, last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed at the destination.
    Created,
    /// A file existed with different content.
    Updated,
    /// A file existed with byte-identical content.
    Unchanged,
}

impl WriteOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "new",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

/// Writes the fixed scaffold manifest beneath a target root directory.
///
/// All paths in the manifest are relative; the emitter resolves them against
/// `root` and never touches anything outside it. Every operation either fully
/// succeeds or surfaces the underlying I/O error, which callers treat as
/// fatal.
pub struct ScaffoldEmitter {
    root: PathBuf,
}

impl ScaffoldEmitter {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create `rel` and all missing ancestor segments under the root.
    /// No-op (not an error) when the path already exists.
    pub fn ensure_dir_tree(&self, rel: &str) -> Result<PathBuf> {
        let path = self.root.join(rel);
        if !path.exists() {
            fs::create_dir_all(&path)
                .with_io_context(|| format!("creating directory {}", path.display()))?;
        }
        Ok(path)
    }

    /// Write one manifest entry, creating its parent directory first when the
    /// path carries a directory component. Existing files are truncated and
    /// rewritten; the returned outcome says whether the content changed.
    pub fn write_file(&self, spec: &FileSpec) -> Result<WriteOutcome> {
        let dest = self.root.join(spec.path);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_io_context(|| format!("creating directory {}", parent.display()))?;
            }
        }

        let outcome = match fs::read(&dest) {
            Ok(existing) => {
                if compute_content_hash(&existing)
                    == compute_content_hash(spec.contents.as_bytes())
                {
                    WriteOutcome::Unchanged
                } else {
                    WriteOutcome::Updated
                }
            }
            Err(_) => WriteOutcome::Created,
        };

        fs::write(&dest, spec.contents)
            .with_io_context(|| format!("writing {}", dest.display()))?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest;
    use tempfile::tempdir;

    #[test]
    fn ensure_dir_tree_creates_nested_segments_and_is_idempotent() {
        let tmp = tempdir().unwrap();
        let emitter = ScaffoldEmitter::new(tmp.path());

        let created = emitter.ensure_dir_tree("src/app/face-recognition").unwrap();
        assert!(created.is_dir());

        // Second call is a no-op, not an error.
        emitter.ensure_dir_tree("src/app/face-recognition").unwrap();
        assert!(created.is_dir());
    }

    #[test]
    fn write_file_creates_missing_parent() {
        let tmp = tempdir().unwrap();
        let emitter = ScaffoldEmitter::new(tmp.path());
        let spec = manifest::FILES[0];

        let outcome = emitter.write_file(&spec).unwrap();
        assert_eq!(outcome, WriteOutcome::Created);

        let written = fs::read_to_string(tmp.path().join(spec.path)).unwrap();
        assert_eq!(written, spec.contents);
    }

    #[test]
    fn rewrite_reports_unchanged_then_updated_after_drift() {
        let tmp = tempdir().unwrap();
        let emitter = ScaffoldEmitter::new(tmp.path());
        let spec = manifest::FILES[1];

        assert_eq!(emitter.write_file(&spec).unwrap(), WriteOutcome::Created);
        assert_eq!(emitter.write_file(&spec).unwrap(), WriteOutcome::Unchanged);

        // Manual edit, then rerun restores the manifest content.
        let dest = tmp.path().join(spec.path);
        fs::write(&dest, "// local edit\n").unwrap();
        assert_eq!(emitter.write_file(&spec).unwrap(), WriteOutcome::Updated);
        assert_eq!(fs::read_to_string(&dest).unwrap(), spec.contents);
    }

    #[test]
    fn full_manifest_pass_materializes_the_scaffold() {
        let tmp = tempdir().unwrap();
        let emitter = ScaffoldEmitter::new(tmp.path());

        for dir in manifest::DIRECTORIES {
            emitter.ensure_dir_tree(dir).unwrap();
        }
        for spec in manifest::FILES {
            emitter.write_file(&spec).unwrap();
        }

        for dir in manifest::DIRECTORIES {
            assert!(tmp.path().join(dir).is_dir(), "{} missing", dir);
        }
        for spec in manifest::FILES {
            let on_disk = fs::read_to_string(tmp.path().join(spec.path)).unwrap();
            assert_eq!(on_disk, spec.contents, "{} drifted", spec.path);
        }
    }
}

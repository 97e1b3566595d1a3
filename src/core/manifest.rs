use crate::core::templates;

/// Relative directory skeleton of the generated frontend, in creation order.
///
/// Duplicates would be harmless (creation is idempotent) but the list holds
/// none. Ancestors not listed here (e.g. `src/app`) are created implicitly.
pub const DIRECTORIES: [&str; 27] = [
    "src/app/login",
    "src/app/register",
    "src/app/dashboard",
    "src/app/devices",
    "src/app/rooms",
    "src/app/schedules",
    "src/app/alerts",
    "src/app/sensors",
    "src/app/events",
    "src/app/analytics",
    "src/app/face-recognition",
    "src/components/ui",
    "src/components/layout",
    "src/components/devices",
    "src/components/rooms",
    "src/components/schedules",
    "src/components/alerts",
    "src/components/sensors",
    "src/components/events",
    "src/components/analytics",
    "src/components/face-recognition",
    "src/lib",
    "src/hooks",
    "src/stores",
    "src/types",
    "src/utils",
    "public",
];

/// One file to be emitted: a working-directory-relative path and the literal
/// content written there.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    pub path: &'static str,
    pub contents: &'static str,
}

/// Files of the scaffold, in emission order. A later entry targeting the same
/// path as an earlier one would win; the shipped manifest has distinct paths.
pub const FILES: [FileSpec; 3] = [
    FileSpec {
        path: "src/app/globals.css",
        contents: templates::GLOBALS_CSS,
    },
    FileSpec {
        path: "src/lib/utils.ts",
        contents: templates::LIB_UTILS_TS,
    },
    FileSpec {
        path: "src/types/device.ts",
        contents: templates::DEVICE_TYPES_TS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn directory_manifest_is_relative_and_distinct() {
        let mut seen = HashSet::new();
        for dir in DIRECTORIES {
            assert!(Path::new(dir).is_relative(), "{} must be relative", dir);
            assert!(seen.insert(dir), "{} listed twice", dir);
        }
        assert_eq!(DIRECTORIES.len(), 27);
    }

    #[test]
    fn file_manifest_paths_are_relative_and_distinct() {
        let mut seen = HashSet::new();
        for spec in FILES {
            assert!(Path::new(spec.path).is_relative());
            assert!(Path::new(spec.path).parent().is_some());
            assert!(seen.insert(spec.path), "{} listed twice", spec.path);
            assert!(!spec.contents.is_empty());
        }
        assert_eq!(FILES.len(), 3);
    }

    #[test]
    fn file_parents_are_covered_by_the_directory_manifest_or_its_ancestors() {
        // Every file parent is either a listed directory or an ancestor of
        // one, so a run that creates the skeleton first never relies on
        // write_file's own parent creation.
        for spec in FILES {
            let parent = Path::new(spec.path).parent().unwrap();
            let covered = DIRECTORIES
                .iter()
                .any(|d| Path::new(d) == parent || Path::new(d).starts_with(parent));
            assert!(covered, "{} has uncovered parent", spec.path);
        }
    }
}

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Name filter for the files a pipeline picks up in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub prefix: String,
    /// Without the leading dot
    pub extension: String,
}

impl FileFilter {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix)
            && file_name
                .strip_suffix(&self.extension)
                .is_some_and(|stem| stem.ends_with('.'))
    }
}

/// Regular files directly inside `dir` whose name passes `filter`, sorted by name.
pub fn scan_directory(dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!("Skipping non UTF-8 file name: {:?}", name);
            continue;
        };
        if filter.matches(name) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

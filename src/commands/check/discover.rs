use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use crate::util::containing_dir;

pub fn find_epub_near(path: &Path) -> Result<Option<PathBuf>> {
    let candidates = sibling_files(&containing_dir(path), "epub")?;
    Ok(candidates.into_iter().next())
}

pub fn find_toc_near(path: &Path, pattern: &Regex) -> Result<Option<PathBuf>> {
    let candidates = sibling_files(&containing_dir(path), "xlsx")?;
    Ok(candidates.into_iter().find(|candidate| {
        candidate
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| pattern.is_match(name))
            .unwrap_or(false)
    }))
}

fn sibling_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();

        if !entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file()
        {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::error::AppError;

/// Parse a directory mapping: semicolon-separated entries, each either
/// `name=path` or a bare path. A bare path is mounted under a generated
/// `<index>:<basename>` namespace so that several unnamed directories stay
/// distinguishable.
pub fn parse_dirs(mapping: &str) -> Result<BTreeMap<String, PathBuf>, AppError> {
    let mut dirs = BTreeMap::new();

    for (i, entry) in mapping.split(';').enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, path) = match entry.split_once('=') {
            Some((name, path)) => (name.to_string(), path),
            None => {
                let base = Path::new(entry)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| entry.to_string());
                (format!("{}:{}", i, base), entry)
            }
        };

        if dirs.insert(name.clone(), PathBuf::from(path)).is_some() {
            return Err(AppError::InvalidDirsMapping(format!(
                "duplicate directory name: {}",
                name
            )));
        }
    }

    if dirs.is_empty() {
        return Err(AppError::InvalidDirsMapping(
            "no directories given".to_string(),
        ));
    }

    Ok(dirs)
}
